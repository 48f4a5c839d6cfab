//! Processing Task Registry
//!
//! Reference-counted labels of in-flight operations. The UI only asks
//! "is anything running", so labels are counted, not deduplicated.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingTasks {
    counts: BTreeMap<String, u32>,
}

impl ProcessingTasks {
    /// Register one more in-flight operation under `label`
    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Release one in-flight operation under `label`. Unknown labels are ignored.
    pub fn remove(&mut self, label: &str) {
        if let Some(count) = self.counts.get_mut(label) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(label);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Labels currently in flight, sorted
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
