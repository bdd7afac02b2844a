//! Execution targets a bundle may be sent to

use std::fmt;

/// A machine a job can be launched on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    pub label: String,
    pub hostname: String,
}

impl Computer {
    pub fn new(label: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hostname: hostname.into(),
        }
    }

    /// The machine this process runs on
    pub fn localhost() -> Self {
        Self::new("localhost", "localhost")
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.hostname)
    }
}
