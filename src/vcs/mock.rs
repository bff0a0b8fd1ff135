use std::sync::Mutex;

use crate::error::{BumpError, Result};
use crate::vcs::Vcs;

/// Mock [Vcs] for testing without touching a real repository.
///
/// Records every invocation in order and can be armed to fail at a named
/// operation to exercise mid-sequence failure handling.
pub struct MockVcs {
    calls: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl MockVcs {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        MockVcs {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Create a mock that fails when the named operation is invoked
    pub fn failing_on(operation: impl Into<String>) -> Self {
        MockVcs {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(operation.into()),
        }
    }

    /// The operations invoked so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    fn record(&self, call: String, operation: &str) -> Result<()> {
        self.calls.lock().expect("mock lock poisoned").push(call);
        match &self.fail_on {
            Some(op) if op == operation => Err(BumpError::vcs(format!(
                "mock failure in {}",
                operation
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for MockVcs {
    fn stage_all(&self) -> Result<()> {
        self.record("add -A".to_string(), "stage_all")
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit -m {}", message), "commit")
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.record(format!("tag {}", name), "tag")
    }

    fn push(&self, remote: &str) -> Result<()> {
        self.record(format!("push {}", remote), "push")
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.record(format!("push {} --tags", remote), "push_tags")
    }
}
