//! Confirmation gate for destructive actions

/// Synchronous yes/no prompt shown before records are deleted.
///
/// Closures taking the prompt text implement this directly.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a confirmation-gated delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing matched, so no prompt was shown
    NothingToDelete,
    /// The prompt was declined; collection and selection are unchanged
    Declined,
    /// This many records were removed
    Deleted(usize),
}

impl DeleteOutcome {
    pub fn deleted_count(&self) -> usize {
        match self {
            Self::Deleted(count) => *count,
            _ => 0,
        }
    }
}
