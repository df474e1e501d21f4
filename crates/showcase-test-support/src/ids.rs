//! Deterministic identity generators.

use showcase_ui::core::ids::IdGenerator;

/// Yields `"{prefix}-0"`, `"{prefix}-1"`, and so on.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Start a sequence at zero.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Number of identities handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let mut ids = SequentialIds::new("item");
        assert_eq!(ids.generate(), "item-0");
        assert_eq!(ids.generate(), "item-1");
        assert_eq!(ids.issued(), 2);
    }
}
