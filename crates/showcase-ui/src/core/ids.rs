//! Identifier generation for components that link elements by `id`.
//!
//! # Design
//! - Generators are injected so tests can supply deterministic identities.
//! - The default generator is UUID-backed; collisions across mounted
//!   components are negligible.

use uuid::Uuid;

use crate::core::config::DEFAULT_ID_PREFIX;

/// Source of unique element identities.
pub trait IdGenerator {
    /// Produce the next identity. Every call must return a value distinct from
    /// all identities still in use.
    fn generate(&mut self) -> String;
}

/// UUID v4 backed generator producing `"{prefix}-{uuid}"` identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UuidIds {
    prefix: String,
}

impl UuidIds {
    /// Build a generator that prefixes every identity with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Prefix applied to generated identities.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for UuidIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator for UuidIds {
    fn generate(&mut self) -> String {
        format!("{}-{}", self.prefix, Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_carry_prefix() {
        let mut ids = UuidIds::new("faq");
        let id = ids.generate();
        assert!(id.starts_with("faq-"));
        assert!(Uuid::parse_str(&id["faq-".len()..]).is_ok());
    }

    #[test]
    fn default_prefix_matches_accordion_items() {
        assert_eq!(UuidIds::default().prefix(), "accordion-item");
    }
}
