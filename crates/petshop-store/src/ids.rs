//! # Id Generation
//!
//! Entity ids are random UUID v4 strings. Rapid successive creates can't
//! collide the way clock-derived ids do, and the generator keeps every id it
//! has issued so a deleted record's id is never handed out again.

use std::collections::HashSet;

use uuid::Uuid;

#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Returns an id that this generator has never returned before.
    pub fn next_id(&mut self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_under_rapid_creation() {
        let mut ids = IdGenerator::new();
        let generated: HashSet<String> = (0..10_000).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 10_000);
        assert_eq!(ids.issued_count(), 10_000);
    }

    #[test]
    fn test_ids_are_uuids() {
        let mut ids = IdGenerator::new();
        assert!(Uuid::parse_str(&ids.next_id()).is_ok());
    }
}
