//! Payer directory
//!
//! Maps payee names to the source ("Fonte") that pays their royalties.

use std::collections::HashMap;

/// Lookup from payee name to payer
///
/// A name is assumed to map to at most one payer. Names that are not in the
/// directory resolve to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayerDirectory {
    payers: HashMap<String, String>,
}

impl PayerDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the payer for a name, returning the payer it replaced
    pub fn insert(&mut self, name: impl Into<String>, payer: impl Into<String>) -> Option<String> {
        self.payers.insert(name.into(), payer.into())
    }

    /// Resolve the payer for a name ("" when unknown)
    pub fn payer_for(&self, name: &str) -> &str {
        self.payers.get(name).map(String::as_str).unwrap_or("")
    }

    /// Number of names in the directory
    pub fn len(&self) -> usize {
        self.payers.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.payers.is_empty()
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for PayerDirectory {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (name, payer) in iter {
            directory.insert(name, payer);
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_resolves_empty() {
        let directory: PayerDirectory = [("Ana", "ECAD")].into_iter().collect();
        assert_eq!(directory.payer_for("Ana"), "ECAD");
        assert_eq!(directory.payer_for("Bruno"), "");
        assert_eq!(PayerDirectory::new().payer_for("Ana"), "");
    }

    #[test]
    fn test_last_entry_wins() {
        let directory: PayerDirectory = [("Ana", "ECAD"), ("Ana", "UBC")].into_iter().collect();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.payer_for("Ana"), "UBC");
    }
}
