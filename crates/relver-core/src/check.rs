//! Consistency check report types
//!
//! The checker itself lives on [`crate::Synchronizer`]; this module holds the
//! report it produces. Printing belongs to the caller.

use std::collections::BTreeSet;

/// Version found (or not) for a single tracked component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentVersion {
    /// Component directory, relative to the repository root
    pub directory: String,
    /// Extracted version token, `None` if the file is missing, unreadable,
    /// or holds no version line
    pub version: Option<String>,
}

/// Report from a version consistency check
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// One finding per configured component, in configuration order
    pub components: Vec<ComponentVersion>,
}

impl CheckReport {
    /// Whether every component reports the same, present version token.
    ///
    /// Consistent only when the set of distinct tokens has exactly one
    /// member and that member is present. An empty component list is
    /// inconsistent.
    pub fn is_consistent(&self) -> bool {
        let versions: BTreeSet<Option<&str>> = self
            .components
            .iter()
            .map(|c| c.version.as_deref())
            .collect();
        versions.len() == 1 && !versions.contains(&None)
    }

    /// The shared version token, when the report is consistent
    pub fn consistent_version(&self) -> Option<&str> {
        if self.is_consistent() {
            self.components.first().and_then(|c| c.version.as_deref())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(directory: &str, version: Option<&str>) -> ComponentVersion {
        ComponentVersion {
            directory: directory.to_string(),
            version: version.map(String::from),
        }
    }

    #[test]
    fn identical_tokens_are_consistent() {
        let report = CheckReport {
            components: vec![
                component("a", Some("\"0.16.0\"")),
                component("b", Some("\"0.16.0\"")),
                component("c", Some("\"0.16.0\"")),
            ],
        };
        assert!(report.is_consistent());
        assert_eq!(report.consistent_version(), Some("\"0.16.0\""));
    }

    #[test]
    fn differing_token_is_inconsistent() {
        let report = CheckReport {
            components: vec![
                component("a", Some("\"0.16.0\"")),
                component("b", Some("\"0.15.0\"")),
            ],
        };
        assert!(!report.is_consistent());
        assert_eq!(report.consistent_version(), None);
    }

    #[test]
    fn absent_token_is_inconsistent() {
        let report = CheckReport {
            components: vec![
                component("a", Some("\"0.16.0\"")),
                component("b", None),
            ],
        };
        assert!(!report.is_consistent());
    }

    #[test]
    fn all_absent_is_inconsistent() {
        let report = CheckReport {
            components: vec![component("a", None), component("b", None)],
        };
        assert!(!report.is_consistent());
    }

    #[test]
    fn empty_report_is_inconsistent() {
        let report = CheckReport::default();
        assert!(!report.is_consistent());
    }

    #[test]
    fn single_present_component_is_consistent() {
        let report = CheckReport {
            components: vec![component("a", Some("\"1.0.0\""))],
        };
        assert!(report.is_consistent());
    }
}
