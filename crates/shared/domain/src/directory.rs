//! Existence lookups for person identifiers.

use std::collections::BTreeSet;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::constants::KNOWN_PERSON_IDS;

/// Answers whether a person identifier exists.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PersonDirectory: Send + Sync {
    fn contains(&self, person_id: i64) -> bool;
}

/// Fixed, read-only set of identifiers built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownPersonIds {
    ids: BTreeSet<i64>,
}

impl KnownPersonIds {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl Default for KnownPersonIds {
    fn default() -> Self {
        Self::new(KNOWN_PERSON_IDS)
    }
}

impl PersonDirectory for KnownPersonIds {
    fn contains(&self, person_id: i64) -> bool {
        self.ids.contains(&person_id)
    }
}
