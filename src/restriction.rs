// ABOUTME: Dietary restriction value type holding a set of excluded category names
// ABOUTME: Implements forbids and compatibility checks against taxonomy categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;

/// Set of excluded food categories, compared by value.
///
/// Names are stored uppercased and need not be defined in any taxonomy. A
/// category is forbidden when it is one of the excluded names or descends
/// from one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RestrictionRecord")]
pub struct DietaryRestriction {
    excluded: BTreeSet<String>,
}

/// Wire form of a restriction, normalized through [`DietaryRestriction::new`]
#[derive(Deserialize)]
struct RestrictionRecord {
    #[serde(default)]
    excluded: Vec<String>,
}

impl From<RestrictionRecord> for DietaryRestriction {
    fn from(record: RestrictionRecord) -> Self {
        Self::new(record.excluded)
    }
}

impl DietaryRestriction {
    /// Build a restriction from any collection of category names
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(|name| name.as_ref().trim().to_uppercase())
                .collect(),
        }
    }

    /// Restriction that excludes nothing
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Excluded category names in sorted order
    #[must_use]
    pub const fn excluded(&self) -> &BTreeSet<String> {
        &self.excluded
    }

    /// Whether nothing is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// Number of excluded categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// Whether `name` is literally one of the excluded names
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        self.excluded.contains(&name.trim().to_uppercase())
    }

    /// Whether every excluded name of `self` is also excluded by `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.excluded.is_subset(&other.excluded)
    }

    /// Whether `category` is an excluded category or a descendant of one
    #[must_use]
    pub fn forbids(&self, category: &Category<'_>) -> bool {
        self.excluded.iter().any(|excluded| category.is_a(excluded))
    }

    /// Whether none of `categories` is forbidden
    #[must_use]
    pub fn is_compatible_with(&self, categories: &[Category<'_>]) -> bool {
        !categories.iter().any(|category| self.forbids(category))
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .excluded
            .iter()
            .map(|name| format!("'{name}'"))
            .collect();
        write!(f, "DietaryRestriction(Excludes: [{}])", names.join(", "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for DietaryRestriction {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
