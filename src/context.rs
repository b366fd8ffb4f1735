// ABOUTME: Caller-owned pairing of a category taxonomy and a tag registry
// ABOUTME: Replaces process-wide registries so independent schemes can coexist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::collections::BTreeSet;

use mealplanner_core::errors::AppResult;

use crate::defaults::setup_defaults;
use crate::restriction::DietaryRestriction;
use crate::tags::TagRegistry;
use crate::taxonomy::Taxonomy;

/// Taxonomy and tags that belong together
#[derive(Debug, Clone, Default)]
pub struct DietaryContext {
    /// Food categories
    pub taxonomy: Taxonomy,
    /// Dietary tags
    pub tags: TagRegistry,
}

impl DietaryContext {
    /// Empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with the default categories and tags
    ///
    /// # Errors
    ///
    /// Returns an error if the seed data is inconsistent
    pub fn with_defaults() -> AppResult<Self> {
        let mut context = Self::new();
        setup_defaults(&mut context)?;
        Ok(context)
    }

    /// Minimal canonical tags for `restriction`
    #[must_use]
    pub fn canonical_tags(&self, restriction: &DietaryRestriction) -> Vec<String> {
        self.tags.minimal_canonical_tags(restriction)
    }

    /// Hierarchy-implied tags for `restriction`
    #[must_use]
    pub fn implied_tags(&self, restriction: &DietaryRestriction) -> BTreeSet<String> {
        self.tags.all_implied_tags(&self.taxonomy, restriction)
    }
}
