// ABOUTME: Ordered registry of named dietary tags bound to restrictions
// ABOUTME: Derives minimal canonical tags via exact match plus greedy subset cover, and hierarchy-implied tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! # Dietary Tags
//!
//! A [`TagRegistry`] keeps tags in registration order. That order is the
//! tie-break for both tag-derivation operations:
//!
//! - [`TagRegistry::minimal_canonical_tags`]: exact match first, then a
//!   greedy subset cover with `{CATEGORY}-FREE` fallbacks for leftovers.
//!   A vegan restriction labels as `VEGAN` only.
//! - [`TagRegistry::all_implied_tags`]: every tag whose exclusions are
//!   implied through the taxonomy. A vegan restriction also carries
//!   `VEGETARIAN`, `MEAT-FREE`, `DAIRY-FREE` and so on.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use mealplanner_core::constants::{FREE_TAG_SUFFIX, NO_RESTRICTIONS_TAG, UNSPECIFIED_TAG_CATEGORY};
use mealplanner_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::restriction::DietaryRestriction;
use crate::taxonomy::Taxonomy;

/// Named restriction with a free-form category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Uppercase tag name
    pub name: String,
    /// Restriction the tag stands for
    pub restriction: DietaryRestriction,
    /// Lowercase category label such as `ethical` or `allergen`
    pub category: String,
}

impl Tag {
    /// Build a tag, normalizing the name to uppercase and the label to lowercase
    pub fn new(
        name: impl AsRef<str>,
        restriction: DietaryRestriction,
        category: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_uppercase(),
            restriction,
            category: category.as_ref().trim().to_lowercase(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({}, category={})", self.name, self.category)
    }
}

/// Insertion-ordered collection of tags
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
    index: HashMap<String, usize>,
}

impl TagRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new tag.
    ///
    /// Pass `None` as the category to use the `unspecified` label.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is already registered.
    pub fn register_tag(
        &mut self,
        name: &str,
        restriction: DietaryRestriction,
        category: Option<&str>,
    ) -> AppResult<()> {
        let tag = Tag::new(name, restriction, category.unwrap_or(UNSPECIFIED_TAG_CATEGORY));
        if self.index.contains_key(&tag.name) {
            return Err(AppError::already_exists("Tag", tag.name));
        }
        debug!(tag = %tag.name, category = %tag.category, "Registered dietary tag");
        self.index.insert(tag.name.clone(), self.tags.len());
        self.tags.push(tag);
        Ok(())
    }

    /// Register a tag, replacing any existing one with the same name.
    ///
    /// A replaced tag keeps its original position in registration order.
    pub fn overwrite_tag(
        &mut self,
        name: &str,
        restriction: DietaryRestriction,
        category: Option<&str>,
    ) {
        let tag = Tag::new(name, restriction, category.unwrap_or(UNSPECIFIED_TAG_CATEGORY));
        if let Some(&position) = self.index.get(&tag.name) {
            debug!(tag = %tag.name, "Overwrote dietary tag");
            self.tags[position] = tag;
        } else {
            debug!(tag = %tag.name, category = %tag.category, "Registered dietary tag");
            self.index.insert(tag.name.clone(), self.tags.len());
            self.tags.push(tag);
        }
    }

    /// Restriction bound to a tag name (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the tag is not registered.
    pub fn get_tag(&self, name: &str) -> AppResult<&DietaryRestriction> {
        self.get(name)
            .map(|tag| &tag.restriction)
            .ok_or_else(|| AppError::not_found("Tag", name.trim().to_uppercase()))
    }

    /// Full tag record, if registered
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.index
            .get(&name.trim().to_uppercase())
            .map(|&position| &self.tags[position])
    }

    /// Tag names in registration order
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.name.as_str()).collect()
    }

    /// Tag records in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Names of tags whose category label matches (case-insensitive)
    #[must_use]
    pub fn tags_by_category(&self, category: &str) -> Vec<&str> {
        let category = category.trim().to_lowercase();
        self.tags
            .iter()
            .filter(|tag| tag.category == category)
            .map(|tag| tag.name.as_str())
            .collect()
    }

    /// Number of registered tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Remove every tag
    pub fn clear(&mut self) {
        debug!(tags = self.tags.len(), "Clearing tag registry");
        self.tags.clear();
        self.index.clear();
    }

    /// Smallest ordered label set describing `restriction`.
    ///
    /// 1. The first tag whose exclusions equal the restriction's wins alone.
    /// 2. Otherwise candidates (non-empty subsets of the restriction) are
    ///    stably sorted by size, largest first, and taken while they fit in
    ///    what is still uncovered.
    /// 3. Leftover categories become `{CATEGORY}-FREE`, sorted.
    ///
    /// An empty restriction only matches a tag registered with an empty set,
    /// and otherwise yields an empty list.
    #[must_use]
    pub fn minimal_canonical_tags(&self, restriction: &DietaryRestriction) -> Vec<String> {
        if let Some(tag) = self
            .tags
            .iter()
            .find(|tag| tag.restriction.excluded() == restriction.excluded())
        {
            return vec![tag.name.clone()];
        }

        let mut candidates: Vec<&Tag> = self
            .tags
            .iter()
            .filter(|tag| !tag.restriction.is_empty() && tag.restriction.is_subset(restriction))
            .collect();
        candidates.sort_by(|a, b| b.restriction.len().cmp(&a.restriction.len()));

        let mut remaining: BTreeSet<String> = restriction.excluded().clone();
        let mut result = Vec::new();
        for tag in candidates {
            if remaining.is_empty() {
                break;
            }
            if tag.restriction.excluded().is_subset(&remaining) {
                result.push(tag.name.clone());
                remaining.retain(|name| !tag.restriction.excluded().contains(name));
            }
        }

        result.extend(
            remaining
                .into_iter()
                .map(|category| format!("{category}{FREE_TAG_SUFFIX}")),
        );
        result
    }

    /// Alias for [`Self::minimal_canonical_tags`]
    #[must_use]
    pub fn generate_tags(&self, restriction: &DietaryRestriction) -> Vec<String> {
        self.minimal_canonical_tags(restriction)
    }

    /// Every tag the restriction implies through the taxonomy, plus the
    /// canonical tags.
    ///
    /// A tag is implied when each of its excluded categories is, or descends
    /// from, some category the restriction excludes. Categories unknown to
    /// the taxonomy only match themselves. An empty restriction yields
    /// `{"NO-RESTRICTIONS"}`. The restriction itself is never modified.
    #[must_use]
    pub fn all_implied_tags(
        &self,
        taxonomy: &Taxonomy,
        restriction: &DietaryRestriction,
    ) -> BTreeSet<String> {
        if restriction.is_empty() {
            return BTreeSet::from([NO_RESTRICTIONS_TAG.to_owned()]);
        }

        let mut implied: BTreeSet<String> = self
            .tags
            .iter()
            .filter(|tag| !tag.restriction.is_empty())
            .filter(|tag| {
                tag.restriction.excluded().iter().all(|tag_category| {
                    restriction
                        .excluded()
                        .iter()
                        .any(|excluded| taxonomy.is_subtype_of(tag_category, excluded))
                })
            })
            .map(|tag| tag.name.clone())
            .collect();
        implied.extend(self.minimal_canonical_tags(restriction));
        implied
    }
}
