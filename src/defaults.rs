// ABOUTME: Bootstrap procedures that seed a taxonomy and tag registry with the default scheme
// ABOUTME: Resets the target first so callers can re-seed an existing context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use mealplanner_core::constants::seeds::{DEFAULT_CATEGORIES, DEFAULT_TAGS};
use mealplanner_core::errors::AppResult;
use tracing::info;

use crate::context::DietaryContext;
use crate::restriction::DietaryRestriction;
use crate::tags::TagRegistry;
use crate::taxonomy::Taxonomy;

/// Replace the contents of `taxonomy` with the default food hierarchy
///
/// # Errors
///
/// Returns an error if the seed table references a parent before defining it
pub fn setup_default_food_categories(taxonomy: &mut Taxonomy) -> AppResult<()> {
    taxonomy.reset();
    for (name, parents) in DEFAULT_CATEGORIES {
        taxonomy.define(name, parents)?;
    }
    info!(categories = taxonomy.len(), "Seeded default food categories");
    Ok(())
}

/// Replace the contents of `tags` with the default dietary tags
///
/// # Errors
///
/// Returns an error if the seed table lists a tag twice
pub fn setup_default_tags(tags: &mut TagRegistry) -> AppResult<()> {
    tags.clear();
    for (name, excluded, category) in DEFAULT_TAGS {
        tags.register_tag(name, DietaryRestriction::new(*excluded), Some(*category))?;
    }
    info!(tags = tags.len(), "Seeded default dietary tags");
    Ok(())
}

/// Seed both the taxonomy and the tag registry of `context`
///
/// # Errors
///
/// Returns an error if either seed table is inconsistent
pub fn setup_defaults(context: &mut DietaryContext) -> AppResult<()> {
    setup_default_food_categories(&mut context.taxonomy)?;
    setup_default_tags(&mut context.tags)
}
