// ABOUTME: Display labels and sentinel keys used by tagging and reporting
// ABOUTME: Shared so grouping keys stay identical across analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

/// Tag reported for a person with an empty restriction
pub const NO_RESTRICTIONS_TAG: &str = "NO-RESTRICTIONS";

/// Grouping key for people with an empty restriction
pub const NO_RESTRICTIONS_GROUP: &str = "No restrictions";

/// Suffix of synthetic tags produced for uncovered categories
pub const FREE_TAG_SUFFIX: &str = "-FREE";

/// Tag category used when the caller does not supply one
pub const UNSPECIFIED_TAG_CATEGORY: &str = "unspecified";

/// Glyph rendered for an allowed cell in symbol mode
pub const ALLOWED_SYMBOL: &str = "✅";

/// Glyph rendered for a forbidden cell in symbol mode
pub const FORBIDDEN_SYMBOL: &str = "❌";

/// Text rendered for an allowed cell in boolean mode
pub const ALLOWED_TEXT: &str = "True";

/// Text rendered for a forbidden cell in boolean mode
pub const FORBIDDEN_TEXT: &str = "False";

/// Row header of the meal-by-person matrix
pub const MEAL_COLUMN: &str = "Meal";

/// Row header of the person-by-category matrix
pub const NAME_COLUMN: &str = "Name";

/// Guest CSV column holding free-text restrictions
pub const DIETARY_RESTRICTION_COLUMN: &str = "Dietary Restriction";
