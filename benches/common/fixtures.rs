// ABOUTME: Benchmark fixtures for generating guest surveys, meals, and people
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! Deterministic benchmark fixtures.

#![allow(dead_code)]

use mealplanner::analysis::GuestRow;
use mealplanner::models::{Ingredient, Meal, Person};
use mealplanner::restriction::DietaryRestriction;
use mealplanner::taxonomy::Taxonomy;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset (10 items) - quick benchmarks
    Small,
    /// Medium dataset (100 items) - a large party
    Medium,
    /// Large dataset (1000 items) - survey export
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

/// Survey answers mixing exact keywords, misspellings, and noise
pub const SURVEY_ANSWERS: &[&str] = &[
    "Vegetarian",
    "vegan",
    "No",
    "nut allergy",
    "I don't eat peenuts",
    "I am lactose intolerant",
    "no beef or egg",
    "sheelfish",
    "Vegetarian and Dairy free",
    "I can eat everything",
    "random text",
    "gluten free",
];

const MEAL_CATEGORIES: &[&[&str]] = &[
    &["WHEAT", "VEGETABLES"],
    &["CHEESE", "WHEAT", "VEGETABLES"],
    &["CHICKEN", "RICE", "VEGETABLES"],
    &["SALMON", "RICE"],
    &["TOFU", "VEGETABLES", "RICE"],
    &["BEEF", "WHEAT", "CHEESE"],
    &["ALMOND", "FRUITS", "OATS"],
];

const RESTRICTIONS: &[&[&str]] = &[
    &["ANIMAL_PRODUCTS"],
    &["MEAT", "FISH", "SHELLFISH"],
    &["NUTS"],
    &["GLUTEN"],
    &["DAIRY", "EGGS"],
    &[],
];

/// Guest rows cycling through [`SURVEY_ANSWERS`]
#[must_use]
pub fn generate_guest_rows(size: BatchSize) -> Vec<GuestRow> {
    (0..size.count())
        .map(|index| {
            GuestRow::new(
                format!("guest_{index}"),
                SURVEY_ANSWERS[index % SURVEY_ANSWERS.len()],
            )
        })
        .collect()
}

/// Meals drawn from the default taxonomy
#[must_use]
pub fn generate_meals(taxonomy: &Taxonomy, size: BatchSize) -> Vec<Meal> {
    (0..size.count())
        .map(|index| {
            let ingredients = MEAL_CATEGORIES[index % MEAL_CATEGORIES.len()]
                .iter()
                .filter_map(|name| {
                    let category = taxonomy.find(name)?;
                    Ingredient::new(name.to_lowercase(), category, 100.0).ok()
                })
                .collect();
            Meal::new(format!("meal_{index}"), ingredients)
        })
        .collect()
}

/// People cycling through a fixed set of restrictions
#[must_use]
pub fn generate_people(size: BatchSize) -> Vec<Person> {
    (0..size.count())
        .map(|index| {
            let excluded = RESTRICTIONS[index % RESTRICTIONS.len()];
            Person::with_restriction(
                format!("person_{index}"),
                DietaryRestriction::new(excluded.iter().copied()),
            )
        })
        .collect()
}

/// Restrictions used for tag derivation benchmarks
#[must_use]
pub fn generate_restrictions() -> Vec<DietaryRestriction> {
    RESTRICTIONS
        .iter()
        .map(|excluded| DietaryRestriction::new(excluded.iter().copied()))
        .chain([
            DietaryRestriction::new(["MEAT", "FISH", "SHELLFISH", "NUTS"]),
            DietaryRestriction::new(["DAIRY", "GLUTEN", "SOY", "LAMB"]),
        ])
        .collect()
}
