// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, seeded contexts, and sample meals and people
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealplanner`

use std::env;
use std::sync::Once;

use mealplanner::context::DietaryContext;
use mealplanner::models::{Ingredient, Meal, Person};
use mealplanner::restriction::DietaryRestriction;
use mealplanner::taxonomy::Taxonomy;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Context seeded with the default categories and tags
pub fn default_context() -> DietaryContext {
    init_test_logging();
    DietaryContext::with_defaults().expect("default seed data is consistent")
}

/// Shorthand for a restriction
pub fn restriction(excluded: &[&str]) -> DietaryRestriction {
    DietaryRestriction::new(excluded.iter().copied())
}

/// Ingredient in a named default category
pub fn ingredient(taxonomy: &Taxonomy, name: &str, category: &str, calories: f64) -> Ingredient {
    Ingredient::new(name, taxonomy.get(category).unwrap(), calories).unwrap()
}

/// Four meals over wheat, dairy, meat, and plant categories
pub fn sample_meals(taxonomy: &Taxonomy) -> Vec<Meal> {
    vec![
        Meal::new(
            "Vegan Pasta",
            vec![
                ingredient(taxonomy, "Pasta", "WHEAT", 200.0),
                ingredient(taxonomy, "Tomato Sauce", "VEGETABLES", 50.0),
                ingredient(taxonomy, "Mushrooms", "VEGETABLES", 30.0),
            ],
        ),
        Meal::new(
            "Cheese Pizza",
            vec![
                ingredient(taxonomy, "Pizza Dough", "WHEAT", 250.0),
                ingredient(taxonomy, "Tomato Sauce", "VEGETABLES", 50.0),
                ingredient(taxonomy, "Mozzarella", "CHEESE", 200.0),
            ],
        ),
        Meal::new(
            "Chicken Rice Bowl",
            vec![
                ingredient(taxonomy, "Chicken", "CHICKEN", 250.0),
                ingredient(taxonomy, "Rice", "RICE", 200.0),
                ingredient(taxonomy, "Broccoli", "VEGETABLES", 50.0),
            ],
        ),
        Meal::new(
            "Nut-Free Salad",
            vec![
                ingredient(taxonomy, "Lettuce", "VEGETABLES", 20.0),
                ingredient(taxonomy, "Tomatoes", "VEGETABLES", 30.0),
                ingredient(taxonomy, "Cucumber", "VEGETABLES", 20.0),
                ingredient(taxonomy, "Olive Oil", "PLANT_BASED", 120.0),
            ],
        ),
    ]
}

/// Five people: vegan, meat-free, wheat-free, dairy-free, unrestricted
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::with_restriction("Alice", restriction(&["ANIMAL_PRODUCTS"])),
        Person::with_restriction("Bob", restriction(&["MEAT"])),
        Person::with_restriction("Charlie", restriction(&["WHEAT"])),
        Person::with_restriction("Diana", restriction(&["DAIRY"])),
        Person::unrestricted("Eve"),
    ]
}
