// ABOUTME: Ingredient, meal, and person value types built on the category taxonomy
// ABOUTME: Meals test compatibility against restrictions; people resolve restrictions directly or by tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::collections::BTreeSet;
use std::fmt;

use mealplanner_core::constants::NO_RESTRICTIONS_TAG;
use mealplanner_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::restriction::DietaryRestriction;
use crate::tags::TagRegistry;
use crate::taxonomy::{Category, Taxonomy};

// ============================================================================
// Ingredient
// ============================================================================

/// Named ingredient belonging to one taxonomy category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IngredientRecord")]
pub struct Ingredient {
    name: String,
    category: String,
    calories: f64,
    allergens: BTreeSet<String>,
}

/// Wire form of an ingredient, validated like [`Ingredient::new`]
#[derive(Deserialize)]
struct IngredientRecord {
    name: String,
    category: String,
    calories: f64,
    #[serde(default)]
    allergens: BTreeSet<String>,
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = AppError;

    fn try_from(record: IngredientRecord) -> AppResult<Self> {
        check_calories(&record.name, record.calories)?;
        Ok(Self {
            name: record.name,
            category: record.category.trim().to_uppercase(),
            calories: record.calories,
            allergens: record.allergens,
        })
    }
}

fn check_calories(name: &str, calories: f64) -> AppResult<()> {
    if calories.is_nan() || calories < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Ingredient '{name}' has invalid calories: {calories}"
        ))
        .with_details(serde_json::json!({ "ingredient": name, "calories": calories })));
    }
    Ok(())
}

impl Ingredient {
    /// Create an ingredient in `category`
    ///
    /// # Errors
    ///
    /// Returns a validation error if `calories` is negative or not a number
    pub fn new(name: impl Into<String>, category: Category<'_>, calories: f64) -> AppResult<Self> {
        let name = name.into();
        check_calories(&name, calories)?;
        Ok(Self {
            name,
            category: category.name().to_owned(),
            calories,
            allergens: BTreeSet::new(),
        })
    }

    /// Attach informational allergen labels
    #[must_use]
    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens.extend(allergens.into_iter().map(Into::into));
        self
    }

    /// Ingredient name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uppercase name of the owning category
    #[must_use]
    pub fn category_name(&self) -> &str {
        &self.category
    }

    /// Resolve the owning category in `taxonomy`
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the taxonomy no longer defines the category
    pub fn category<'a>(&self, taxonomy: &'a Taxonomy) -> AppResult<Category<'a>> {
        taxonomy.get(&self.category)
    }

    /// Calories
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Allergen labels, sorted
    #[must_use]
    pub const fn allergens(&self) -> &BTreeSet<String> {
        &self.allergens
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] - {:?} kcal", self.name, self.category, self.calories)?;
        if !self.allergens.is_empty() {
            let labels: Vec<&str> = self.allergens.iter().map(String::as_str).collect();
            write!(f, " (Allergens: {})", labels.join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Meal
// ============================================================================

/// Named, ordered list of ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name
    pub name: String,
    /// Ingredients in serving order
    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    /// Create a meal
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }

    /// Sum of ingredient calories
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.ingredients.iter().map(Ingredient::calories).sum()
    }

    /// Every ingredient category plus all of their ancestors
    ///
    /// # Errors
    ///
    /// Returns a not-found error if an ingredient's category is not in `taxonomy`
    pub fn categories(&self, taxonomy: &Taxonomy) -> AppResult<BTreeSet<String>> {
        let mut all = BTreeSet::new();
        for ingredient in &self.ingredients {
            let category = ingredient.category(taxonomy)?;
            all.insert(category.name().to_owned());
            all.extend(category.ancestors());
        }
        Ok(all)
    }

    /// Whether no ingredient is forbidden by `restriction`
    ///
    /// # Errors
    ///
    /// Returns a not-found error if an ingredient's category is not in `taxonomy`
    pub fn is_compatible_with(
        &self,
        taxonomy: &Taxonomy,
        restriction: &DietaryRestriction,
    ) -> AppResult<bool> {
        let categories = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.category(taxonomy))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(restriction.is_compatible_with(&categories))
    }

    /// Whether the meal is compatible with every restriction in the group
    ///
    /// # Errors
    ///
    /// Returns a not-found error if an ingredient's category is not in `taxonomy`
    pub fn is_compatible_with_group(
        &self,
        taxonomy: &Taxonomy,
        restrictions: &[DietaryRestriction],
    ) -> AppResult<bool> {
        let mut compatible = true;
        for restriction in restrictions {
            compatible &= self.is_compatible_with(taxonomy, restriction)?;
        }
        Ok(compatible)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meal({}, {} items, {:.1} kcal)",
            self.name,
            self.ingredients.len(),
            self.total_calories()
        )
    }
}

// ============================================================================
// Person
// ============================================================================

/// How a person's restriction is supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonSpec {
    /// Explicit restriction
    Direct(DietaryRestriction),
    /// Name of a registered tag
    ByTag(String),
    /// Eats everything
    Unrestricted,
}

/// Person with a resolved restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name
    pub name: String,
    /// Resolved restriction; empty when unrestricted
    pub restriction: DietaryRestriction,
}

impl Person {
    /// Resolve `spec` into a person.
    ///
    /// # Errors
    ///
    /// Returns a construction error if a tag name is not registered
    pub fn new(name: impl Into<String>, spec: PersonSpec, tags: &TagRegistry) -> AppResult<Self> {
        let name = name.into();
        let restriction = match spec {
            PersonSpec::Direct(restriction) => restriction,
            PersonSpec::Unrestricted => DietaryRestriction::none(),
            PersonSpec::ByTag(tag) => tags.get_tag(&tag).cloned().map_err(|source| {
                AppError::construction(format!(
                    "Cannot resolve dietary tag '{tag}' for person '{name}'"
                ))
                .with_details(serde_json::json!({ "person": name, "tag": tag }))
                .with_source(source)
            })?,
        };
        Ok(Self { name, restriction })
    }

    /// Person with an explicit restriction
    pub fn with_restriction(name: impl Into<String>, restriction: DietaryRestriction) -> Self {
        Self {
            name: name.into(),
            restriction,
        }
    }

    /// Person without restrictions
    pub fn unrestricted(name: impl Into<String>) -> Self {
        Self::with_restriction(name, DietaryRestriction::none())
    }

    /// `"{name} [T1 | T2]"` using the minimal canonical tags
    #[must_use]
    pub fn label(&self, tags: &TagRegistry) -> String {
        let names = if self.restriction.is_empty() {
            vec![NO_RESTRICTIONS_TAG.to_owned()]
        } else {
            tags.minimal_canonical_tags(&self.restriction)
        };
        format!("{} [{}]", self.name, names.join(" | "))
    }
}
