// ABOUTME: Scores meals by the share of people who can eat them
// ABOUTME: Builds the meal-by-person matrix and ranks, filters, renders, and exports it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::path::Path;

use mealplanner_core::constants::MEAL_COLUMN;
use mealplanner_core::errors::AppResult;
use serde::Serialize;
use tracing::info;

use super::matrix::{CellStyle, CompatibilityMatrix, MatrixFormat};
use crate::models::{Meal, Person};
use crate::taxonomy::Taxonomy;

/// Share of people (0.0 to 1.0) who can eat a meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealScore {
    /// Meal name
    pub meal: String,
    /// Number of compatible people
    pub compatible: usize,
    /// `compatible / people`, or `1.0` when there are no people
    pub score: f64,
}

/// Meal-by-person compatibility analysis
#[derive(Debug, Clone)]
pub struct MealCompatibilityAnalyzer {
    meals: Vec<Meal>,
    people: Vec<Person>,
    matrix: CompatibilityMatrix,
}

impl MealCompatibilityAnalyzer {
    /// Evaluate every meal against every person.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if an ingredient's category is not in `taxonomy`
    pub fn new(taxonomy: &Taxonomy, meals: Vec<Meal>, people: Vec<Person>) -> AppResult<Self> {
        let cells = meals
            .iter()
            .map(|meal| {
                people
                    .iter()
                    .map(|person| meal.is_compatible_with(taxonomy, &person.restriction))
                    .collect::<AppResult<Vec<bool>>>()
            })
            .collect::<AppResult<Vec<_>>>()?;

        let matrix = CompatibilityMatrix::new(
            MEAL_COLUMN,
            meals.iter().map(|meal| meal.name.clone()).collect(),
            people.iter().map(|person| person.name.clone()).collect(),
            cells,
        )?;

        info!(
            meals = meals.len(),
            people = people.len(),
            "Built meal compatibility matrix"
        );
        Ok(Self {
            meals,
            people,
            matrix,
        })
    }

    /// Meals in input order
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// People in input order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Rows are meals, columns are people, `true` means the person can eat it
    #[must_use]
    pub const fn compatibility_matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    /// `(meal, number of compatible people)` in meal order
    #[must_use]
    pub fn compatible_counts(&self) -> Vec<(String, usize)> {
        self.matrix
            .row_labels()
            .iter()
            .cloned()
            .zip(self.matrix.row_counts())
            .collect()
    }

    /// Score of every meal, in meal order
    #[must_use]
    pub fn score_meals(&self) -> Vec<MealScore> {
        let people = self.people.len();
        self.compatible_counts()
            .into_iter()
            .map(|(meal, compatible)| MealScore {
                meal,
                compatible,
                score: if people == 0 {
                    1.0
                } else {
                    compatible as f64 / people as f64
                },
            })
            .collect()
    }

    /// Meals by descending score; equal scores keep meal order.
    ///
    /// `top_n` of `None` or `Some(0)` returns every meal.
    #[must_use]
    pub fn most_compatible_meals(&self, top_n: Option<usize>) -> Vec<MealScore> {
        let mut scores = self.score_meals();
        scores.sort_by(|a, b| b.compatible.cmp(&a.compatible));
        if let Some(limit) = top_n.filter(|&limit| limit > 0) {
            scores.truncate(limit);
        }
        scores
    }

    /// Meals every person can eat
    #[must_use]
    pub fn universally_compatible_meals(&self) -> Vec<MealScore> {
        let people = self.people.len();
        self.score_meals()
            .into_iter()
            .filter(|score| score.compatible == people)
            .collect()
    }

    /// Render the matrix in the given layout
    #[must_use]
    pub fn render(&self, format: MatrixFormat, style: &CellStyle) -> String {
        self.matrix.render(format, style)
    }

    /// Render the matrix in a layout named by string (`plain` or `markdown`)
    ///
    /// # Errors
    ///
    /// Returns a validation error for any other mode
    pub fn render_mode(&self, mode: &str, style: &CellStyle) -> AppResult<String> {
        Ok(self.render(mode.parse()?, style))
    }

    /// Write the matrix as CSV
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be written
    pub fn export_csv(&self, path: &Path, style: &CellStyle) -> AppResult<()> {
        self.matrix.write_csv(path, style)
    }

    /// Write the matrix as a Markdown table
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be written
    pub fn export_markdown(&self, path: &Path, style: &CellStyle) -> AppResult<()> {
        self.matrix.write_markdown(path, style)
    }
}

/// Build a [`MealCompatibilityAnalyzer`]
///
/// # Errors
///
/// Returns a not-found error if an ingredient's category is not in `taxonomy`
pub fn analyze_meal_compatibility(
    taxonomy: &Taxonomy,
    meals: Vec<Meal>,
    people: Vec<Person>,
) -> AppResult<MealCompatibilityAnalyzer> {
    MealCompatibilityAnalyzer::new(taxonomy, meals, people)
}
