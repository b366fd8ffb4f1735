// ABOUTME: Reporting layer over meals, people, and parsed guest lists
// ABOUTME: Exposes the matrix type plus the meal and guest list analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

/// Guest list parsing and summaries
pub mod guest_list;
/// Labelled boolean matrix rendering and export
pub mod matrix;
/// Meal-by-person scoring
pub mod meal_compatibility;

pub use guest_list::{analyze_guest_list, guest_csv_headers, GuestListAnalyzer, GuestRow};
pub use matrix::{CellStyle, CompatibilityMatrix, MatrixFormat};
pub use meal_compatibility::{analyze_meal_compatibility, MealCompatibilityAnalyzer, MealScore};
