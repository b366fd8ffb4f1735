// ABOUTME: Main library entry point for the mealplanner dietary analysis engine
// ABOUTME: Classifies free-text restrictions, derives dietary tags, and scores meals for groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

#![deny(unsafe_code)]

//! # Mealplanner
//!
//! Dietary restriction analysis over a hierarchical food taxonomy.
//!
//! ## Features
//!
//! - **Category taxonomy**: multi-parent DAG with ancestor and subtype queries
//! - **Dietary tags**: minimal canonical labels (greedy cover) and hierarchy-implied labels
//! - **Free-text parsing**: keyword lookup plus fuzzy matching with a pluggable scorer
//! - **Meal compatibility**: per-person and per-group checks, scoring, and CSV/Markdown export
//! - **Guest lists**: parse a spreadsheet of free-text restrictions into summaries and groups
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplanner::context::DietaryContext;
//! use mealplanner::parsing::RestrictionParser;
//! use mealplanner::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let context = DietaryContext::with_defaults()?;
//!     let outcome = RestrictionParser::new().parse("no beef or egg");
//!     if let Some(restriction) = outcome.restriction {
//!         println!("{:?}", context.canonical_tags(&restriction));
//!     }
//!     Ok(())
//! }
//! ```

/// Analyzers, matrices, and export
pub mod analysis;

/// Runtime configuration with environment overrides
pub mod config;

/// Caller-owned taxonomy and tag registry pair
pub mod context;

/// Default taxonomy and tag seeding
pub mod defaults;

/// Structured logging setup
pub mod logging;

/// Ingredient, meal, and person types
pub mod models;

/// Free-text restriction parser
pub mod parsing;

/// Dietary restriction value type
pub mod restriction;

/// Tag registry and tag derivation
pub mod tags;

/// Food category taxonomy
pub mod taxonomy;

/// Re-export of the shared error types
pub use mealplanner_core::errors;

/// Re-export of the shared constant tables
pub use mealplanner_core::constants;
