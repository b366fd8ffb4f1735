// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups seed taxonomy, seed tags, parser tables, and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! Constants module
//!
//! Constants are grouped by the component that consumes them rather than
//! living in one flat file.

pub mod labels;
pub mod parsing;
pub mod seeds;

pub use labels::*;
pub use parsing::*;
