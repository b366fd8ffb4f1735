// ABOUTME: Core types and constants for the mealplanner dietary analysis engine
// ABOUTME: Foundation crate with error handling, seed taxonomy data, and parser keyword tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

#![deny(unsafe_code)]

//! # Mealplanner Core
//!
//! Foundation crate providing shared types and constants for the mealplanner
//! dietary engine. It changes infrequently, which keeps incremental builds of
//! the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorKind`
//! - **constants**: Seed taxonomy, seed tags, parser keyword tables, and labels

/// Unified error handling system with standard error codes
pub mod errors;

/// Seed data and lookup tables organized by domain
pub mod constants;
