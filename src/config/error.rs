// ABOUTME: Configuration error type for loading and validating mealplanner settings
// ABOUTME: Converts into AppError with the CONFIG_INVALID code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::env::VarError;

use mealplanner_core::errors::AppError;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value falls outside its allowed range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A required value is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] VarError),

    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
