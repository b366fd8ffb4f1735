// ABOUTME: Runtime configuration for the parser and analyzers with environment overrides
// ABOUTME: Loads defaults, applies MEALPLANNER_* variables, then validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! # Configuration
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `MEALPLANNER_FUZZ_THRESHOLD` | `parser.fuzz_threshold` | `75.0` |
//! | `MEALPLANNER_ALLOWED_SYMBOL` | `analysis.allowed_symbol` | `✅` |
//! | `MEALPLANNER_FORBIDDEN_SYMBOL` | `analysis.forbidden_symbol` | `❌` |
//! | `MEALPLANNER_COMMON_MIN_COUNT` | `analysis.common_restriction_min_count` | `2` |

mod error;

pub use error::ConfigError;

use std::env::{self, VarError};
use std::str::FromStr;

use mealplanner_core::constants::{ALLOWED_SYMBOL, DEFAULT_FUZZ_THRESHOLD, FORBIDDEN_SYMBOL};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Free-text parser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Minimum similarity (0-100) for a fuzzy keyword match
    pub fuzz_threshold: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fuzz_threshold: DEFAULT_FUZZ_THRESHOLD,
        }
    }
}

/// Analyzer rendering and aggregation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Glyph for an allowed cell in symbol mode
    pub allowed_symbol: String,
    /// Glyph for a forbidden cell in symbol mode
    pub forbidden_symbol: String,
    /// Default minimum head count for `common_restrictions`
    pub common_restriction_min_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            allowed_symbol: ALLOWED_SYMBOL.to_owned(),
            forbidden_symbol: FORBIDDEN_SYMBOL.to_owned(),
            common_restriction_min_count: 2,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlannerConfig {
    /// Parser settings
    pub parser: ParserConfig,
    /// Analyzer settings
    pub analysis: AnalysisConfig,
}

impl MealPlannerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or a
    /// value fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            fuzz_threshold = config.parser.fuzz_threshold,
            common_min_count = config.analysis.common_restriction_min_count,
            "Loaded mealplanner configuration"
        );
        Ok(config)
    }

    /// Check every value is usable
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.parser.fuzz_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::InvalidRange(
                "fuzz_threshold must be between 0 and 100",
            ));
        }
        if self.analysis.allowed_symbol.is_empty() {
            return Err(ConfigError::MissingField("allowed_symbol"));
        }
        if self.analysis.forbidden_symbol.is_empty() {
            return Err(ConfigError::MissingField("forbidden_symbol"));
        }
        if self.analysis.allowed_symbol == self.analysis.forbidden_symbol {
            return Err(ConfigError::InvalidRange(
                "allowed_symbol and forbidden_symbol must differ",
            ));
        }
        if self.analysis.common_restriction_min_count == 0 {
            return Err(ConfigError::InvalidRange(
                "common_restriction_min_count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Unset variables keep the current value; non-UTF-8 values are an error
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(error @ VarError::NotUnicode(_)) => Err(ConfigError::EnvVar(error)),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("MEALPLANNER_FUZZ_THRESHOLD", &mut self.parser.fuzz_threshold)?;
        Self::apply_env_var(
            "MEALPLANNER_ALLOWED_SYMBOL",
            &mut self.analysis.allowed_symbol,
        )?;
        Self::apply_env_var(
            "MEALPLANNER_FORBIDDEN_SYMBOL",
            &mut self.analysis.forbidden_symbol,
        )?;
        Self::apply_env_var(
            "MEALPLANNER_COMMON_MIN_COUNT",
            &mut self.analysis.common_restriction_min_count,
        )?;
        Ok(self)
    }
}
