// ABOUTME: Labelled boolean matrix with plain-text, Markdown, and CSV rendering
// ABOUTME: Cells render as True/False or as configurable allowed/forbidden glyphs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::iter;
use std::path::Path;
use std::str::FromStr;

use mealplanner_core::constants::{ALLOWED_SYMBOL, ALLOWED_TEXT, FORBIDDEN_SYMBOL, FORBIDDEN_TEXT};
use mealplanner_core::errors::{AppError, AppResult};
use serde::Serialize;
use tracing::info;

use crate::config::AnalysisConfig;

/// How a boolean cell is written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellStyle {
    /// `True` / `False`
    Boolean,
    /// Two glyphs, allowed first
    Symbols {
        /// Glyph for `true`
        allowed: String,
        /// Glyph for `false`
        forbidden: String,
    },
}

impl CellStyle {
    /// Default `✅` / `❌` glyphs
    #[must_use]
    pub fn symbols() -> Self {
        Self::Symbols {
            allowed: ALLOWED_SYMBOL.to_owned(),
            forbidden: FORBIDDEN_SYMBOL.to_owned(),
        }
    }

    /// Glyphs taken from the analysis configuration
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::Symbols {
            allowed: config.allowed_symbol.clone(),
            forbidden: config.forbidden_symbol.clone(),
        }
    }

    /// Text for one cell
    #[must_use]
    pub fn render(&self, value: bool) -> &str {
        match (self, value) {
            (Self::Boolean, true) => ALLOWED_TEXT,
            (Self::Boolean, false) => FORBIDDEN_TEXT,
            (Self::Symbols { allowed, .. }, true) => allowed.as_str(),
            (Self::Symbols { forbidden, .. }, false) => forbidden.as_str(),
        }
    }
}

/// Text layout for printing a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// Space-aligned columns
    Plain,
    /// GitHub-style pipe table
    Markdown,
}

impl FromStr for MatrixFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "markdown" => Ok(Self::Markdown),
            _ => Err(AppError::unsupported_format(s)),
        }
    }
}

/// Rows and columns of boolean cells under a header for the row labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityMatrix {
    index_header: String,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    cells: Vec<Vec<bool>>,
}

impl CompatibilityMatrix {
    /// Build from labels and a row-major cell grid.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the grid does not match the labels
    pub fn new(
        index_header: impl Into<String>,
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        cells: Vec<Vec<bool>>,
    ) -> AppResult<Self> {
        if cells.len() != row_labels.len()
            || cells.iter().any(|row| row.len() != column_labels.len())
        {
            return Err(AppError::invalid_input(format!(
                "Matrix shape mismatch: {} row labels, {} column labels",
                row_labels.len(),
                column_labels.len()
            )));
        }
        Ok(Self {
            index_header: index_header.into(),
            row_labels,
            column_labels,
            cells,
        })
    }

    /// Header of the label column
    #[must_use]
    pub fn index_header(&self) -> &str {
        &self.index_header
    }

    /// Row labels in order
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels in order
    #[must_use]
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Row-major cells
    #[must_use]
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Cell at `(row label, column label)`
    #[must_use]
    pub fn get(&self, row: &str, column: &str) -> Option<bool> {
        let row = self.row_labels.iter().position(|label| label == row)?;
        let column = self.column_labels.iter().position(|label| label == column)?;
        Some(self.cells[row][column])
    }

    /// Number of `true` cells in each row
    #[must_use]
    pub fn row_counts(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .collect()
    }

    fn header_row(&self) -> Vec<&str> {
        iter::once(self.index_header.as_str())
            .chain(self.column_labels.iter().map(String::as_str))
            .collect()
    }

    fn body_rows<'a>(&'a self, style: &'a CellStyle) -> impl Iterator<Item = Vec<&'a str>> + 'a {
        self.row_labels
            .iter()
            .zip(&self.cells)
            .map(move |(label, row)| {
                iter::once(label.as_str())
                    .chain(row.iter().map(|&cell| style.render(cell)))
                    .collect()
            })
    }

    /// Render in the requested layout
    #[must_use]
    pub fn render(&self, format: MatrixFormat, style: &CellStyle) -> String {
        match format {
            MatrixFormat::Plain => self.to_plain(style),
            MatrixFormat::Markdown => self.to_markdown(style),
        }
    }

    /// Space-aligned text table
    #[must_use]
    pub fn to_plain(&self, style: &CellStyle) -> String {
        let rows: Vec<Vec<&str>> = iter::once(self.header_row())
            .chain(self.body_rows(style))
            .collect();
        let mut widths = vec![0_usize; self.column_labels.len() + 1];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in &rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect();
            let _ = writeln!(out, "{}", line.join("  ").trim_end());
        }
        out
    }

    /// Markdown pipe table
    #[must_use]
    pub fn to_markdown(&self, style: &CellStyle) -> String {
        let header = self.header_row();
        let mut out = String::new();
        let _ = writeln!(out, "| {} |", header.join(" | "));
        let _ = writeln!(out, "|{}", "---|".repeat(header.len()));
        for row in self.body_rows(style) {
            let _ = writeln!(out, "| {} |", row.join(" | "));
        }
        out
    }

    /// CSV text with a header row
    ///
    /// # Errors
    ///
    /// Returns an export error if CSV encoding fails
    pub fn to_csv_string(&self, style: &CellStyle) -> AppResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        self.write_records(&mut writer, style)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::export(format!("Failed to flush CSV buffer: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::export(format!("CSV output is not UTF-8: {e}")))
    }

    /// Write CSV to `path`
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be written
    pub fn write_csv(&self, path: &Path, style: &CellStyle) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        self.write_records(&mut writer, style)?;
        writer.flush()?;
        info!(path = %path.display(), rows = self.row_labels.len(), "Exported matrix as CSV");
        Ok(())
    }

    /// Write a Markdown table to `path`
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be written
    pub fn write_markdown(&self, path: &Path, style: &CellStyle) -> AppResult<()> {
        fs::write(path, self.to_markdown(style))?;
        info!(path = %path.display(), rows = self.row_labels.len(), "Exported matrix as Markdown");
        Ok(())
    }

    fn write_records<W: io::Write>(
        &self,
        writer: &mut csv::Writer<W>,
        style: &CellStyle,
    ) -> AppResult<()> {
        writer.write_record(self.header_row())?;
        for row in self.body_rows(style) {
            writer.write_record(row)?;
        }
        Ok(())
    }
}
