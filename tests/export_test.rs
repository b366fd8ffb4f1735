// ABOUTME: Tests for matrix export to CSV and Markdown files
// ABOUTME: Writes analyzer matrices to temporary files and checks contents and format parsing
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

mod common;

use std::fs;

use mealplanner::analysis::{
    analyze_meal_compatibility, CellStyle, CompatibilityMatrix, MatrixFormat,
    MealCompatibilityAnalyzer,
};
use mealplanner::config::AnalysisConfig;
use mealplanner::context::DietaryContext;
use mealplanner::errors::{ErrorCode, ErrorKind};
use tempfile::TempDir;

fn analyzer(context: &DietaryContext) -> MealCompatibilityAnalyzer {
    analyze_meal_compatibility(
        &context.taxonomy,
        common::sample_meals(&context.taxonomy),
        common::sample_people(),
    )
    .unwrap()
}

#[test]
fn test_export_csv_with_booleans() {
    let context = common::default_context();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.csv");

    analyzer(&context)
        .export_csv(&path, &CellStyle::Boolean)
        .unwrap();
    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines[0], "Meal,Alice,Bob,Charlie,Diana,Eve");
    assert_eq!(lines[1], "Vegan Pasta,True,True,False,True,True");
    assert_eq!(lines[4], "Nut-Free Salad,True,True,True,True,True");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_export_csv_reads_back() {
    let context = common::default_context();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.csv");
    analyzer(&context)
        .export_csv(&path, &CellStyle::symbols())
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("Meal"));

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1].get(0), Some("Cheese Pizza"));
    assert_eq!(rows[1].get(1), Some("❌"));
    assert_eq!(rows[1].get(2), Some("✅"));
}

#[test]
fn test_export_markdown_matches_render() {
    let context = common::default_context();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.md");
    let analyzer = analyzer(&context);
    let style = CellStyle::from_config(&AnalysisConfig::default());

    analyzer.export_markdown(&path, &style).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        analyzer.render(MatrixFormat::Markdown, &style)
    );
}

#[test]
fn test_export_to_missing_directory_fails() {
    let context = common::default_context();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("matrix.csv");

    let error = analyzer(&context)
        .export_csv(&path, &CellStyle::Boolean)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExportFailed);

    let error = analyzer(&context)
        .export_markdown(&dir.path().join("nope").join("matrix.md"), &CellStyle::Boolean)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Io);
}

#[test]
fn test_csv_string_quotes_fields_with_commas() {
    let matrix = CompatibilityMatrix::new(
        "Name",
        vec!["Smith, Jo".into()],
        vec!["NUTS".into()],
        vec![vec![false]],
    )
    .unwrap();
    assert_eq!(
        matrix.to_csv_string(&CellStyle::Boolean).unwrap(),
        "Name,NUTS\n\"Smith, Jo\",False\n"
    );
}

#[test]
fn test_matrix_shape_is_checked() {
    let error = CompatibilityMatrix::new(
        "Meal",
        vec!["Soup".into()],
        vec!["Alice".into(), "Bob".into()],
        vec![vec![true]],
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_matrix_format_parsing() {
    assert_eq!("plain".parse::<MatrixFormat>().unwrap(), MatrixFormat::Plain);
    assert_eq!(" Markdown ".parse::<MatrixFormat>().unwrap(), MatrixFormat::Markdown);

    let error = "latex".parse::<MatrixFormat>().unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedFormat);
    assert_eq!(error.to_string(), "Unsupported format: Unsupported mode: latex");
}

#[test]
fn test_cell_style_rendering() {
    assert_eq!(CellStyle::Boolean.render(true), "True");
    assert_eq!(CellStyle::Boolean.render(false), "False");
    assert_eq!(CellStyle::symbols().render(true), "✅");
    assert_eq!(CellStyle::symbols().render(false), "❌");
}
