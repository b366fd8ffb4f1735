// ABOUTME: Lookup tables for the free-text dietary restriction parser
// ABOUTME: Keyword-to-exclusion table, unrestricted phrases, and fuzzy stop words
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

/// Default minimum similarity (0-100) for a fuzzy keyword match
pub const DEFAULT_FUZZ_THRESHOLD: f64 = 75.0;

/// Number of best-scoring fuzzy candidates considered per token
pub const FUZZY_CANDIDATE_LIMIT: usize = 3;

/// Keyword table: keyword -> excluded category names.
///
/// Order is significant: exact matches are reported in table order and equal
/// fuzzy candidates resolve to the earliest entry.
pub const KEYWORD_EXCLUSIONS: &[(&str, &[&str])] = &[
    ("vegetarian", &["MEAT", "FISH", "SHELLFISH"]),
    ("vegan", &["ANIMAL_PRODUCTS"]),
    ("pescatarian", &["MEAT"]),
    ("dairy", &["DAIRY"]),
    ("lactose", &["DAIRY"]),
    ("milk", &["DAIRY"]),
    ("cheese", &["DAIRY"]),
    ("egg", &["EGGS"]),
    ("eggs", &["EGGS"]),
    ("beef", &["MEAT"]),
    ("meat", &["MEAT"]),
    ("fish", &["FISH"]),
    ("shellfish", &["SHELLFISH"]),
    ("nut", &["NUTS"]),
    ("nuts", &["NUTS"]),
    ("peanut", &["NUTS"]),
    ("peanuts", &["NUTS"]),
    ("tree nut", &["NUTS"]),
    ("gluten", &["GLUTEN"]),
];

/// Normalized inputs that mean "no restriction"
pub const NO_RESTRICTION_PHRASES: &[&str] = &[
    "",
    "no",
    "none",
    "nope",
    "naw",
    "nah",
    "n/a",
    "none!",
    "nope!",
    "i can eat anything",
    "i can eat everything",
    "everything is fine",
    "i eat everything",
];

/// Tokens never considered for fuzzy matching
pub const FUZZY_STOP_WORDS: &[&str] = &[
    "eat", "food", "diet", "anything", "everything", "no", "not", "can", "don", "dont", "do",
    "all", "i", "you", "we",
];
