// ABOUTME: Pluggable string similarity scorers on a 0-100 scale for fuzzy keyword matching
// ABOUTME: Provides the indel ratio used by default plus strsim-backed Levenshtein and Jaro-Winkler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::fmt::Debug;
use std::mem;

/// Similarity between two strings, from `0.0` (nothing shared) to `100.0` (equal)
pub trait SimilarityScorer: Send + Sync + Debug {
    /// Score `a` against `b`
    fn score(&self, a: &str, b: &str) -> f64;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// Classic fuzzy `ratio`: `100 * 2 * LCS / (len_a + len_b)`.
///
/// Equivalent to `100 * (1 - indel_distance / (len_a + len_b))`, where the
/// indel distance counts insertions and deletions only. Transpositions cost
/// two edits, so `"vegitarian"` still scores 90 against `"vegetarian"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl IndelRatio {
    fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
        let mut previous = vec![0_usize; b.len() + 1];
        let mut current = vec![0_usize; b.len() + 1];
        for &ca in a {
            for (j, &cb) in b.iter().enumerate() {
                current[j + 1] = if ca == cb {
                    previous[j] + 1
                } else {
                    current[j].max(previous[j + 1])
                };
            }
            mem::swap(&mut previous, &mut current);
        }
        previous[b.len()]
    }
}

impl SimilarityScorer for IndelRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 100.0;
        }
        let common = Self::longest_common_subsequence(&a, &b);
        100.0 * (2 * common) as f64 / total as f64
    }

    fn name(&self) -> &'static str {
        "indel_ratio"
    }
}

/// Normalized Levenshtein similarity scaled to 0-100
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl SimilarityScorer for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * 100.0
    }

    fn name(&self) -> &'static str {
        "levenshtein_ratio"
    }
}

/// Jaro-Winkler similarity scaled to 0-100
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerRatio;

impl SimilarityScorer for JaroWinklerRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b) * 100.0
    }

    fn name(&self) -> &'static str {
        "jaro_winkler_ratio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_indel_ratio_known_values() {
        let scorer = IndelRatio;
        assert_close(scorer.score("vegitarian", "vegetarian"), 90.0);
        assert_close(scorer.score("peenuts", "peanuts"), 85.714);
        assert_close(scorer.score("sheelfish", "shellfish"), 88.888);
        assert_close(scorer.score("text", "meat"), 50.0);
        assert_close(scorer.score("flexitarian", "vegetarian"), 66.666);
    }

    #[test]
    fn test_indel_ratio_edges() {
        let scorer = IndelRatio;
        assert_close(scorer.score("", ""), 100.0);
        assert_close(scorer.score("abc", ""), 0.0);
        assert_close(scorer.score("dairy", "dairy"), 100.0);
    }

    #[test]
    fn test_strsim_scorers_are_scaled() {
        assert_close(LevenshteinRatio.score("milk", "milk"), 100.0);
        assert_close(LevenshteinRatio.score("milk", "silk"), 75.0);
        assert!(JaroWinklerRatio.score("vegitarian", "vegetarian") > 90.0);
    }
}
