// ABOUTME: Free-text dietary restriction parser using exact keyword lookup then fuzzy matching
// ABOUTME: Never fails on input; returns an optional restriction plus a serializable debug trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! # Free-text Restriction Parser
//!
//! Turns statements such as `"I am lactose intolerant"` or `"no beef or egg"`
//! into a [`DietaryRestriction`]:
//!
//! 1. Trim and lowercase. Known "no restriction" phrases short-circuit.
//! 2. Split into `\w+` tokens.
//! 3. Exact pass over the keyword table, in table order.
//! 4. Fuzzy pass over the remaining non-stop-word tokens. The best candidate
//!    wins by score, then by keyword length, then by table order.
//!
//! Input is untrusted natural language, so parsing never returns an error.
//! Anything unrecognized yields `None`.

/// Pluggable similarity scorers
pub mod similarity;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use mealplanner_core::constants::{
    DEFAULT_FUZZ_THRESHOLD, FUZZY_CANDIDATE_LIMIT, FUZZY_STOP_WORDS, KEYWORD_EXCLUSIONS,
    NO_RESTRICTION_PHRASES,
};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::ParserConfig;
use crate::restriction::DietaryRestriction;
pub use similarity::{IndelRatio, JaroWinklerRatio, LevenshteinRatio, SimilarityScorer};

/// Reason recorded when the input is a known unrestricted phrase
pub const REASON_UNRESTRICTED_PHRASE: &str = "Matched known unrestricted phrase";
/// Reason recorded when at least one exclusion was found
pub const REASON_MATCHED: &str = "Matched exclusions via keyword and/or fuzzy matching";
/// Reason recorded when nothing matched
pub const REASON_NO_MATCH: &str = "No exclusions matched";

static TOKEN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

/// One token resolved to a keyword by similarity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyMatch {
    /// Token from the input
    pub token: String,
    /// Keyword it was matched to
    pub keyword: String,
    /// Similarity score, 0-100
    pub score: f64,
}

/// Trace of one parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseDebug {
    /// Input as given
    pub input: String,
    /// Trimmed, lowercased input
    pub normalized: String,
    /// Keywords found verbatim, in keyword-table order
    pub matched_terms: Vec<String>,
    /// Excluded categories, sorted
    pub exclusions: Vec<String>,
    /// Fuzzy resolutions, in token order
    pub fuzzy_matches: Vec<FuzzyMatch>,
    /// `(matched_terms + fuzzy_matches) / keyword table size`
    pub score: f64,
    /// Human-readable outcome
    pub reason: String,
}

/// Result of a parse: the restriction, if any, and its trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// `None` means no restriction was detected
    pub restriction: Option<DietaryRestriction>,
    /// Always populated
    pub debug: ParseDebug,
}

/// Whether `text` normalizes to one of the known "no restriction" phrases
#[must_use]
pub fn is_no_restriction_phrase(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    NO_RESTRICTION_PHRASES.contains(&normalized.as_str())
}

/// Keyword table parser with a swappable similarity scorer
#[derive(Debug)]
pub struct RestrictionParser {
    scorer: Box<dyn SimilarityScorer>,
    fuzz_threshold: f64,
}

impl Default for RestrictionParser {
    fn default() -> Self {
        Self {
            scorer: Box::new(IndelRatio),
            fuzz_threshold: DEFAULT_FUZZ_THRESHOLD,
        }
    }
}

impl RestrictionParser {
    /// Parser with the indel ratio scorer and the default threshold
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser using the configured threshold
    #[must_use]
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            fuzz_threshold: config.fuzz_threshold,
            ..Self::default()
        }
    }

    /// Replace the similarity scorer
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl SimilarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Replace the default fuzzy threshold
    #[must_use]
    pub const fn with_threshold(mut self, fuzz_threshold: f64) -> Self {
        self.fuzz_threshold = fuzz_threshold;
        self
    }

    /// Threshold used by [`Self::parse`]
    #[must_use]
    pub const fn fuzz_threshold(&self) -> f64 {
        self.fuzz_threshold
    }

    /// Parse with the parser's own threshold
    #[must_use]
    pub fn parse(&self, text: &str) -> ParseOutcome {
        self.parse_with_threshold(text, self.fuzz_threshold)
    }

    /// Parse with an explicit fuzzy threshold (0-100)
    #[must_use]
    pub fn parse_with_threshold(&self, text: &str, fuzz_threshold: f64) -> ParseOutcome {
        let normalized = text.trim().to_lowercase();
        let mut trace = ParseDebug {
            input: text.to_owned(),
            normalized: normalized.clone(),
            matched_terms: Vec::new(),
            exclusions: Vec::new(),
            fuzzy_matches: Vec::new(),
            score: 0.0,
            reason: String::new(),
        };

        if NO_RESTRICTION_PHRASES.contains(&normalized.as_str()) {
            trace.reason = REASON_UNRESTRICTED_PHRASE.to_owned();
            debug!("[{text}] → No restriction");
            return ParseOutcome {
                restriction: None,
                debug: trace,
            };
        }

        let tokens = tokenize(&normalized);
        let mut exclusions: BTreeSet<&str> = BTreeSet::new();

        for (keyword, categories) in KEYWORD_EXCLUSIONS {
            if tokens.iter().any(|token| token == keyword) {
                exclusions.extend(categories.iter().copied());
                trace.matched_terms.push((*keyword).to_owned());
            }
        }

        for token in &tokens {
            if trace.matched_terms.contains(token) || FUZZY_STOP_WORDS.contains(&token.as_str()) {
                continue;
            }
            if let Some((index, score)) = self.best_fuzzy_candidate(token, fuzz_threshold) {
                let (keyword, categories) = KEYWORD_EXCLUSIONS[index];
                exclusions.extend(categories.iter().copied());
                trace.fuzzy_matches.push(FuzzyMatch {
                    token: token.clone(),
                    keyword: keyword.to_owned(),
                    score,
                });
            }
        }

        trace.exclusions = exclusions.iter().map(|name| (*name).to_owned()).collect();
        trace.score = (trace.matched_terms.len() + trace.fuzzy_matches.len()) as f64
            / KEYWORD_EXCLUSIONS.len() as f64;

        let restriction = if exclusions.is_empty() {
            trace.reason = REASON_NO_MATCH.to_owned();
            debug!("[{text}] → No restriction");
            None
        } else {
            trace.reason = REASON_MATCHED.to_owned();
            debug!(
                scorer = self.scorer.name(),
                "[{text}] → {:?} (terms: {:?}, fuzz: {:?})",
                trace.exclusions,
                trace.matched_terms,
                trace
                    .fuzzy_matches
                    .iter()
                    .map(|m| (m.token.as_str(), m.keyword.as_str(), m.score))
                    .collect::<Vec<_>>()
            );
            Some(DietaryRestriction::new(exclusions))
        };

        ParseOutcome {
            restriction,
            debug: trace,
        }
    }

    /// Keyword-table index and score of the best candidate for `token`.
    ///
    /// Candidates at or above the threshold are ranked by score (stable, so
    /// table order breaks ties) and cut to the top few; among those the
    /// highest score wins, then the longest keyword, then the earliest entry.
    fn best_fuzzy_candidate(&self, token: &str, fuzz_threshold: f64) -> Option<(usize, f64)> {
        let mut candidates: Vec<(usize, f64)> = KEYWORD_EXCLUSIONS
            .iter()
            .enumerate()
            .map(|(index, (keyword, _))| (index, self.scorer.score(token, keyword)))
            .filter(|(_, score)| *score >= fuzz_threshold)
            .collect();
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates.truncate(FUZZY_CANDIDATE_LIMIT);

        candidates.into_iter().reduce(|best, candidate| {
            let best_len = KEYWORD_EXCLUSIONS[best.0].0.chars().count();
            let candidate_len = KEYWORD_EXCLUSIONS[candidate.0].0.chars().count();
            if (candidate.1, candidate_len) > (best.1, best_len) {
                candidate
            } else {
                best
            }
        })
    }
}

fn tokenize(normalized: &str) -> Vec<String> {
    TOKEN_PATTERN.as_ref().map_or_else(
        || {
            normalized
                .split(|c: char| !c.is_alphanumeric() && c != '_')
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect()
        },
        |pattern| {
            pattern
                .find_iter(normalized)
                .map(|m| m.as_str().to_owned())
                .collect()
        },
    )
}

/// Parse with the default parser, discarding the trace
#[must_use]
pub fn parse_freeform_restriction(text: &str) -> Option<DietaryRestriction> {
    RestrictionParser::new().parse(text).restriction
}
