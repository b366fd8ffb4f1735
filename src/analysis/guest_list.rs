// ABOUTME: Summarizes a guest list whose dietary restrictions are free text
// ABOUTME: Parses each row into a person, then counts, groups, and tabulates restrictions and tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use mealplanner_core::constants::{DIETARY_RESTRICTION_COLUMN, NAME_COLUMN, NO_RESTRICTIONS_GROUP};
use mealplanner_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::matrix::CompatibilityMatrix;
use crate::config::AnalysisConfig;
use crate::context::DietaryContext;
use crate::models::Person;
use crate::parsing::{is_no_restriction_phrase, RestrictionParser};
use crate::restriction::DietaryRestriction;

/// One guest as entered: a name and free-text restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRow {
    /// Guest name
    #[serde(rename = "Name")]
    pub name: String,
    /// Free-text dietary restriction
    #[serde(rename = "Dietary Restriction", default)]
    pub dietary_restriction: String,
}

impl GuestRow {
    /// Create a row
    pub fn new(name: impl Into<String>, dietary_restriction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dietary_restriction: dietary_restriction.into(),
        }
    }
}

/// Group-level view of a parsed guest list
#[derive(Debug, Clone)]
pub struct GuestListAnalyzer<'a> {
    context: &'a DietaryContext,
    people: Vec<Person>,
}

impl<'a> GuestListAnalyzer<'a> {
    /// Parse every row into a person.
    ///
    /// Known "no restriction" phrases and text the parser cannot interpret
    /// both become an empty restriction.
    pub fn from_rows<I>(context: &'a DietaryContext, parser: &RestrictionParser, rows: I) -> Self
    where
        I: IntoIterator<Item = GuestRow>,
    {
        let people: Vec<Person> = rows
            .into_iter()
            .map(|row| {
                let restriction = if is_no_restriction_phrase(&row.dietary_restriction) {
                    DietaryRestriction::none()
                } else {
                    parser
                        .parse(&row.dietary_restriction)
                        .restriction
                        .unwrap_or_else(|| {
                            debug!(
                                guest = %row.name,
                                text = %row.dietary_restriction,
                                "Unrecognized restriction text, treating guest as unrestricted"
                            );
                            DietaryRestriction::none()
                        })
                };
                Person::with_restriction(row.name, restriction)
            })
            .collect();

        info!(guests = people.len(), "Parsed guest list");
        Self { context, people }
    }

    /// Read rows from CSV with `Name` and `Dietary Restriction` headers
    ///
    /// # Errors
    ///
    /// Returns an export error if the CSV is malformed or a column is missing
    pub fn from_csv_reader<R: Read>(
        context: &'a DietaryContext,
        parser: &RestrictionParser,
        reader: R,
    ) -> AppResult<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let rows = reader
            .deserialize::<GuestRow>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(context, parser, rows))
    }

    /// Read rows from a CSV file
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be read or is malformed
    pub fn from_csv_path(
        context: &'a DietaryContext,
        parser: &RestrictionParser,
        path: &Path,
    ) -> AppResult<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader
            .deserialize::<GuestRow>()
            .collect::<Result<Vec<_>, _>>()?;
        info!(path = %path.display(), "Loaded guest list CSV");
        Ok(Self::from_rows(context, parser, rows))
    }

    /// Parsed guests in input order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    fn restriction_key(person: &Person) -> String {
        if person.restriction.is_empty() {
            NO_RESTRICTIONS_GROUP.to_owned()
        } else {
            person.restriction.to_string()
        }
    }

    /// Head count per distinct restriction, keyed by its display form
    #[must_use]
    pub fn restriction_summary(&self) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for person in &self.people {
            *summary.entry(Self::restriction_key(person)).or_insert(0) += 1;
        }
        summary
    }

    /// Head count per implied tag
    #[must_use]
    pub fn tag_summary(&self) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for person in &self.people {
            for tag in self.context.implied_tags(&person.restriction) {
                *summary.entry(tag).or_insert(0) += 1;
            }
        }
        summary
    }

    /// Rows are guests, columns are every category anyone excludes (sorted).
    ///
    /// A cell is `true` when the category is not literally in that guest's
    /// excluded set; the taxonomy is not consulted.
    ///
    /// # Errors
    ///
    /// Returns a validation error only if the grid is malformed
    pub fn restriction_matrix(&self) -> AppResult<CompatibilityMatrix> {
        let categories: BTreeSet<&String> = self
            .people
            .iter()
            .flat_map(|person| person.restriction.excluded())
            .collect();

        let cells = self
            .people
            .iter()
            .map(|person| {
                categories
                    .iter()
                    .map(|category| !person.restriction.excluded().contains(*category))
                    .collect()
            })
            .collect();

        CompatibilityMatrix::new(
            NAME_COLUMN,
            self.people.iter().map(|person| person.name.clone()).collect(),
            categories.into_iter().cloned().collect(),
            cells,
        )
    }

    /// Excluded categories shared by at least `min_count` guests
    #[must_use]
    pub fn common_restrictions(&self, min_count: usize) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for person in &self.people {
            for category in person.restriction.excluded() {
                *counts.entry(category.clone()).or_insert(0) += 1;
            }
        }
        counts.retain(|_, count| *count >= min_count);
        counts
    }

    /// [`Self::common_restrictions`] with the configured minimum
    #[must_use]
    pub fn common_restrictions_with(&self, config: &AnalysisConfig) -> BTreeMap<String, usize> {
        self.common_restrictions(config.common_restriction_min_count)
    }

    /// Guest names per distinct restriction, in input order
    #[must_use]
    pub fn restriction_groups(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for person in &self.people {
            groups
                .entry(Self::restriction_key(person))
                .or_default()
                .push(person.name.clone());
        }
        groups
    }

    /// Guest names per implied tag, in input order
    #[must_use]
    pub fn tag_groups(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for person in &self.people {
            for tag in self.context.implied_tags(&person.restriction) {
                groups.entry(tag).or_default().push(person.name.clone());
            }
        }
        groups
    }
}

/// Analyze rows with the default parser
pub fn analyze_guest_list<I>(context: &DietaryContext, rows: I) -> GuestListAnalyzer<'_>
where
    I: IntoIterator<Item = GuestRow>,
{
    GuestListAnalyzer::from_rows(context, &RestrictionParser::new(), rows)
}

/// Column headers expected in guest list CSV files
#[must_use]
pub const fn guest_csv_headers() -> [&'static str; 2] {
    [NAME_COLUMN, DIETARY_RESTRICTION_COLUMN]
}
