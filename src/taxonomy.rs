// ABOUTME: Hierarchical food category taxonomy stored as an index-based DAG
// ABOUTME: Supports multi-parent definition, ancestor closure, subtype checks, and substring categorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! # Food Category Taxonomy
//!
//! Categories are addressed by uppercase name and stored in registration
//! order. Parent and child edges are adjacency sets of [`CategoryId`]s, kept
//! bidirectional on every [`Taxonomy::define`]. A category may have several
//! parents (`SHELLFISH` descends from `FISH`, which descends from
//! `ANIMAL_PRODUCTS`).
//!
//! Ancestor closure is recomputed per query. The graph is small (tens to low
//! hundreds of nodes) and recomputation cannot go stale when categories are
//! added after earlier queries. Cycles are rejected when an edge is added,
//! and the traversal also keeps a visited set.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ptr;

use mealplanner_core::errors::{AppError, AppResult};
use tracing::debug;

/// Stable index of a category inside one [`Taxonomy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(usize);

#[derive(Debug, Clone)]
struct CategoryNode {
    name: String,
    parents: BTreeSet<CategoryId>,
    children: BTreeSet<CategoryId>,
}

/// Registry of food categories and their parent/child edges
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    nodes: Vec<CategoryNode>,
    index: HashMap<String, CategoryId>,
}

/// Borrowed handle to a category inside a [`Taxonomy`]
#[derive(Clone, Copy)]
pub struct Category<'a> {
    taxonomy: &'a Taxonomy,
    id: CategoryId,
}

fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

impl Taxonomy {
    /// Create an empty taxonomy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the category if needed, then attach each parent edge.
    ///
    /// Defining an existing name returns the existing category and only adds
    /// the new edges. Every parent is validated before anything is mutated, so
    /// a failed call leaves the taxonomy untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a parent is not defined yet, or if an
    /// edge would make the category its own ancestor.
    pub fn define(&mut self, name: &str, parents: &[&str]) -> AppResult<Category<'_>> {
        let name = normalize(name);
        let existing = self.index.get(&name).copied();

        let mut parent_ids = Vec::with_capacity(parents.len());
        for parent in parents {
            let parent_name = normalize(parent);
            let parent_id = self.index.get(&parent_name).copied().ok_or_else(|| {
                AppError::invalid_input(format!("Parent category '{parent_name}' is not defined."))
                    .with_details(serde_json::json!({
                        "category": name,
                        "parent": parent_name,
                    }))
            })?;
            if let Some(id) = existing {
                if parent_id == id || self.closure(parent_id).contains(&id) {
                    return Err(AppError::invalid_input(format!(
                        "Adding parent '{parent_name}' to '{name}' would create a cycle"
                    )));
                }
            }
            parent_ids.push(parent_id);
        }

        let id = existing.unwrap_or_else(|| {
            let id = CategoryId(self.nodes.len());
            self.nodes.push(CategoryNode {
                name: name.clone(),
                parents: BTreeSet::new(),
                children: BTreeSet::new(),
            });
            self.index.insert(name.clone(), id);
            debug!(category = %name, "Defined food category");
            id
        });

        for parent_id in parent_ids {
            self.nodes[id.0].parents.insert(parent_id);
            self.nodes[parent_id.0].children.insert(id);
        }

        Ok(Category { taxonomy: self, id })
    }

    /// Case-insensitive lookup
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no category has this name.
    pub fn get(&self, name: &str) -> AppResult<Category<'_>> {
        self.find(name)
            .ok_or_else(|| AppError::not_found("Category", normalize(name)))
    }

    /// Case-insensitive lookup returning `None` for unknown names
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Category<'_>> {
        self.index.get(&normalize(name)).map(|&id| Category {
            taxonomy: self,
            id,
        })
    }

    /// Whether a category with this name is defined
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    /// Names of all transitive parents of `name`, excluding itself
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `name` is not defined.
    pub fn ancestors(&self, name: &str) -> AppResult<BTreeSet<String>> {
        Ok(self.get(name)?.ancestors())
    }

    /// Whether `name` is `other` or one of its descendants
    ///
    /// `other` does not need to be defined; an unknown `other` simply never
    /// matches anything but itself.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `name` is not defined.
    pub fn is_a(&self, name: &str, other: &str) -> AppResult<bool> {
        Ok(self.get(name)?.is_a(other))
    }

    /// Lenient subtype check that never fails.
    ///
    /// Unknown names fall back to plain (case-insensitive) name equality,
    /// which is what tag inference needs when a restriction mentions a
    /// category outside the current taxonomy.
    #[must_use]
    pub fn is_subtype_of(&self, name: &str, ancestor: &str) -> bool {
        self.find(name).map_or_else(
            || normalize(name) == normalize(ancestor),
            |category| category.is_a(ancestor),
        )
    }

    /// All categories in registration order
    #[must_use]
    pub fn all(&self) -> Vec<Category<'_>> {
        (0..self.nodes.len())
            .map(|index| Category {
                taxonomy: self,
                id: CategoryId(index),
            })
            .collect()
    }

    /// Number of defined categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no category is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every category
    pub fn reset(&mut self) {
        debug!(categories = self.nodes.len(), "Resetting food taxonomy");
        self.nodes.clear();
        self.index.clear();
    }

    /// Best-effort categorization of a free-form ingredient name.
    ///
    /// Returns the first category, in registration order, whose name is a
    /// substring of the trimmed, uppercased input. This is plain substring
    /// containment: `"PEANUT BUTTER"` matches whichever of `NUTS`/`PEANUT`
    /// was registered first that appears in the text, and nothing guarantees
    /// a unique answer when several category names occur.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no category name occurs in the input.
    pub fn categorize_from_string(&self, ingredient_name: &str) -> AppResult<Category<'_>> {
        let haystack = normalize(ingredient_name);
        self.all()
            .into_iter()
            .find(|category| haystack.contains(category.name()))
            .ok_or_else(|| {
                AppError::not_found("Category match", ingredient_name).with_details(
                    serde_json::json!({
                        "ingredient": ingredient_name,
                        "reason": "No matching category found",
                    }),
                )
            })
    }

    fn closure(&self, start: CategoryId) -> BTreeSet<CategoryId> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<CategoryId> = self.nodes[start.0].parents.iter().copied().collect();
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(self.nodes[id.0].parents.iter().copied());
            }
        }
        seen
    }

    fn names(&self, ids: impl IntoIterator<Item = CategoryId>) -> BTreeSet<String> {
        ids.into_iter()
            .map(|id| self.nodes[id.0].name.clone())
            .collect()
    }
}

impl<'a> Category<'a> {
    /// Uppercase category name
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.taxonomy.nodes[self.id.0].name
    }

    /// Index of this category in its taxonomy
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Names of the direct parents
    #[must_use]
    pub fn parents(&self) -> BTreeSet<String> {
        self.taxonomy
            .names(self.taxonomy.nodes[self.id.0].parents.iter().copied())
    }

    /// Names of the direct children
    #[must_use]
    pub fn children(&self) -> BTreeSet<String> {
        self.taxonomy
            .names(self.taxonomy.nodes[self.id.0].children.iter().copied())
    }

    /// Names of all transitive parents, excluding this category
    #[must_use]
    pub fn ancestors(&self) -> BTreeSet<String> {
        self.taxonomy.names(self.taxonomy.closure(self.id))
    }

    /// Whether this category is `other` or descends from it (case-insensitive)
    #[must_use]
    pub fn is_a(&self, other: &str) -> bool {
        let other = normalize(other);
        if other == self.name() {
            return true;
        }
        self.taxonomy
            .index
            .get(&other)
            .is_some_and(|target| self.taxonomy.closure(self.id).contains(target))
    }
}

impl fmt::Debug for Category<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FoodCategory({})", self.name())
    }
}

impl fmt::Display for Category<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FoodCategory({})", self.name())
    }
}

impl PartialEq for Category<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.taxonomy, other.taxonomy) && self.id == other.id
    }
}

impl Eq for Category<'_> {}
