// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Generic listing query engine.
//!
//! Every list view (universities, applications, messages) shows the same
//! derived shape: records matching a case-insensitive substring term AND an
//! optional categorical filter, ordered by a sort key. This module is the
//! single implementation, parameterized by field accessors so the views
//! cannot drift apart.
//!
//! Queries are pure and total: the input slice is never touched, empty
//! input yields empty output, and running the same query twice over its own
//! result returns it unchanged.

use std::cmp::Ordering;

type FieldFn<T> = Box<dyn for<'t> Fn(&'t T) -> &'t str>;

/// A listing query over records of type `T`.
///
/// The primary name field doubles as the first term-match target and as the
/// default (stable, lexicographic, case-insensitive) sort key.
pub struct ListQuery<T> {
    term: String,
    name: FieldFn<T>,
    extra_fields: Vec<FieldFn<T>>,
    category: Option<Box<dyn Fn(&T) -> bool>>,
    order: Option<Box<dyn Fn(&T, &T) -> Ordering>>,
}

impl<T: Clone> ListQuery<T> {
    pub fn new(name: impl for<'t> Fn(&'t T) -> &'t str + 'static) -> Self {
        Self {
            term: String::new(),
            name: Box::new(name),
            extra_fields: Vec::new(),
            category: None,
            order: None,
        }
    }

    /// Free-text term matched (case-insensitively) against the name field
    /// and any extra text fields.
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Additional text field considered for term matching.
    pub fn matching(mut self, field: impl for<'t> Fn(&'t T) -> &'t str + 'static) -> Self {
        self.extra_fields.push(Box::new(field));
        self
    }

    /// Categorical equality filter. Absent means "all".
    pub fn category(mut self, keep: impl Fn(&T) -> bool + 'static) -> Self {
        self.category = Some(Box::new(keep));
        self
    }

    /// Explicit sort order replacing the default name sort.
    pub fn order_by(mut self, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.order = Some(Box::new(cmp));
        self
    }

    /// Produce the derived, ordered view.
    pub fn run(&self, items: &[T]) -> Vec<T> {
        let term = self.term.trim().to_lowercase();

        let mut result: Vec<T> = items
            .iter()
            .filter(|item| {
                let term_ok = term.is_empty()
                    || contains_ci((self.name)(item), &term)
                    || self
                        .extra_fields
                        .iter()
                        .any(|field| contains_ci(field(item), &term));
                let category_ok = self.category.as_ref().is_none_or(|keep| keep(item));
                term_ok && category_ok
            })
            .cloned()
            .collect();

        match &self.order {
            Some(cmp) => result.sort_by(|a, b| cmp(a, b)),
            None => result.sort_by(|a, b| {
                (self.name)(a)
                    .to_lowercase()
                    .cmp(&(self.name)(b).to_lowercase())
            }),
        }
        result
    }
}

/// Case-insensitive substring test. `needle` must already be lowercased.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
