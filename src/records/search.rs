//! Search Operations
//!
//! Derives the visible rows of a store from a free-text term. Rows keep
//! their unfiltered position so edit and delete hit the right record.

use super::models::{Contact, Student};

/// Prepared search term
#[derive(Debug, Clone)]
pub struct Needle {
    raw: String,
    lower: String,
}

impl Needle {
    pub fn new(term: &str) -> Self {
        Self {
            raw: term.to_string(),
            lower: term.to_lowercase(),
        }
    }

    /// Case-insensitive substring match.
    pub fn in_text(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.lower)
    }

    /// Exact substring match.
    pub fn in_exact(&self, haystack: &str) -> bool {
        haystack.contains(&self.raw)
    }
}

pub trait Searchable {
    fn matches(&self, needle: &Needle) -> bool;
}

impl Searchable for Student {
    fn matches(&self, needle: &Needle) -> bool {
        needle.in_text(&self.name) || needle.in_text(&self.course)
    }
}

impl Searchable for Contact {
    fn matches(&self, needle: &Needle) -> bool {
        needle.in_text(&self.full_name) || needle.in_exact(&self.phone)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct VisibleRow<'a, R> {
    /// Position in the unfiltered store
    pub position: usize,
    pub record: &'a R,
}

// Manual impls: derive would require `R: Clone`/`R: Copy`.
impl<R> Clone for VisibleRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for VisibleRow<'_, R> {}

pub fn filter<'a, R: Searchable>(records: &'a [R], term: &str) -> Vec<VisibleRow<'a, R>> {
    let needle = Needle::new(term);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.matches(&needle))
        .map(|(position, record)| VisibleRow { position, record })
        .collect()
}
