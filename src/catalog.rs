//! Catalog Store
//!
//! Parsing and the one-shot load state of the drink list.

use std::collections::HashSet;

use crate::error::AppError;
use crate::models::{CatalogDocument, Item};

/// Lifecycle of the catalog for one page load
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    /// Fetch in flight
    #[default]
    Pending,
    Loaded(Vec<Item>),
    /// Load failed; holds the reason for logging
    Failed(String),
}

impl CatalogState {
    /// Record the outcome of the single load attempt.
    /// Returns false (and changes nothing) if already settled.
    pub fn settle(&mut self, result: Result<Vec<Item>, AppError>) -> bool {
        if !matches!(self, CatalogState::Pending) {
            return false;
        }
        *self = match result {
            Ok(items) => CatalogState::Loaded(items),
            Err(e) => CatalogState::Failed(e.to_string()),
        };
        true
    }

    /// Loaded items, empty while pending or failed
    pub fn items(&self) -> &[Item] {
        match self {
            CatalogState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Parse `drinks.json`, keeping file order and rejecting duplicate ids
pub fn parse_catalog(json: &str) -> Result<Vec<Item>, AppError> {
    let doc: CatalogDocument = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(doc.drinks.len());
    for item in &doc.drinks {
        if !seen.insert(item.id) {
            return Err(AppError::DuplicateId(item.id));
        }
    }
    Ok(doc.drinks)
}

/// Distinct categories in order of first appearance
pub fn categories(items: &[Item]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.category.as_str()))
        .map(|item| item.category.clone())
        .collect()
}
