//! Frontend Models
//!
//! Data structures matching the catalog document.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::config::{PLACEHOLDER_BG, PLACEHOLDER_FG};

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A drink in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
}

/// Root of `drinks.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub drinks: Vec<Item>,
}

/// Display label for a category key: the first `_` reads as ` & `
pub fn category_label(category: &str) -> String {
    category.replacen('_', " & ", 1)
}

/// Generated image used when an item's own image fails to load
pub fn placeholder_image_url(name: &str, (width, height): (u32, u32)) -> String {
    format!(
        "https://via.placeholder.com/{}x{}/{}/{}?text={}",
        width,
        height,
        PLACEHOLDER_BG,
        PLACEHOLDER_FG,
        utf8_percent_encode(name, URI_COMPONENT)
    )
}
