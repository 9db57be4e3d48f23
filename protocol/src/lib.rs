//! Wire types for the trivia provider's JSON API.
//!
//! Only the fields the board needs are modelled; anything else the provider
//! sends is ignored during decoding.
#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Deserializer, Serialize};

/// Base address used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://jservice.io/api";

/// Path of the "list categories" endpoint, relative to the base address.
pub const CATEGORIES_PATH: &str = "/categories";

/// Path of the "list clues for category" endpoint, relative to the base address.
pub const CLUES_PATH: &str = "/clues";

/// Identifier the provider assigns to a category.
pub type CategoryId = u64;

/// Query for the "list categories" endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesQuery {
    pub count: u32,
    pub offset: u32,
}

impl CategoriesQuery {
    pub const COUNT: &'static str = "count";
    pub const OFFSET: &'static str = "offset";
}

/// Query for the "list clues for category" endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluesQuery {
    pub category: CategoryId,
}

impl CluesQuery {
    pub const CATEGORY: &'static str = "category";
}

/// One entry of the "list categories" response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    /// Number of clues the provider holds for this category, when reported.
    #[serde(default)]
    pub clues_count: Option<u32>,
}

/// Category reference embedded in every clue record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
}

/// One entry of the "list clues for category" response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub question: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub answer: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl ClueRecord {
    /// Title of the embedded category, if the provider sent a non-empty one.
    pub fn category_title(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|category| category.title.as_str())
            .filter(|title| !title.is_empty())
    }
}

// the provider occasionally sends `null` where text is expected
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
