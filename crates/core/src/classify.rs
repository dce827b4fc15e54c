//! Classification of declared skills and tools against a [`Taxonomy`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::Taxonomy;

/// Offerings matched under one service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: String,
    pub services: Vec<String>,
}

/// Matched categories (taxonomy order) and matched tools (input order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub categories: Vec<CategoryMatch>,
    pub tools: Vec<String>,
}

impl ClassificationResult {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tools.is_empty()
    }
}

/// Map declared strings onto the taxonomy.
///
/// Categories are visited in declaration order and emitted only when at least
/// one input matched. Inside a category, and in the tool list, matches keep
/// the order (and multiplicity) they had in `declared`. Matching is exact
/// string equality.
pub fn classify<S: AsRef<str>>(taxonomy: &Taxonomy, declared: &[S]) -> ClassificationResult {
    let categories = taxonomy
        .categories()
        .iter()
        .filter_map(|entry| {
            let offerings: HashSet<&str> = entry.offerings.iter().map(String::as_str).collect();
            let services: Vec<String> = declared
                .iter()
                .map(|item| item.as_ref())
                .filter(|item| offerings.contains(item))
                .map(str::to_string)
                .collect();

            (!services.is_empty()).then(|| CategoryMatch {
                category: entry.name.clone(),
                services,
            })
        })
        .collect();

    let tools = declared
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| taxonomy.tools().contains(item))
        .map(str::to_string)
        .collect();

    ClassificationResult { categories, tools }
}
