//! Service taxonomy and tool registry.
//!
//! The taxonomy is read-only for the lifetime of the process. The built-in one
//! is embedded from `data/taxonomy.toml` and parsed on first use; callers that
//! want a different one load it with [`Taxonomy::from_toml_str`] and pass it by
//! reference.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_TAXONOMY: &str = include_str!("../data/taxonomy.toml");

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Invalid taxonomy file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Taxonomy could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Category #{0} has an empty name")]
    EmptyCategoryName(usize),
}

/// A service category and the offerings a freelancer can declare under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub name: String,
    #[serde(default)]
    pub offerings: Vec<String>,
}

impl TaxonomyEntry {
    pub fn offers(&self, item: &str) -> bool {
        self.offerings.iter().any(|o| o == item)
    }
}

/// Flat set of recognized tool names. Declaration order is preserved for
/// display; membership checks go through a hash set.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    names: Vec<String>,
    index: HashSet<String>,
}

impl ToolRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let index = names.iter().cloned().collect();
        ToolRegistry { names, index }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Service categories in declaration order plus the tool registry.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: Vec<TaxonomyEntry>,
    tools: ToolRegistry,
}

/// On-disk shape of a taxonomy file.
#[derive(Debug, Serialize, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    tools: Vec<String>,
    #[serde(default)]
    categories: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    pub fn new(categories: Vec<TaxonomyEntry>, tools: ToolRegistry) -> Self {
        Taxonomy { categories, tools }
    }

    /// The taxonomy compiled into the binary.
    pub fn builtin() -> &'static Taxonomy {
        static BUILTIN: OnceLock<Taxonomy> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Taxonomy::from_toml_str(BUILTIN_TAXONOMY).expect("built-in taxonomy must be valid")
        })
    }

    /// Parse a taxonomy from TOML.
    ///
    /// ```toml
    /// tools = ["Figma", "Docker"]
    ///
    /// [[categories]]
    /// name = "UI/UX DESIGNING"
    /// offerings = ["Mobile App UI/UX"]
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = toml::from_str(input)?;

        if let Some(pos) = file.categories.iter().position(|c| c.name.trim().is_empty()) {
            return Err(TaxonomyError::EmptyCategoryName(pos + 1));
        }

        Ok(Taxonomy {
            categories: file.categories,
            tools: ToolRegistry::new(file.tools),
        })
    }

    pub fn to_toml_string(&self) -> Result<String, TaxonomyError> {
        let file = TaxonomyFile {
            tools: self.tools.names().to_vec(),
            categories: self.categories.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    pub fn categories(&self) -> &[TaxonomyEntry] {
        &self.categories
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}
