//! Core library for folio
//!
//! This crate implements the **Functional Core** of the folio application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The folio project splits its work across three crates:
//!
//! - **`folio_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pdf`**: Per-page text extraction from PDF bytes
//! - **`folio`**: Fetching, the profile store, narrative generation and the CLI
//!   (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! The only process-wide value is the built-in [`taxonomy::Taxonomy`], which is
//! initialized once and never mutated.
//!
//! # Module Organization
//!
//! - [`text`]: Whitespace normalization and fragmented-word reconstruction
//! - [`taxonomy`]: Service categories and the tool registry
//! - [`classify`]: Mapping declared skills and tools onto the taxonomy
//! - [`profile`]: Profile records and portfolio draft assembly
//! - [`narrative`]: Prompt building and model response parsing
//!
//! # Example Usage
//!
//! ```rust
//! use folio_core::classify::classify;
//! use folio_core::taxonomy::Taxonomy;
//! use folio_core::text::clean_pages;
//!
//! let text = clean_pages(&["H e l l o  World", "Goodbye\tFriend"]);
//! assert_eq!(text, "Hello World\nGoodbye Friend");
//!
//! let result = classify(Taxonomy::builtin(), &["Logos", "Figma"]);
//! assert_eq!(result.categories[0].services, vec!["Logos"]);
//! assert_eq!(result.tools, vec!["Figma"]);
//! ```

pub mod classify;
pub mod narrative;
pub mod profile;
pub mod taxonomy;
pub mod text;
