//! Résumé text cleanup.
//!
//! Raw page text goes through two pure passes:
//!
//! ```text
//! pages -> join("\n") -> normalize_whitespace -> reconstruct_words -> cleaned text
//! ```
//!
//! Both passes are total functions; nothing in here can fail.

pub mod normalize;
pub mod reconstruct;

pub use normalize::normalize_whitespace;
pub use reconstruct::{reconstruct_words, Line};

/// Assemble the cleaned text of a document from its extracted pages.
///
/// Pages are expected to already exclude blank or undecodable pages; they are
/// joined in order with a newline.
pub fn clean_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let joined = pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    clean_text(&joined)
}

/// Normalize whitespace and rejoin fragmented words in already-joined text.
pub fn clean_text(text: &str) -> String {
    reconstruct_words(&normalize_whitespace(text))
}
