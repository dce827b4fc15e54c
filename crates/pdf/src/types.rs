use serde::{Deserialize, Serialize};

/// Text extracted from one page that produced usable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number in the source document.
    pub number: u32,
    pub text: String,
}

/// The pages of a document that yielded text, in document order.
///
/// Pages that were blank or failed to decode are not represented in
/// [`ExtractedPages::pages`]; their numbers are listed in `skipped` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPages {
    pub page_count: usize,
    pub pages: Vec<PageText>,
    pub skipped: Vec<u32>,
}

impl ExtractedPages {
    /// Page texts in order, ready to be joined.
    pub fn texts(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.text.as_str()).collect()
    }
}
