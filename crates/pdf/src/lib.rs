use thiserror::Error;

use backend::PdfBackend;

pub mod backend;
pub mod glyphs;
pub mod types;

pub use types::*;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("Page {page} could not be decoded: {reason}")]
    Page { page: u32, reason: String },
    #[error("None of the {0} pages could be decoded")]
    NoDecodablePages(usize),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse PDF bytes and extract the text of every page that has some.
pub fn extract_pages(bytes: &[u8]) -> Result<ExtractedPages, PdfError> {
    let backend = backend::LopdfBackend::load_bytes(bytes)?;
    extract_pages_from(&backend)
}

/// Extract page text from an already-loaded backend.
///
/// Pages are visited in page-number order. A page whose text layer fails to
/// decode, or whose text is blank after glyph repair, is left out of the
/// result rather than inserted as an empty entry. Only when the document has
/// pages and every one of them fails to decode is the whole extraction an
/// error.
pub fn extract_pages_from(backend: &dyn PdfBackend) -> Result<ExtractedPages, PdfError> {
    let page_map = backend.pages();
    let mut pages = Vec::with_capacity(page_map.len());
    let mut skipped = Vec::new();
    let mut failures = 0usize;

    for &page_num in page_map.keys() {
        match backend.page_text(page_num) {
            Ok(raw) => {
                let text = glyphs::repair_glyphs(&raw);
                if text.trim().is_empty() {
                    log::debug!("Page {} has no extractable text, skipping", page_num);
                    skipped.push(page_num);
                } else {
                    pages.push(PageText {
                        number: page_num,
                        text,
                    });
                }
            }
            Err(e) => {
                log::warn!("Skipping page {}: {}", page_num, e);
                failures += 1;
                skipped.push(page_num);
            }
        }
    }

    if !page_map.is_empty() && failures == page_map.len() {
        return Err(PdfError::NoDecodablePages(failures));
    }

    Ok(ExtractedPages {
        page_count: page_map.len(),
        pages,
        skipped,
    })
}
