//! Résumé text extraction: fetch or read a PDF, extract its pages and clean
//! the text.

use std::path::PathBuf;
use std::time::Duration;

use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "resume")]
#[command(about = "Extract cleaned text from a résumé PDF")]
pub struct App {
    /// An http(s):// URL or a local file path
    pub source: String,

    /// HTTP timeout in seconds
    #[clap(long, env = "FOLIO_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Print page statistics and text as JSON
    #[arg(long)]
    pub json: bool,
}

/// Where a résumé PDF comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    Url(String),
    Path(PathBuf),
}

impl ResumeSource {
    /// `http://` and `https://` sources are URLs, anything else is a path.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ResumeSource::Url(trimmed.to_string())
        } else {
            ResumeSource::Path(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for ResumeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResumeSource::Url(url) => write!(f, "{url}"),
            ResumeSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    /// The source could not be reached or read.
    #[error("Failed to fetch résumé: {0}")]
    Fetch(String),
    /// The bytes are not a usable PDF.
    #[error("Résumé is not a readable PDF: {0}")]
    Format(String),
}

impl From<pdf::PdfError> for ResumeError {
    fn from(e: pdf::PdfError) -> Self {
        ResumeError::Format(e.to_string())
    }
}

/// Turns a résumé source into cleaned text.
pub trait ResumeReader {
    async fn read(&self, source: &ResumeSource) -> Result<String, ResumeError>;
}

/// Reads résumés over HTTP or from the local filesystem.
#[derive(Debug, Clone)]
pub struct HttpResumeReader {
    client: reqwest::Client,
}

impl HttpResumeReader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;
        Ok(Self { client })
    }

    async fn fetch(&self, source: &ResumeSource) -> Result<Vec<u8>, ResumeError> {
        match source {
            ResumeSource::Url(url) => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| ResumeError::Fetch(format!("{url}: {e}")))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(ResumeError::Fetch(format!("{url} [{status}]")));
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| ResumeError::Fetch(format!("{url}: {e}")))?;
                Ok(bytes.to_vec())
            }
            ResumeSource::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|e| ResumeError::Fetch(format!("{}: {e}", path.display()))),
        }
    }

    /// Fetch and extract, keeping the per-page breakdown.
    pub async fn extract(&self, source: &ResumeSource) -> Result<pdf::ExtractedPages, ResumeError> {
        let bytes = self.fetch(source).await?;
        log::debug!("Read {} bytes from {}", bytes.len(), source);
        extract_blocking(bytes).await
    }
}

impl ResumeReader for HttpResumeReader {
    async fn read(&self, source: &ResumeSource) -> Result<String, ResumeError> {
        let extracted = self.extract(source).await?;
        Ok(folio_core::text::clean_pages(&extracted.texts()))
    }
}

/// PDF parsing is CPU-bound, so it runs off the async executor.
async fn extract_blocking(bytes: Vec<u8>) -> Result<pdf::ExtractedPages, ResumeError> {
    tokio::task::spawn_blocking(move || pdf::extract_pages(&bytes))
        .await
        .map_err(|e| ResumeError::Format(format!("Task join error: {e}")))?
        .map_err(ResumeError::from)
}

#[derive(Debug, serde::Serialize)]
struct ResumeReport {
    source: String,
    page_count: usize,
    extracted_pages: Vec<u32>,
    skipped_pages: Vec<u32>,
    text: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let source = ResumeSource::parse(&app.source);
    let reader = HttpResumeReader::new(Duration::from_secs(app.timeout))?;

    if global.verbose {
        eprintln!("Source: {}", source);
        eprintln!("Timeout: {}s", app.timeout);
    }

    let extracted = reader.extract(&source).await?;
    let text = folio_core::text::clean_pages(&extracted.texts());

    if app.json {
        let report = ResumeReport {
            source: source.to_string(),
            page_count: extracted.page_count,
            extracted_pages: extracted.pages.iter().map(|p| p.number).collect(),
            skipped_pages: extracted.skipped,
            text,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// One page per entry, each drawn with a single `Tj`.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 11.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages.len() as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn reader() -> HttpResumeReader {
        HttpResumeReader::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            ResumeSource::parse("https://cdn.example.com/cv.pdf"),
            ResumeSource::Url("https://cdn.example.com/cv.pdf".to_string())
        );
        assert_eq!(
            ResumeSource::parse("HTTP://example.com/cv.pdf"),
            ResumeSource::Url("HTTP://example.com/cv.pdf".to_string())
        );
        assert_eq!(
            ResumeSource::parse("./cv.pdf"),
            ResumeSource::Path(PathBuf::from("./cv.pdf"))
        );
    }

    #[test]
    fn test_pdf_errors_are_format_errors() {
        let err: ResumeError = pdf::PdfError::Encrypted.into();
        assert!(matches!(err, ResumeError::Format(_)));
    }

    #[tokio::test]
    async fn test_read_local_pdf() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), build_pdf(&["H e l l o  World", "Goodbye   Friend"])).unwrap();

        let text = reader()
            .read(&ResumeSource::Path(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(text, "Hello World\nGoodbye Friend");
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = ResumeSource::Path(dir.path().join("missing.pdf"));

        assert!(matches!(
            reader().read(&source).await,
            Err(ResumeError::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn test_garbage_is_format_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"this is a plain text file").unwrap();

        assert!(matches!(
            reader()
                .read(&ResumeSource::Path(file.path().to_path_buf()))
                .await,
            Err(ResumeError::Format(_))
        ));
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await
                .unwrap();
        });

        let source = ResumeSource::Url(format!("http://{addr}/cv.pdf"));
        let result = reader().read(&source).await;
        server.await.unwrap();

        match result {
            Err(ResumeError::Fetch(message)) => assert!(message.contains("404")),
            other => panic!("expected a fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_url_is_fetch_error() {
        let source = ResumeSource::Url("http://127.0.0.1:9/cv.pdf".to_string());

        assert!(matches!(
            reader().read(&source).await,
            Err(ResumeError::Fetch(_))
        ));
    }
}
