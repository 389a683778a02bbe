use std::path::Path;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::error::{Result, WordsieveError};
use crate::ocr::OcrEngine;

/// How a source document is read, resolved once from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// PDF with embedded text, with an OCR fallback for scanned documents
    Pdf,
    /// Plain text
    Text,
    /// Tabular file; first-column cells are flattened into one text blob
    Table { delimiter: u8 },
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") => Ok(Self::Text),
            Some("csv") => Ok(Self::Table { delimiter: b',' }),
            Some("tsv") => Ok(Self::Table { delimiter: b'\t' }),
            _ => Err(WordsieveError::UnsupportedFormat(format!(
                "Unsupported source format: {} (expected pdf, txt, csv, or tsv)",
                path.display()
            ))),
        }
    }
}

/// Read a source document into a single text blob.
///
/// PDF sources whose embedded text is implausibly short fall back to an OCR
/// pass over the rendered pages.
pub async fn read_source_text(path: &Path, config: &SourceConfig) -> Result<String> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Pdf => {
            // A failed embedded-text pass is treated like an empty one; the
            // OCR fallback below covers scanned and malformed documents
            let text = match extract_pdf_text(path) {
                Ok(text) => text,
                Err(e) => {
                    debug!("Embedded text extraction failed: {}", e);
                    String::new()
                }
            };
            if non_whitespace_len(&text) < config.min_extracted_chars {
                info!(
                    "Embedded text too short ({} chars), running OCR on {}",
                    non_whitespace_len(&text),
                    path.display()
                );
                let ocr = OcrEngine::new(config.clone());
                ocr.recognize_pdf(path).await
            } else {
                Ok(text)
            }
        }
        SourceFormat::Text => read_text_file(path),
        SourceFormat::Table { delimiter } => flatten_table(path, delimiter),
    }
}

fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

fn extract_pdf_text(path: &Path) -> Result<String> {
    debug!("Extracting embedded text from {}", path.display());
    pdf_extract::extract_text(path)
        .map_err(|e| WordsieveError::Extraction(format!("PDF text extraction failed: {}", e)))
}

fn read_text_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    match content.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

/// Join the first-column cell values of a tabular file with single spaces.
fn flatten_table(path: &Path, delimiter: u8) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(cell) = record.get(0) {
            cells.push(cell.to_string());
        }
    }
    Ok(cells.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn test_config() -> SourceConfig {
        SourceConfig {
            ocr_binary_path: "tesseract".to_string(),
            renderer_binary_path: "pdftoppm".to_string(),
            ocr_language: "eng".to_string(),
            render_dpi: 200,
            min_extracted_chars: 20,
        }
    }

    #[test]
    fn test_format_dispatch_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("book.PDF")).unwrap(),
            SourceFormat::Pdf
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("notes.txt")).unwrap(),
            SourceFormat::Text
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("list.csv")).unwrap(),
            SourceFormat::Table { delimiter: b',' }
        );
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = SourceFormat::from_path(Path::new("book.epub")).unwrap_err();
        assert!(matches!(err, WordsieveError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_plain_text_read_strips_bom() {
        let file = temp_file(".txt", "\u{feff}The quick brown fox jumps over the lazy dog");
        let text = read_source_text(file.path(), &test_config()).await.unwrap();
        assert!(text.starts_with("The quick"));
    }

    #[tokio::test]
    async fn test_table_flattening_joins_first_column() {
        let file = temp_file(".csv", "Sentence,Note\nfirst words,x\nsecond words,y\n");
        let text = read_source_text(file.path(), &test_config()).await.unwrap();
        assert_eq!(text, "first words second words");
    }

    #[test]
    fn test_non_whitespace_len() {
        assert_eq!(non_whitespace_len("  a b\nc  "), 3);
        assert_eq!(non_whitespace_len("   \n\t"), 0);
    }
}
