use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::error::{Result, WordsieveError};

/// External recognition command with captured output
#[derive(Debug, Clone)]
pub struct OcrCommand {
    pub binary_path: String,
    pub args: Vec<String>,
    pub description: String,
}

impl OcrCommand {
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Execute the command and return its captured stdout
    pub async fn execute(&self) -> Result<String> {
        debug!(
            "Executing recognition command: {} {:?}",
            self.binary_path, self.args
        );

        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .output()
            .map_err(|e| {
                WordsieveError::Ocr(format!("Failed to execute {}: {}", self.binary_path, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WordsieveError::Ocr(format!(
                "{} failed: {}",
                self.description, stderr
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Image-based text recognition over rendered PDF pages.
///
/// Pages are rendered with a poppler-style renderer into a temporary
/// directory, then each page image is passed through the OCR binary. Both
/// binaries are external collaborators configured by path.
pub struct OcrEngine {
    config: SourceConfig,
}

impl OcrEngine {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Check that renderer and OCR binaries are on the machine
    pub fn check_availability(&self) -> Result<()> {
        for (binary, version_flag) in [
            (&self.config.renderer_binary_path, "-v"),
            (&self.config.ocr_binary_path, "--version"),
        ] {
            Command::new(binary)
                .arg(version_flag)
                .output()
                .map_err(|e| WordsieveError::Ocr(format!("{} not found: {}", binary, e)))?;
        }
        Ok(())
    }

    /// Recognize the text of every page of a PDF, concatenated in page order
    pub async fn recognize_pdf(&self, pdf_path: &Path) -> Result<String> {
        self.check_availability()?;

        let work_dir = tempfile::tempdir()?;
        let prefix = work_dir.path().join("page");

        info!("Rendering {} for OCR", pdf_path.display());

        OcrCommand::new(&self.config.renderer_binary_path, "Page rendering")
            .arg("-r")
            .arg(self.config.render_dpi.to_string())
            .arg("-png")
            .arg("-gray")
            .path_arg(pdf_path)
            .path_arg(&prefix)
            .execute()
            .await?;

        let pages = collect_page_images(work_dir.path())?;
        if pages.is_empty() {
            return Err(WordsieveError::Ocr(format!(
                "No pages rendered from {}",
                pdf_path.display()
            )));
        }

        info!("Recognizing {} rendered pages", pages.len());

        let mut full_text = String::new();
        for page in &pages {
            let text = self.recognize_image(page).await?;
            full_text.push_str(&text);
            full_text.push('\n');
        }

        Ok(full_text)
    }

    async fn recognize_image(&self, image_path: &Path) -> Result<String> {
        OcrCommand::new(&self.config.ocr_binary_path, "Page recognition")
            .path_arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.ocr_language)
            .execute()
            .await
    }
}

/// List rendered page images in page order. The renderer zero-pads page
/// numbers, so lexicographic order is page order.
fn collect_page_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "png"))
        .collect();
    pages.sort();
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_images_sorted_in_page_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page-03.png", "page-01.png", "page-02.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let pages = collect_page_images(dir.path()).unwrap();
        let names: Vec<_> = pages
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["page-01.png", "page-02.png", "page-03.png"]);
    }

    #[test]
    fn test_command_builder_accumulates_args() {
        let cmd = OcrCommand::new("tesseract", "Page recognition")
            .path_arg("page-01.png")
            .arg("stdout")
            .arg("-l")
            .arg("eng");
        assert_eq!(cmd.args, vec!["page-01.png", "stdout", "-l", "eng"]);
    }
}
