use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, WordsieveError};

// Default values for serde-optional fields
fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub filter: FilterConfig,
    pub translate: TranslateConfig,
    pub exclusion: ExclusionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the OCR binary (e.g., tesseract)
    pub ocr_binary_path: String,
    /// Path to the PDF page renderer binary (e.g., pdftoppm)
    pub renderer_binary_path: String,
    /// OCR language model to use
    pub ocr_language: String,
    /// Rendering resolution for the OCR fallback, in DPI
    pub render_dpi: u32,
    /// Minimum non-whitespace characters before the direct PDF text
    /// extraction is considered usable; shorter output triggers OCR
    pub min_extracted_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Optional newline-delimited reference dictionary of valid English
    /// words; when set, candidates must appear in it
    pub dictionary_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Ollama endpoint URL
    pub endpoint: String,
    /// LLM model to use for translation
    pub model: String,
    /// Maximum attempts per word before recording a failure
    pub max_retries: u32,
    /// Request timeout per translation call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Toggles for the exclusion categories applied after translation.
/// Every category is enabled unless explicitly switched off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Remove personal names
    #[serde(default = "default_true")]
    pub rm_names: bool,
    /// Remove place names
    #[serde(default = "default_true")]
    pub rm_places: bool,
    /// Remove filler and discourse words
    #[serde(default = "default_true")]
    pub rm_fillers: bool,
    /// Remove words whose translation failed
    #[serde(default = "default_true")]
    pub rm_failed: bool,
    /// Remove two-letter and other low-information words
    #[serde(default = "default_true")]
    pub rm_useless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                ocr_binary_path: "tesseract".to_string(),
                renderer_binary_path: "pdftoppm".to_string(),
                ocr_language: "eng".to_string(),
                render_dpi: 200,
                min_extracted_chars: 20,
            },
            filter: FilterConfig {
                dictionary_path: None,
            },
            translate: TranslateConfig {
                endpoint: "http://localhost:11434".to_string(),
                model: "llama3.2:3b".to_string(),
                max_retries: 3,
                timeout_secs: 30,
            },
            exclusion: ExclusionConfig::default(),
        }
    }
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            rm_names: true,
            rm_places: true,
            rm_fillers: true,
            rm_failed: true,
            rm_useless: true,
        }
    }
}

impl ExclusionConfig {
    /// Configuration with every exclusion category switched off
    pub fn disabled() -> Self {
        Self {
            rm_names: false,
            rm_places: false,
            rm_fillers: false,
            rm_failed: false,
            rm_useless: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WordsieveError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| WordsieveError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WordsieveError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WordsieveError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
