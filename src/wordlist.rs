use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, WordsieveError};
use crate::tokenize::letter_runs;

/// How a known-word list file is parsed, resolved once from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordlistFormat {
    /// Line-oriented text; English words are extracted from each line, so
    /// lists annotated with translations or notes are accepted
    Lines,
    /// Tabular file; the first column holds one already-clean word per row
    Table { delimiter: u8 },
}

impl WordlistFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("txt") => Ok(Self::Lines),
            Some("csv") => Ok(Self::Table { delimiter: b',' }),
            Some("tsv") => Ok(Self::Table { delimiter: b'\t' }),
            _ => Err(WordsieveError::UnsupportedFormat(format!(
                "Unsupported known-word list format: {} (expected txt, csv, or tsv)",
                path.display()
            ))),
        }
    }
}

/// Load the set of words the user already knows.
///
/// The result is a set of lowercase strings. Line-oriented sources only
/// yield entries of three letters or more; tabular sources keep cell values
/// whole, so shorter or mixed entries pass through unchanged.
pub fn load_known_words(path: &Path) -> Result<HashSet<String>> {
    let format = WordlistFormat::from_path(path)?;
    debug!("Loading known-word list {} as {:?}", path.display(), format);

    match format {
        WordlistFormat::Lines => load_from_lines(path),
        WordlistFormat::Table { delimiter } => load_from_table(path, delimiter),
    }
}

fn load_from_lines(path: &Path) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut words = HashSet::new();
    for line in content.lines() {
        words.extend(letter_runs(line));
    }
    Ok(words)
}

fn load_from_table(path: &Path, delimiter: u8) -> Result<HashSet<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let mut words = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(cell) = record.get(0) {
            words.insert(cell.to_lowercase());
        }
    }
    Ok(words)
}
