use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::translate::Translation;

/// Fixed filename for the pre-exclusion diagnostic export, written next to
/// the main output file.
pub const UNFILTERED_EXPORT_FILENAME: &str = "all_words_unfiltered.csv";

/// Write word/translation pairs as a two-column spreadsheet, overwriting
/// any existing file at the path.
pub fn write_word_list(pairs: &[(String, Translation)], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Word", "Chinese"])?;

    for (word, translation) in pairs {
        writer.write_record([word.as_str(), translation.as_output()])?;
    }

    writer.flush()?;
    info!("Saved {} word pairs to {}", pairs.len(), path.display());
    Ok(())
}

/// Write the full pre-exclusion word list next to the main output file,
/// for auditing what the exclusion rules later removed.
pub fn write_unfiltered_export(
    pairs: &[(String, Translation)],
    output_path: &Path,
) -> Result<PathBuf> {
    let dir = output_path.parent().filter(|p| !p.as_os_str().is_empty());
    let export_path = dir
        .unwrap_or_else(|| Path::new("."))
        .join(UNFILTERED_EXPORT_FILENAME);
    write_word_list(pairs, &export_path)?;
    Ok(export_path)
}

/// Write a plain word list, one word per line.
pub fn write_word_lines(words: &[String], path: &Path) -> Result<()> {
    let mut content = words.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    std::fs::write(path, content)?;
    info!("Saved {} words to {}", words.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_has_named_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");

        let pairs = vec![
            ("banana".to_string(), Translation::Text("香蕉".to_string())),
            ("xyzzy".to_string(), Translation::Failed),
        ];
        write_word_list(&pairs, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "Word,Chinese");
        assert_eq!(lines[1], "banana,香蕉");
        assert_eq!(lines[2], "xyzzy,翻译失败");
    }

    #[test]
    fn test_existing_file_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        std::fs::write(&path, "stale content\nmore\nrows\nhere\n").unwrap();

        write_word_list(&[("cat".to_string(), Translation::Text("猫".to_string()))], &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_unfiltered_export_lands_beside_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("result.csv");

        let pairs = vec![("cat".to_string(), Translation::Text("猫".to_string()))];
        let export = write_unfiltered_export(&pairs, &output).unwrap();

        assert_eq!(export, dir.path().join(UNFILTERED_EXPORT_FILENAME));
        assert!(export.exists());
    }

    #[test]
    fn test_word_lines_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        let words = vec!["apple".to_string(), "banana".to_string()];
        write_word_lines(&words, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "apple\nbanana\n");
    }
}
