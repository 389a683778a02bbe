use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Two-letter junk that OCR and letter-run extraction keep producing.
/// These are never worth translating even when a known-word list misses them.
pub const BLACKLIST: &[&str] = &["aa", "qi", "xi", "za", "zz", "xx", "ll", "rn"];

/// Selects the unfamiliar words out of a token sequence.
///
/// Each token is judged on its own: alphabetic, at least three letters,
/// absent from the known-word set and the static blacklist, and present in
/// the reference dictionary when one is configured. Input order is kept.
pub struct CandidateFilter {
    known: HashSet<String>,
    dictionary: Option<HashSet<String>>,
    blacklist: HashSet<&'static str>,
}

impl CandidateFilter {
    pub fn new(known: HashSet<String>, dictionary: Option<HashSet<String>>) -> Self {
        Self {
            known,
            dictionary,
            blacklist: BLACKLIST.iter().copied().collect(),
        }
    }

    pub fn is_unfamiliar(&self, word: &str) -> bool {
        word.len() >= 3
            && word.chars().all(|c| c.is_ascii_alphabetic())
            && !self.known.contains(word)
            && !self.blacklist.contains(word)
            && self
                .dictionary
                .as_ref()
                .map_or(true, |dict| dict.contains(word))
    }

    pub fn filter(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| self.is_unfamiliar(w))
            .cloned()
            .collect()
    }
}

/// Load a reference dictionary of valid English words, one per line.
pub fn load_dictionary(path: &Path) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    let words: HashSet<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    debug!("Loaded reference dictionary with {} words", words.len());
    Ok(words)
}
