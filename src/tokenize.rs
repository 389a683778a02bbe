use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    // Maximal runs of ASCII letters, three characters or longer.
    static ref LETTER_RUN: Regex = Regex::new(r"[A-Za-z]{3,}").unwrap();
}

/// Iterate the lowercased ASCII-letter runs of length >= 3 in a line of text.
///
/// Shared by the tokenizer and the line-oriented known-word loader, which
/// both need to pull English words out of mixed-language content.
pub fn letter_runs(text: &str) -> impl Iterator<Item = String> + '_ {
    LETTER_RUN.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Extract the unique normalized words of a text.
///
/// Returns the lowercased ASCII-letter runs of length >= 3, deduplicated
/// and in lexicographic order. Deterministic for identical input.
pub fn extract_unique_words(text: &str) -> Vec<String> {
    let unique: BTreeSet<String> = letter_runs(text).collect();
    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_deduplicates() {
        let words = extract_unique_words("Apple banana Banana cat");
        assert_eq!(words, vec!["apple", "banana", "cat"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let words = extract_unique_words("zebra apple mango");
        assert_eq!(words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_short_runs_and_non_letters_excluded() {
        let words = extract_unique_words("an ox 42 c3po e-mail the-end");
        // "po" from "c3po" is too short; hyphens split runs
        assert_eq!(words, vec!["end", "mail", "the"]);
    }

    #[test]
    fn test_non_ascii_content_ignored() {
        let words = extract_unique_words("你好 apple 翻译 naïve café");
        // Accented characters break the runs; the fragments left over from
        // "naïve" are too short to survive
        assert_eq!(words, vec!["apple", "caf"]);
    }

    #[test]
    fn test_every_entry_matches_token_shape() {
        let text = "It was the best of times, it was the worst of times; 1859 A.D.";
        for word in extract_unique_words(text) {
            assert!(word.len() >= 3, "token too short: {:?}", word);
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "token not normalized: {:?}",
                word
            );
        }
    }

    #[test]
    fn test_idempotent_over_own_output() {
        let first = extract_unique_words("Shall I compare thee to a summer's day?");
        let second = extract_unique_words(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_unique_words("").is_empty());
        assert!(extract_unique_words("a b c 1 2 3 !?").is_empty());
    }
}
