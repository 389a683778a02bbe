use tracing::debug;

use crate::config::ExclusionConfig;
use crate::refsets::ReferenceSets;
use crate::translate::Translation;

/// Removes (word, translation) pairs matching any enabled exclusion
/// category. A pair is dropped as soon as one enabled rule matches; with
/// every category disabled the input passes through unchanged.
pub struct PostFilter<'a> {
    config: &'a ExclusionConfig,
    sets: &'a ReferenceSets,
}

impl<'a> PostFilter<'a> {
    pub fn new(config: &'a ExclusionConfig, sets: &'a ReferenceSets) -> Self {
        Self { config, sets }
    }

    fn should_drop(&self, word: &str, translation: &Translation) -> bool {
        let rules: &[(bool, &dyn Fn() -> bool)] = &[
            (self.config.rm_names, &|| self.sets.is_personal_name(word)),
            (self.config.rm_places, &|| self.sets.is_place_name(word)),
            (self.config.rm_fillers, &|| self.sets.is_filler_word(word)),
            (self.config.rm_failed, &|| translation.is_failed()),
            (self.config.rm_useless, &|| {
                word.len() <= 2 || self.sets.is_useless_word(word)
            }),
        ];

        rules.iter().any(|(enabled, matches)| *enabled && matches())
    }

    /// Filter parallel word/translation pairs, preserving input order.
    pub fn apply(&self, pairs: Vec<(String, Translation)>) -> Vec<(String, Translation)> {
        let before = pairs.len();
        let kept: Vec<_> = pairs
            .into_iter()
            .filter(|(word, translation)| !self.should_drop(word, translation))
            .collect();
        debug!("Exclusion rules dropped {} of {} pairs", before - kept.len(), before);
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(words: &[&str]) -> Vec<(String, Translation)> {
        words
            .iter()
            .map(|w| (w.to_string(), Translation::Text(format!("{}-zh", w))))
            .collect()
    }

    fn words_of(pairs: &[(String, Translation)]) -> Vec<String> {
        pairs.iter().map(|(w, _)| w.clone()).collect()
    }

    #[test]
    fn test_all_disabled_returns_input_unchanged() {
        let config = ExclusionConfig::disabled();
        let sets = ReferenceSets::builtin();
        let filter = PostFilter::new(&config, &sets);

        let input = pairs(&["james", "london", "the", "zz", "ephemeral"]);
        let output = filter.apply(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_place_names_dropped_when_enabled() {
        let config = ExclusionConfig::default();
        let sets = ReferenceSets::builtin();
        let filter = PostFilter::new(&config, &sets);

        let input = vec![("london".to_string(), Translation::Text("伦敦".to_string()))];
        assert!(filter.apply(input).is_empty());
    }

    #[test]
    fn test_failed_translation_dropped_only_when_enabled() {
        let sets = ReferenceSets::builtin();
        let input = vec![("xyzzy".to_string(), Translation::Failed)];

        let enabled = ExclusionConfig::default();
        assert!(PostFilter::new(&enabled, &sets).apply(input.clone()).is_empty());

        let mut disabled = ExclusionConfig::disabled();
        disabled.rm_useless = true; // unrelated category stays out of the way
        let kept = PostFilter::new(&disabled, &sets).apply(input);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].1.is_failed());
    }

    #[test]
    fn test_short_words_dropped_by_useless_rule() {
        let mut config = ExclusionConfig::disabled();
        config.rm_useless = true;
        let sets = ReferenceSets::builtin();
        let filter = PostFilter::new(&config, &sets);

        let output = filter.apply(pairs(&["ab", "ing", "ephemeral"]));
        assert_eq!(words_of(&output), vec!["ephemeral"]);
    }

    #[test]
    fn test_categories_compose_with_or() {
        let config = ExclusionConfig::default();
        let sets = ReferenceSets::builtin();
        let filter = PostFilter::new(&config, &sets);

        // One word per category plus two survivors
        let mut input = pairs(&["james", "paris", "actually", "sonorous"]);
        input.push(("xyzzy".to_string(), Translation::Failed));
        input.push(("halcyon".to_string(), Translation::Text("宁静的".to_string())));

        let output = filter.apply(input);
        assert_eq!(words_of(&output), vec!["sonorous", "halcyon"]);
    }

    #[test]
    fn test_order_preserved_as_subsequence() {
        let mut config = ExclusionConfig::disabled();
        config.rm_fillers = true;
        let sets = ReferenceSets::builtin();
        let filter = PostFilter::new(&config, &sets);

        let input = pairs(&["zenith", "the", "meridian", "and", "azimuth"]);
        let output = filter.apply(input);
        assert_eq!(words_of(&output), vec!["zenith", "meridian", "azimuth"]);
    }

    #[test]
    fn test_injected_sets_are_honored() {
        use std::collections::HashSet;

        let only_name: HashSet<String> = ["zaphod".to_string()].into_iter().collect();
        let sets = ReferenceSets::new(
            only_name,
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
        );
        let config = ExclusionConfig::default();
        let filter = PostFilter::new(&config, &sets);

        let output = filter.apply(pairs(&["zaphod", "james"]));
        // "james" passes because the injected personal-name set replaced the
        // built-in one
        assert_eq!(words_of(&output), vec!["james"]);
    }
}
