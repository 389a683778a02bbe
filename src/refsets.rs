//! Fixed reference word sets consumed by the exclusion rules.
//!
//! The sets are built once per run and stay read-only afterwards. They are
//! passed into the post-filter rather than accessed as globals so tests can
//! substitute smaller sets.

use std::collections::HashSet;

// Common English given names and surnames that show up capitalized in prose
// and survive lowercasing into the candidate list.
const PERSONAL_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard",
    "joseph", "thomas", "charles", "christopher", "daniel", "matthew",
    "anthony", "donald", "mark", "paul", "steven", "andrew", "kenneth",
    "george", "joshua", "kevin", "brian", "edward", "ronald", "timothy",
    "jason", "jeffrey", "ryan", "jacob", "gary", "nicholas", "eric",
    "jonathan", "stephen", "larry", "justin", "scott", "brandon", "benjamin",
    "samuel", "frank", "gregory", "raymond", "alexander", "patrick", "jack",
    "dennis", "jerry", "mary", "patricia", "jennifer", "linda", "elizabeth",
    "barbara", "susan", "jessica", "sarah", "karen", "nancy", "lisa",
    "margaret", "betty", "sandra", "ashley", "dorothy", "kimberly", "emily",
    "donna", "michelle", "carol", "amanda", "melissa", "deborah", "stephanie",
    "rebecca", "laura", "sharon", "cynthia", "kathleen", "amy", "shirley",
    "angela", "helen", "anna", "brenda", "pamela", "nicole", "emma",
    "catherine", "christine", "samantha", "rachel", "janet", "carolyn",
    "maria", "diana", "alice", "julia", "smith", "johnson", "brown",
    "wilson", "taylor", "anderson", "jackson", "harris", "martin",
    "thompson", "garcia", "martinez", "robinson", "clark", "lewis", "lee",
    "walker", "hall", "allen", "young", "hernandez", "king", "wright",
    "lopez", "hill", "holmes", "watson", "darcy", "bennet", "potter",
    "hermione", "sherlock", "gatsby", "hamlet", "othello", "romeo",
    "juliet",
];

// Countries, capitals, and other place names frequent in English text.
const PLACE_NAMES: &[&str] = &[
    "america", "american", "england", "english", "britain", "british",
    "london", "paris", "france", "french", "germany", "german", "berlin",
    "italy", "italian", "rome", "spain", "spanish", "madrid", "china",
    "chinese", "beijing", "shanghai", "japan", "japanese", "tokyo", "korea",
    "korean", "seoul", "india", "indian", "delhi", "russia", "russian",
    "moscow", "canada", "canadian", "toronto", "australia", "australian",
    "sydney", "brazil", "brazilian", "mexico", "mexican", "egypt",
    "egyptian", "greece", "greek", "athens", "turkey", "turkish", "europe",
    "european", "africa", "african", "asia", "asian", "york", "boston",
    "chicago", "washington", "california", "texas", "florida", "seattle",
    "vienna", "amsterdam", "dublin", "edinburgh", "oxford", "cambridge",
    "manchester", "liverpool", "scotland", "scottish", "ireland", "irish",
    "wales", "welsh", "atlantic", "pacific", "mediterranean", "himalaya",
    "amazon", "sahara", "arctic", "antarctica",
];

// Function and discourse words; grammatically necessary, never worth a
// flashcard.
const FILLER_WORDS: &[&str] = &[
    "the", "and", "but", "for", "nor", "yet", "with", "from", "into",
    "onto", "upon", "about", "above", "below", "under", "over", "between",
    "through", "during", "before", "after", "again", "then", "than", "that",
    "this", "these", "those", "there", "here", "where", "when", "which",
    "what", "who", "whom", "whose", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "not", "only",
    "own", "same", "too", "very", "can", "will", "just", "should", "would",
    "could", "shall", "might", "must", "may", "have", "has", "had", "does",
    "did", "are", "was", "were", "been", "being", "his", "her", "its",
    "our", "their", "your", "they", "them", "she", "him", "you", "also",
    "well", "indeed", "anyway", "actually", "basically", "literally",
    "really", "perhaps", "maybe", "okay", "yeah", "hmm", "umm", "etc",
];

// Letter-run fragments that pass the alphabetic check but carry no meaning:
// the candidate-filter blacklist plus suffix shards left behind by OCR
// hyphenation splits.
const USELESS_WORDS: &[&str] = &[
    "aa", "qi", "xi", "za", "zz", "xx", "ll", "rn", "iii", "ing", "ion",
    "tion", "ness", "ment", "est", "ted", "ers", "ies", "ily", "ould",
    "ough", "www", "http", "https", "com", "org", "pdf", "png", "jpg",
];

/// The fixed reference sets used by the post-translation exclusion rules.
pub struct ReferenceSets {
    personal_names: HashSet<String>,
    place_names: HashSet<String>,
    filler_words: HashSet<String>,
    useless_words: HashSet<String>,
}

impl ReferenceSets {
    /// Build the built-in reference sets.
    pub fn builtin() -> Self {
        Self::new(
            PERSONAL_NAMES.iter().map(|w| w.to_string()).collect(),
            PLACE_NAMES.iter().map(|w| w.to_string()).collect(),
            FILLER_WORDS.iter().map(|w| w.to_string()).collect(),
            USELESS_WORDS.iter().map(|w| w.to_string()).collect(),
        )
    }

    /// Build reference sets from explicit word collections.
    pub fn new(
        personal_names: HashSet<String>,
        place_names: HashSet<String>,
        filler_words: HashSet<String>,
        useless_words: HashSet<String>,
    ) -> Self {
        Self {
            personal_names,
            place_names,
            filler_words,
            useless_words,
        }
    }

    pub fn is_personal_name(&self, word: &str) -> bool {
        self.personal_names.contains(word)
    }

    pub fn is_place_name(&self, word: &str) -> bool {
        self.place_names.contains(word)
    }

    pub fn is_filler_word(&self, word: &str) -> bool {
        self.filler_words.contains(word)
    }

    pub fn is_useless_word(&self, word: &str) -> bool {
        self.useless_words.contains(word)
    }
}

impl Default for ReferenceSets {
    fn default() -> Self {
        Self::builtin()
    }
}
