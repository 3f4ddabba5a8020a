use crate::corpus::Recipe;
use std::collections::HashSet;

/// General-purpose English stop words.
const GENERAL_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "because", "as", "until", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should",
    "now", "i", "me", "my", "myself", "we", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "would",
    "could", "might", "must", "shall",
];

/// Domain noise: measurement units, bare numerals (including fraction
/// remnants like "12" left by punctuation stripping of "1/2"), preparation
/// modifiers, connective filler, and text-extraction artifacts carried over
/// from the upstream dump.
const DOMAIN_STOP_WORDS: &[&str] = &[
    // units
    "cup", "cups", "tablespoon", "tablespoons", "teaspoon", "teaspoons", "pound", "pounds",
    "ounce", "ounces",
    // numerals
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "12", "14",
    // modifiers
    "chopped", "cut", "grated", "sliced", "thinly", "finely", "peeled", "large", "fresh",
    // connectors
    "or", "and", "of", "to", "into", "for", "about", "plus",
    // noise tags
    "freesoy", "freetree", "freekosher", "appétit",
];

/// Replaceable stop-word set applied to corpus documents. Lookups expect
/// lowercased tokens.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// The default set: general English stop words plus the domain list.
    pub fn standard() -> Self {
        Self::new(GENERAL_STOP_WORDS.iter().chain(DOMAIN_STOP_WORDS))
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::standard()
    }
}

/// Canonical bag of content words for one recipe: ingredients and categories
/// joined, lowercased, punctuation stripped, stop words removed. Missing
/// fields contribute nothing.
pub fn clean_tokens(recipe: &Recipe, stop_words: &StopWords) -> Vec<String> {
    let mut line = String::new();
    for field in recipe.ingredients.iter().chain(&recipe.categories) {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(field);
    }

    let line = line.to_lowercase();
    let cleaned: String = line
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(ingredients: &[&str], categories: &[&str]) -> Recipe {
        Recipe {
            title: Some("Test".to_string()),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            directions: Vec::new(),
        }
    }

    #[test]
    fn removes_units_numbers_and_modifiers() {
        let recipe = recipe(&["2 cups chopped tomatoes", "1 tablespoon olive oil"], &[]);
        let tokens = clean_tokens(&recipe, &StopWords::standard());
        assert_eq!(tokens, vec!["tomatoes", "olive", "oil"]);
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        let recipe = recipe(&["Basil, (torn)"], &["Italian!"]);
        let tokens = clean_tokens(&recipe, &StopWords::standard());
        assert_eq!(tokens, vec!["basil", "torn", "italian"]);
    }

    #[test]
    fn never_emits_a_stop_word() {
        let stop_words = StopWords::standard();
        let recipe = recipe(
            &["1/2 cup of fresh basil or parsley, finely sliced"],
            &["Bon Appétit", "Soy Free"],
        );
        for token in clean_tokens(&recipe, &stop_words) {
            assert!(!stop_words.contains(&token), "stop word leaked: {token}");
        }
    }

    #[test]
    fn fraction_remnants_are_dropped() {
        // "1/2" loses its slash during punctuation stripping
        let recipe = recipe(&["1/2 cup sugar"], &[]);
        let tokens = clean_tokens(&recipe, &StopWords::standard());
        assert_eq!(tokens, vec!["sugar"]);
    }

    #[test]
    fn missing_fields_yield_empty_tokens() {
        let tokens = clean_tokens(&Recipe::default(), &StopWords::standard());
        assert!(tokens.is_empty());
    }

    #[test]
    fn custom_set_replaces_the_standard_one() {
        let stop_words = StopWords::new(["basil"]);
        let recipe = recipe(&["the basil leaves"], &[]);
        let tokens = clean_tokens(&recipe, &stop_words);
        assert_eq!(tokens, vec!["the", "leaves"]);
    }

    #[test]
    fn extend_adds_configured_words() {
        let mut stop_words = StopWords::standard();
        stop_words.extend(["Kosher"]);
        assert!(stop_words.contains("kosher"));
        assert!(stop_words.contains("cups"));
    }

    #[test]
    fn standard_set_covers_both_lists() {
        let stop_words = StopWords::standard();
        assert!(!stop_words.is_empty());
        assert!(stop_words.len() > 100);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("tablespoons"));
        assert!(stop_words.contains("appétit"));
    }
}
