use crate::corpus::Recipe;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub struct SearchEngine;

impl SearchEngine {
    /// Score corpus titles against the query, best first. Returns corpus
    /// positions with their relevance scores; untitled recipes never match.
    pub fn search(query: &str, recipes: &[Recipe]) -> Vec<(i64, usize)> {
        let matcher = SkimMatcherV2::default();
        let mut results = Vec::new();

        for (position, recipe) in recipes.iter().enumerate() {
            let Some(title) = recipe.title.as_deref() else {
                continue;
            };
            if let Some(score) = matcher.fuzzy_match(title, query) {
                results.push((score, position));
            }
        }

        // Sort by relevance (descending)
        results.sort_by(|a, b| b.0.cmp(&a.0));
        results
    }
}
