use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Recipe {
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub directions: Vec<String>,
}

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Corpus contains no recipes")]
    EmptyCorpus,

    #[error("Corpus has no usable vocabulary after cleaning")]
    EmptyVocabulary,

    #[error("File system error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corpus parsing error: {0}")]
    CorpusError(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    // Load the recipe corpus from a JSON array. The upstream dump contains
    // the occasional null entry; those are dropped.
    pub fn load(&self) -> Result<Vec<Recipe>, PantryError> {
        let content = std::fs::read_to_string(&self.path)?;
        let entries: Vec<Option<Recipe>> = serde_json::from_str(&content)?;
        let recipes: Vec<Recipe> = entries.into_iter().flatten().collect();

        if recipes.is_empty() {
            return Err(PantryError::EmptyCorpus);
        }

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();
        assert_eq!(recipe.title.as_deref(), Some("Toast"));
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.categories.is_empty());
        assert!(recipe.directions.is_empty());
    }

    #[test]
    fn missing_title_is_none() {
        let recipe: Recipe = serde_json::from_str(r#"{"ingredients": ["bread"]}"#).unwrap();
        assert!(recipe.title.is_none());
        assert_eq!(recipe.ingredients, vec!["bread"]);
    }

    #[test]
    fn null_entries_are_dropped() {
        let entries: Vec<Option<Recipe>> =
            serde_json::from_str(r#"[{"title": "Toast"}, null, {"title": "Soup"}]"#).unwrap();
        let recipes: Vec<Recipe> = entries.into_iter().flatten().collect();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1].title.as_deref(), Some("Soup"));
    }
}
