use crate::corpus::PantryError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PantryConfig {
    /// JSON file holding the recipe corpus.
    pub corpus_path: String,
    /// Extra stop words merged into the standard set before indexing.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

// Default configuration if file is missing
impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            corpus_path: "full_format_recipes.json".to_string(),
            extra_stop_words: Vec::new(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join("config.toml"),
        }
    }

    // Load config or create default if missing
    pub async fn load(&self) -> Result<PantryConfig, PantryError> {
        if !self.path.exists() {
            let default_config = PantryConfig::default();
            self.save(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path).await?;
        toml::from_str(&content).map_err(PantryError::ParseError)
    }

    pub async fn save(&self, config: &PantryConfig) -> Result<(), PantryError> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

        fs::write(&self.path, content).await?;
        Ok(())
    }
}
