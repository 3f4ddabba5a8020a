use crate::corpus::{PantryError, Recipe};
use crate::normalizer::{clean_tokens, StopWords};
use crate::ranker::rank;
use crate::resolver::{aggregate, resolve};
use crate::vectorizer::{CorpusMatrix, TfidfModel};

/// Fit-once recommendation engine. The term-weighting model and corpus
/// matrix are built at construction and read-only for the rest of the run,
/// so a shared instance is safe to read from many places at once.
pub struct Recommender {
    recipes: Vec<Recipe>,
    titles: Vec<String>,
    model: TfidfModel,
    matrix: CorpusMatrix,
}

impl Recommender {
    pub fn new(recipes: Vec<Recipe>, stop_words: &StopWords) -> Result<Self, PantryError> {
        if recipes.is_empty() {
            return Err(PantryError::EmptyCorpus);
        }

        let documents: Vec<String> = recipes
            .iter()
            .map(|recipe| clean_tokens(recipe, stop_words).join(" "))
            .collect();
        let (matrix, model) = TfidfModel::fit(&documents)?;

        let titles = recipes
            .iter()
            .map(|recipe| recipe.title.clone().unwrap_or_default())
            .collect();

        Ok(Self {
            recipes,
            titles,
            model,
            matrix,
        })
    }

    /// Top recommendations for a list of desired ingredients. Terms may
    /// repeat; repeats raise their weight in the query.
    pub fn by_ingredients(&self, ingredients: &[String]) -> Vec<usize> {
        let query = self.model.project(ingredients);
        rank(&query, &self.matrix, &self.titles)
    }

    /// Top recommendations for a list of liked dish names. Names that
    /// resolve to nothing contribute no signal.
    pub fn by_dishes(&self, dishes: &[String]) -> Vec<usize> {
        let matched = resolve(dishes, &self.titles);
        let query = aggregate(&matched, &self.matrix, &self.titles);
        rank(&query, &self.matrix, &self.titles)
    }

    pub fn recipe(&self, position: usize) -> &Recipe {
        &self.recipes[position]
    }

    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
