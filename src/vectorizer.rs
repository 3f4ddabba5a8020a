use crate::corpus::PantryError;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One corpus row: (vocabulary index, weight) pairs in ascending index
/// order, L2-normalized at build time. A document with no surviving
/// vocabulary terms gets an empty row.
pub type SparseRow = Vec<(usize, f64)>;

pub struct CorpusMatrix {
    rows: Vec<SparseRow>,
    dims: usize,
}

impl CorpusMatrix {
    pub fn new(rows: Vec<SparseRow>, dims: usize) -> Self {
        Self { rows, dims }
    }

    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    pub fn row(&self, position: usize) -> &SparseRow {
        &self.rows[position]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of vocabulary dimensions.
    pub fn dims(&self) -> usize {
        self.dims
    }
}

/// Term-weighting model fitted once over the whole corpus and frozen for
/// the rest of the run. Refitting on the same corpus yields the same
/// vocabulary and weights.
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit over all corpus documents and produce the matrix aligned
    /// index-for-index with the input.
    pub fn fit(documents: &[String]) -> Result<(CorpusMatrix, TfidfModel), PantryError> {
        if documents.is_empty() {
            return Err(PantryError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Document frequency per term. BTreeMap keeps the vocabulary in a
        // stable alphabetic order, so dimension assignment is deterministic.
        let mut document_freq: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                *document_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        if document_freq.is_empty() {
            return Err(PantryError::EmptyVocabulary);
        }

        let total = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_freq.len());
        let mut idf = Vec::with_capacity(document_freq.len());
        for (index, (term, freq)) in document_freq.into_iter().enumerate() {
            // Smoothed IDF: ln((1 + N) / (1 + df)) + 1
            idf.push(((1.0 + total) / (1.0 + freq as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        let model = TfidfModel { vocabulary, idf };
        let rows = tokenized.iter().map(|tokens| model.weigh(tokens)).collect();
        let matrix = CorpusMatrix::new(rows, model.idf.len());

        Ok((matrix, model))
    }

    /// Project raw query terms into the fitted vector space.
    ///
    /// Terms are used verbatim: they are joined and run through the model's
    /// own tokenizer, with no domain stop-word filtering. This asymmetry
    /// with the corpus side is deliberate — queries accept casual phrasing
    /// and lean on the model's weighting alone. Terms outside the fitted
    /// vocabulary contribute zero weight; repeated terms raise their term
    /// frequency.
    pub fn project(&self, terms: &[String]) -> Vec<f64> {
        let joined = terms.join(" ");
        let mut vector = vec![0.0; self.idf.len()];

        for token in tokenize(&joined) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += self.idf[index];
            }
        }

        let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }

    /// TF-IDF weights for one document, L2-normalized.
    fn weigh(&self, tokens: &[String]) -> SparseRow {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();

        let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut row {
                *weight /= norm;
            }
        }

        row
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Model-side tokenizer: lowercase, split on non-word characters, keep
/// tokens of two or more characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| s.chars().count() >= 2)
        .map(String::from)
        .collect()
}
