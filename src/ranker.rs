use crate::vectorizer::CorpusMatrix;
use std::collections::HashSet;

/// Upper bound on returned recommendations.
pub const TOP_K: usize = 5;

/// Cosine similarity between a sparse corpus row and a dense query vector.
/// Defined as 0.0 when either side has zero magnitude, so degenerate
/// documents and queries rank below everything instead of failing.
pub fn cosine_similarity(row: &[(usize, f64)], query: &[f64]) -> f64 {
    let dot: f64 = row.iter().map(|&(index, weight)| weight * query[index]).sum();
    let row_norm: f64 = row.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    let query_norm: f64 = query.iter().map(|q| q * q).sum::<f64>().sqrt();

    if row_norm == 0.0 || query_norm == 0.0 {
        return 0.0;
    }

    dot / (row_norm * query_norm)
}

/// Score every corpus row against the query and return up to [`TOP_K`]
/// positions, best first, unique by case-folded trimmed title. Untitled
/// recipes share one dedup bucket. Ties keep corpus order.
pub fn rank(query: &[f64], matrix: &CorpusMatrix, titles: &[String]) -> Vec<usize> {
    let mut scored: Vec<(usize, f64)> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(position, row)| (position, cosine_similarity(row, query)))
        .collect();

    // Stable sort: equal scores stay in corpus order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    for (position, _) in scored {
        if seen.insert(titles[position].trim().to_lowercase()) {
            positions.push(position);
            if positions.len() == TOP_K {
                break;
            }
        }
    }

    positions
}
