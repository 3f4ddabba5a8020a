use crate::vectorizer::CorpusMatrix;
use std::collections::HashSet;

/// Minimum similarity ratio for a dish name to count as a title match.
pub const MATCH_THRESHOLD: f64 = 0.5;

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.copy_from_slice(&curr);
    }

    prev[b_chars.len()]
}

/// Normalized edit-distance similarity in [0, 1]. Identical strings score
/// 1.0, including the empty pair.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Resolve free-text dish names against the corpus titles. Each name takes
/// at most its single best match at or above [`MATCH_THRESHOLD`]; names
/// matching nothing are silently dropped. Matched titles come back
/// case-folded. Untitled corpus entries are never candidates.
pub fn resolve(dish_names: &[String], titles: &[String]) -> HashSet<String> {
    let candidates: Vec<String> = titles
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect();

    let mut matched = HashSet::new();
    for name in dish_names {
        let name = name.to_lowercase();
        let mut best: Option<(f64, &str)> = None;
        for title in &candidates {
            let ratio = similarity_ratio(&name, title);
            if ratio >= MATCH_THRESHOLD && best.map_or(true, |(score, _)| ratio > score) {
                best = Some((ratio, title));
            }
        }
        if let Some((_, title)) = best {
            matched.insert(title.to_string());
        }
    }

    matched
}

/// Element-wise mean of the corpus rows whose case-folded title is in the
/// matched set. Every position carrying a matched title contributes. An
/// empty matched set yields the zero vector.
pub fn aggregate(matched: &HashSet<String>, matrix: &CorpusMatrix, titles: &[String]) -> Vec<f64> {
    let mut vector = vec![0.0; matrix.dims()];
    let mut contributors = 0usize;

    for (position, title) in titles.iter().enumerate() {
        if title.is_empty() || !matched.contains(&title.to_lowercase()) {
            continue;
        }
        for &(index, weight) in matrix.row(position) {
            vector[index] += weight;
        }
        contributors += 1;
    }

    if contributors > 0 {
        for weight in &mut vector {
            *weight /= contributors as f64;
        }
    }

    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::TfidfModel;

    fn titled(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|s| s.to_string()).collect()
    }

    fn named(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_strings_score_one() {
        assert!((similarity_ratio("tomato soup", "tomato soup") - 1.0).abs() < 1e-12);
        assert!((similarity_ratio("", "") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert!(similarity_ratio("xyz completely unrelated", "tomato soup") < MATCH_THRESHOLD);
    }

    #[test]
    fn misspelled_dish_resolves_to_closest_title() {
        let titles = titled(&["Tomato Soup", "Tomato Salad"]);
        let matched = resolve(&named(&["tomatoe soupp"]), &titles);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains("tomato soup"));
    }

    #[test]
    fn each_name_takes_at_most_one_match() {
        let titles = titled(&["Tomato Soup", "Tomato Soupe"]);
        let matched = resolve(&named(&["tomato soup"]), &titles);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains("tomato soup"));
    }

    #[test]
    fn names_below_threshold_are_dropped() {
        let titles = titled(&["Tomato Soup"]);
        let matched = resolve(&named(&["xyz completely unrelated"]), &titles);
        assert!(matched.is_empty());
    }

    #[test]
    fn untitled_entries_are_not_candidates() {
        let titles = titled(&["", "Tomato Soup"]);
        let matched = resolve(&named(&["tomato soup"]), &titles);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains("tomato soup"));
    }

    #[test]
    fn aggregate_of_a_single_match_is_that_row() {
        let corpus = vec!["tomato cream salt".to_string(), "tomato basil oil".to_string()];
        let (matrix, _) = TfidfModel::fit(&corpus).unwrap();
        let titles = titled(&["Tomato Soup", "Tomato Salad"]);

        let matched: HashSet<String> = ["tomato soup".to_string()].into_iter().collect();
        let vector = aggregate(&matched, &matrix, &titles);

        for &(index, weight) in matrix.row(0) {
            assert!((vector[index] - weight).abs() < 1e-12);
        }
    }

    #[test]
    fn aggregate_of_empty_set_is_the_zero_vector() {
        let corpus = vec!["tomato cream".to_string(), "tomato basil".to_string()];
        let (matrix, _) = TfidfModel::fit(&corpus).unwrap();
        let titles = titled(&["Tomato Soup", "Tomato Salad"]);

        let vector = aggregate(&HashSet::new(), &matrix, &titles);
        assert_eq!(vector.len(), matrix.dims());
        assert!(vector.iter().all(|w| *w == 0.0));
    }

    #[test]
    fn every_position_with_a_matched_title_contributes() {
        let corpus = vec!["tomato cream".to_string(), "tomato basil".to_string()];
        let (matrix, _) = TfidfModel::fit(&corpus).unwrap();
        // both corpus entries carry the same title
        let titles = titled(&["Tomato Soup", "Tomato Soup"]);

        let matched: HashSet<String> = ["tomato soup".to_string()].into_iter().collect();
        let vector = aggregate(&matched, &matrix, &titles);

        let mut expected = vec![0.0; matrix.dims()];
        for position in 0..2 {
            for &(index, weight) in matrix.row(position) {
                expected[index] += weight / 2.0;
            }
        }
        for (got, want) in vector.iter().zip(&expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }
}
