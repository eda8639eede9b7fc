//! Frequency ranking shared by both backends.

use std::collections::HashMap;

use crate::types::Keyword;

/// Rank candidate words by frequency.
///
/// Ties keep first-occurrence order. Relevance is the word's share of all
/// candidates, so relevance scores of the full ranking sum to one.
pub fn rank_keywords<I>(candidates: I, limit: usize) -> Vec<Keyword>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for word in candidates {
        total += 1;
        match index.get(&word) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(word.clone(), order.len());
                order.push((word, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in discovery order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(limit);

    order
        .into_iter()
        .map(|(word, frequency)| Keyword {
            relevance_score: frequency as f64 / total as f64,
            word,
            frequency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ranking_and_ties() {
        let ranked = rank_keywords(
            words(&["budget", "growth", "market", "growth", "budget", "growth"]),
            10,
        );
        let order: Vec<&str> = ranked.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(order, vec!["growth", "budget", "market"]);
        assert_eq!(ranked[0].frequency, 3);
        assert!((ranked[0].relevance_score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_limit_and_totals() {
        let ranked = rank_keywords(words(&["a1", "b2", "c3", "a1"]), 2);
        assert_eq!(ranked.len(), 2);
        let total: usize = ranked.iter().map(|k| k.frequency).sum();
        assert!(total <= 4);
        let relevance: f64 = ranked.iter().map(|k| k.relevance_score).sum();
        assert!(relevance <= 1.0);
    }

    #[test]
    fn test_empty() {
        assert!(rank_keywords(Vec::new(), 10).is_empty());
    }
}
