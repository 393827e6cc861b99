use rayon::prelude::*;
use std::collections::HashMap;

/// Vocabulary cap for the fitted vector space. Terms beyond the cap are
/// dropped, keeping the most frequent ones across the corpus.
const MAX_VOCABULARY_TERMS: usize = 1000;

/// Hard cap on how many neighbours a single query may ask for.
pub const MAX_NEIGHBORS: usize = 10;

/// TF-IDF vector space plus brute-force cosine nearest-neighbour search
/// over the property token lists.
///
/// Fitted once from the full catalog and immutable afterwards. The
/// catalog tops out in the hundreds and the vocabulary at a constant, so
/// a linear scan beats maintaining an approximate index structure.
pub struct SimilarityIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// One L2-normalised sparse vector per document, term indices ascending.
    vectors: Vec<Vec<(usize, f64)>>,
}

impl SimilarityIndex {
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|tokens| tokens.iter().flat_map(|token| split_terms(token)).collect())
            .collect();

        let mut document_frequencies: HashMap<String, usize> = HashMap::new();
        let mut corpus_frequencies: HashMap<String, usize> = HashMap::new();
        for terms in &tokenized {
            let mut seen: Vec<&String> = Vec::new();
            for term in terms {
                *corpus_frequencies.entry(term.clone()).or_insert(0) += 1;
                if !seen.contains(&term) {
                    seen.push(term);
                    *document_frequencies.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        // Keep the most frequent terms when over the cap, then index the
        // surviving vocabulary alphabetically so column assignment does
        // not depend on hash-map iteration order.
        let mut terms: Vec<(String, usize)> = corpus_frequencies.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(MAX_VOCABULARY_TERMS);
        let mut selected: Vec<String> = terms.into_iter().map(|(term, _)| term).collect();
        selected.sort();

        let vocabulary: HashMap<String, usize> = selected
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term, index))
            .collect();

        let document_count = tokenized.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = document_frequencies.get(term).copied().unwrap_or(0) as f64;
            idf[index] = ((1.0 + document_count) / (1.0 + df)).ln() + 1.0;
        }

        let vectors = tokenized
            .iter()
            .map(|terms| vectorize(terms, &vocabulary, &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            vectors,
        }
    }

    /// Up to `k` catalog entries closest to the query, ordered by
    /// ascending cosine distance, ties kept in catalog order.
    ///
    /// Out-of-vocabulary query terms contribute nothing; a query with no
    /// known terms sits at distance 1.0 from every document. An index
    /// fitted on an empty catalog always answers with an empty list.
    pub fn nearest(&self, query_tokens: &[String], k: usize) -> Vec<(usize, f64)> {
        if self.vectors.is_empty() {
            return Vec::new();
        }

        let terms: Vec<String> = query_tokens
            .iter()
            .flat_map(|token| split_terms(token))
            .collect();
        let query = vectorize(&terms, &self.vocabulary, &self.idf);

        let mut neighbors: Vec<(usize, f64)> = self
            .vectors
            .par_iter()
            .enumerate()
            .map(|(index, vector)| (index, cosine_distance(&query, vector)))
            .collect();

        neighbors.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        neighbors.truncate(k.min(MAX_NEIGHBORS));
        neighbors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Split a raw token into index terms: lowercase, word characters only,
/// at least two characters, stop words excluded. Underscores survive so
/// compound tokens like `own_transport` stay one term.
fn split_terms(token: &str) -> Vec<String> {
    token
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|term| term.len() > 1 && !is_stop_word(term))
        .map(String::from)
        .collect()
}

/// L2-normalised sparse TF-IDF vector, term indices ascending.
fn vectorize(terms: &[String], vocabulary: &HashMap<String, usize>, idf: &[f64]) -> Vec<(usize, f64)> {
    let mut counts: HashMap<usize, f64> = HashMap::new();
    for term in terms {
        if let Some(&index) = vocabulary.get(term) {
            *counts.entry(index).or_insert(0.0) += 1.0;
        }
    }

    let mut weighted: Vec<(usize, f64)> = counts
        .into_iter()
        .map(|(index, tf)| (index, tf * idf[index]))
        .collect();
    weighted.sort_by_key(|(index, _)| *index);

    let norm = weighted
        .iter()
        .map(|(_, weight)| weight * weight)
        .sum::<f64>()
        .sqrt();
    if norm > 0.0 {
        for (_, weight) in &mut weighted {
            *weight /= norm;
        }
    }

    weighted
}

/// Cosine distance between two normalised sparse vectors. A zero vector
/// on either side yields the maximum distance of 1.0.
fn cosine_distance(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut dot = 0.0;
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    (1.0 - dot).max(0.0)
}

fn is_stop_word(term: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "or", "that", "the", "to", "was", "were", "will", "with", "this",
        "they", "but", "have", "had", "what", "when", "where", "who", "which", "why", "how",
        "all", "each", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
        "too", "very", "can", "just", "should", "now",
    ];
    STOP_WORDS.contains(&term)
}
