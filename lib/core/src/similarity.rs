//! Pairwise similarity scorers.
//!
//! Two independent signals feed the hybrid ranker: a TF-IDF cosine score
//! over the query/candidate term universe, and a character-bigram Dice
//! coefficient computed directly on the normalized strings. The lexical
//! score keeps candidates rankable when their vocabulary does not overlap
//! the query at all, where cosine alone would always be zero.
//!
//! Both functions return a score in [0.0, 1.0] and are total: degenerate
//! inputs (empty documents, zero-norm vectors) score 0.0, never an error.

use ahash::{AHashMap, AHashSet};

use crate::corpus::Corpus;
use crate::tfidf::tfidf;
use crate::vector::Vector;

/// TF-IDF cosine similarity between the query document and one candidate.
///
/// The term universe is the union of the two documents' tokens (not the
/// whole corpus vocabulary), iterated in first-appearance order so both
/// vectors align positionally and repeated calls are byte-deterministic.
#[must_use]
pub fn cosine_score(corpus: &Corpus, candidate_index: usize) -> f32 {
    let query = corpus.query();
    let candidate = corpus.document(candidate_index);

    let mut terms = Vec::with_capacity(query.tokens.len() + candidate.tokens.len());
    let mut seen = AHashSet::new();
    for token in query.tokens.iter().chain(candidate.tokens.iter()) {
        if seen.insert(token.as_str()) {
            terms.push(token.as_str());
        }
    }

    let query_vector = Vector::new(terms.iter().map(|t| tfidf(t, 0, corpus)).collect());
    let candidate_vector = Vector::new(
        terms
            .iter()
            .map(|t| tfidf(t, candidate_index, corpus))
            .collect(),
    );

    query_vector.cosine_similarity(&candidate_vector)
}

/// Dice coefficient over character bigrams of two normalized strings.
///
/// Whitespace is stripped before pairing so word boundaries do not produce
/// bigrams. Bigrams are counted as a multiset. Symmetric. Degenerate cases:
/// either side empty scores 0.0 (empty-vs-empty included), identical
/// non-empty strings score 1.0, and a side shorter than one bigram scores
/// 0.0.
#[must_use]
pub fn lexical_score(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let b: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: AHashMap<(char, char), u32> = AHashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0u32;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    let total_bigrams = (a.len() - 1) + (b.len() - 1);
    2.0 * intersection as f32 / total_bigrams as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;

    #[test]
    fn test_cosine_prefers_overlapping_vocabulary() {
        let corpus = Corpus::build(
            "office chairs and desks",
            &[
                Candidate::new(1, "Office Chairs Direct", "Furniture"),
                Candidate::new(2, "ChipTech", "Electronics"),
            ],
        );
        let furniture = cosine_score(&corpus, 1);
        let electronics = cosine_score(&corpus, 2);
        assert!(furniture > electronics);
        assert!(furniture > 0.0);
        assert_eq!(electronics, 0.0);
    }

    #[test]
    fn test_cosine_bounds() {
        let corpus = Corpus::build(
            "industrial steel pipes",
            &[
                Candidate::new(1, "Steel Pipes Inc", "Industrial"),
                Candidate::new(2, "Fresh Produce", "Food"),
            ],
        );
        for index in 1..corpus.len() {
            let score = cosine_score(&corpus, index);
            assert!((0.0..=1.0 + f32::EPSILON).contains(&score));
        }
    }

    #[test]
    fn test_cosine_empty_candidate_is_zero() {
        let corpus = Corpus::build("office chairs", &[Candidate::new(1, "", "")]);
        assert_eq!(cosine_score(&corpus, 1), 0.0);
    }

    #[test]
    fn test_cosine_deterministic() {
        let corpus = Corpus::build(
            "catering services for events",
            &[Candidate::new(1, "Event Catering Co", "Catering")],
        );
        let first = cosine_score(&corpus, 1);
        for _ in 0..10 {
            assert_eq!(cosine_score(&corpus, 1), first);
        }
    }

    #[test]
    fn test_lexical_identical_strings() {
        assert_eq!(lexical_score("office chairs", "office chairs"), 1.0);
    }

    #[test]
    fn test_lexical_disjoint_strings() {
        assert_eq!(lexical_score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_lexical_symmetric() {
        let ab = lexical_score("office furniture", "furniture supplies");
        let ba = lexical_score("furniture supplies", "office furniture");
        assert_eq!(ab, ba);
        assert!(ab > 0.0 && ab < 1.0);
    }

    #[test]
    fn test_lexical_empty_inputs() {
        assert_eq!(lexical_score("", ""), 0.0);
        assert_eq!(lexical_score("office", ""), 0.0);
        assert_eq!(lexical_score("", "office"), 0.0);
    }

    #[test]
    fn test_lexical_single_char() {
        assert_eq!(lexical_score("a", "ab"), 0.0);
        assert_eq!(lexical_score("a", "a"), 1.0);
    }

    #[test]
    fn test_lexical_ignores_whitespace() {
        // Same character sequence once spaces are stripped.
        assert_eq!(lexical_score("officechairs", "office chairs"), 1.0);
    }

    #[test]
    fn test_lexical_bounds() {
        let pairs = [
            ("office chairs", "officer chair"),
            ("steel pipes", "steel pipes and fittings"),
            ("aaa", "aaaa"),
        ];
        for (a, b) in pairs {
            let score = lexical_score(a, b);
            assert!((0.0..=1.0).contains(&score), "{a} vs {b} -> {score}");
        }
    }
}
