//! Hybrid ranking of candidate vendors against a tender description.

use std::cmp::Ordering;

use crate::candidate::{Candidate, RankingResult, ScoredCandidate};
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::similarity::{cosine_score, lexical_score};

/// Maximum number of recommendations returned.
pub const TOP_K: usize = 5;

/// Fixed weight of the TF-IDF cosine signal in the combined score.
pub const COSINE_WEIGHT: f32 = 0.5;

/// Fixed weight of the lexical signal in the combined score.
pub const LEXICAL_WEIGHT: f32 = 0.5;

/// Rank candidates by combined textual relevance to the query.
///
/// Builds a fresh corpus, scores every candidate with both signals, combines
/// them at the fixed 50/50 weighting, and returns the top [`TOP_K`] entries
/// sorted descending by combined score. The sort is stable, so candidates
/// with equal scores keep their relative input order.
///
/// # Errors
///
/// [`Error::NoVendors`] when the candidate pool is empty, and
/// [`Error::TenderNotFound`] when the query text normalizes to no tokens.
pub fn rank(query_id: i64, query_text: &str, candidates: &[Candidate]) -> Result<RankingResult> {
    if candidates.is_empty() {
        return Err(Error::NoVendors);
    }

    let corpus = Corpus::build(query_text, candidates);
    if corpus.query().tokens.is_empty() {
        return Err(Error::TenderNotFound(query_id.to_string()));
    }

    let query_text_normalized = corpus.query().normalized_text.clone();

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let doc_index = i + 1;
            let cosine = cosine_score(&corpus, doc_index);
            let lexical = lexical_score(
                &query_text_normalized,
                &corpus.document(doc_index).normalized_text,
            );
            let combined = COSINE_WEIGHT * cosine + LEXICAL_WEIGHT * lexical;
            ScoredCandidate {
                id: candidate.id,
                display_name: candidate.display_name.clone(),
                category: candidate.category.clone(),
                cosine_score: cosine,
                lexical_score: lexical,
                combined_score: combined,
            }
        })
        .collect();

    // Stable sort: ties keep input order.
    scored.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(TOP_K);

    Ok(RankingResult {
        query_id,
        top_k: scored,
    })
}
