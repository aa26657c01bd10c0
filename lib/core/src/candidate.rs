use serde::{Deserialize, Serialize};

/// A vendor profile being scored against a tender description.
///
/// Read-only input to the engine, produced by the vendor store. The
/// `combined_text` is the document text the vendor contributes to the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: i64,
    pub display_name: String,
    pub category: String,
    pub combined_text: String,
}

impl Candidate {
    #[must_use]
    pub fn new(id: i64, display_name: impl Into<String>, category: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let category = category.into();
        let combined_text = format!("{} {}", display_name, category);
        Self {
            id,
            display_name,
            category,
            combined_text,
        }
    }
}

/// A candidate with its computed relevance signals attached.
///
/// All scores are in `[0, 1]`. Ordering is a property of the output list the
/// ranker produces, not of the entity itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: i64,
    pub display_name: String,
    pub category: String,
    pub cosine_score: f32,
    pub lexical_score: f32,
    pub combined_score: f32,
}

/// Final ranking for one tender: at most the top five candidates, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResult {
    pub query_id: i64,
    pub top_k: Vec<ScoredCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text_concatenation() {
        let c = Candidate::new(7, "FurniCo", "Furniture");
        assert_eq!(c.combined_text, "FurniCo Furniture");
    }
}
