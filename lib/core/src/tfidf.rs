//! TF-IDF weighting over a per-request corpus.
//!
//! Term frequency is the raw count of the term in the document (documents
//! here are short and similarly sized, so no length normalization). Inverse
//! document frequency is the unsmoothed `ln(N / df)`: a term present in every
//! document weighs zero, and a term absent from the corpus is defined to
//! weigh zero rather than dividing by zero.

use crate::corpus::Corpus;

/// Number of corpus documents whose token set contains `term`.
#[must_use]
pub fn document_frequency(term: &str, corpus: &Corpus) -> usize {
    corpus
        .documents()
        .iter()
        .filter(|doc| doc.contains_term(term))
        .count()
}

/// Unsmoothed inverse document frequency: `ln(total_docs / df)`.
///
/// `df == 0` yields 0.0; `df == total_docs` yields 0.0 naturally.
#[must_use]
pub fn inverse_document_frequency(term: &str, corpus: &Corpus) -> f32 {
    let df = document_frequency(term, corpus);
    if df == 0 {
        return 0.0;
    }
    (corpus.len() as f32 / df as f32).ln()
}

/// TF-IDF weight of `term` in the document at `doc_index`.
///
/// Weights are corpus-relative: the same term in the same document gets a
/// different weight under a different candidate pool.
#[must_use]
pub fn tfidf(term: &str, doc_index: usize, corpus: &Corpus) -> f32 {
    let tf = corpus.document(doc_index).term_count(term) as f32;
    tf * inverse_document_frequency(term, corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;

    fn corpus() -> Corpus {
        // doc 0: "office chairs office"
        // doc 1: "chairs direct furniture"
        // doc 2: "chiptech electronics"
        Corpus::build(
            "office chairs office",
            &[
                Candidate::new(1, "Chairs Direct", "Furniture"),
                Candidate::new(2, "ChipTech", "Electronics"),
            ],
        )
    }

    #[test]
    fn test_document_frequency() {
        let c = corpus();
        assert_eq!(document_frequency("chairs", &c), 2);
        assert_eq!(document_frequency("office", &c), 1);
        assert_eq!(document_frequency("absent", &c), 0);
    }

    #[test]
    fn test_idf_absent_term_is_zero() {
        let c = corpus();
        assert_eq!(inverse_document_frequency("absent", &c), 0.0);
    }

    #[test]
    fn test_idf_ubiquitous_term_is_zero() {
        let c = Corpus::build(
            "steel",
            &[
                Candidate::new(1, "Steel", "Works"),
                Candidate::new(2, "Steel", "Mills"),
            ],
        );
        assert!(inverse_document_frequency("steel", &c).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tfidf_scales_with_raw_count() {
        let c = corpus();
        // "office" appears twice in doc 0 and nowhere else.
        let expected = 2.0 * (3.0f32 / 1.0).ln();
        assert!((tfidf("office", 0, &c) - expected).abs() < 1e-6);
        assert_eq!(tfidf("office", 1, &c), 0.0);
    }

    #[test]
    fn test_tfidf_is_corpus_relative() {
        let narrow = Corpus::build("office chairs", &[Candidate::new(1, "Chairs", "Direct")]);
        let wide = Corpus::build(
            "office chairs",
            &[
                Candidate::new(1, "Chairs", "Direct"),
                Candidate::new(2, "ChipTech", "Electronics"),
            ],
        );
        // "chairs" is in every document of the narrow corpus but not the wide one.
        assert_eq!(tfidf("chairs", 0, &narrow), 0.0);
        assert!(tfidf("chairs", 0, &wide) > 0.0);
    }
}
