//! Per-request document collection.
//!
//! A [`Corpus`] is built fresh for every ranking request and discarded after
//! scoring: document 0 is the tender description, documents 1..N are the
//! candidate vendors in input order. TF-IDF weights are relative to this
//! corpus, so there is nothing to cache across requests.

use ahash::AHashSet;

use crate::candidate::Candidate;
use crate::text::{normalize, tokenize};

/// One document in the scoring corpus.
#[derive(Debug, Clone)]
pub struct Document {
    pub index: usize,
    pub raw_text: String,
    pub normalized_text: String,
    pub tokens: Vec<String>,
}

impl Document {
    fn new(index: usize, raw_text: &str) -> Self {
        let normalized_text = normalize(raw_text);
        let tokens = tokenize(&normalized_text);
        Self {
            index,
            raw_text: raw_text.to_string(),
            normalized_text,
            tokens,
        }
    }

    /// Raw count of `term` in this document.
    #[must_use]
    pub fn term_count(&self, term: &str) -> usize {
        self.tokens.iter().filter(|t| t.as_str() == term).count()
    }

    /// Whether this document's token set contains `term`.
    #[must_use]
    pub fn contains_term(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == term)
    }
}

/// Ordered collection of documents with dense indices starting at 0.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    vocabulary: AHashSet<String>,
}

impl Corpus {
    /// Build a corpus from a tender description and its candidate pool.
    ///
    /// Candidate order is preserved: it is both the tie-break for equal
    /// scores and the index-to-candidate mapping used by the scorers. An
    /// empty pool still builds a single-document corpus; the caller decides
    /// whether that is an error.
    #[must_use]
    pub fn build(query_text: &str, candidates: &[Candidate]) -> Self {
        let mut documents = Vec::with_capacity(candidates.len() + 1);
        documents.push(Document::new(0, query_text));
        for (i, candidate) in candidates.iter().enumerate() {
            documents.push(Document::new(i + 1, &candidate.combined_text));
        }

        let mut vocabulary = AHashSet::new();
        for doc in &documents {
            for token in &doc.tokens {
                vocabulary.insert(token.clone());
            }
        }

        Self {
            documents,
            vocabulary,
        }
    }

    /// The query (tender) document.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &Document {
        &self.documents[0]
    }

    #[inline]
    #[must_use]
    pub fn document(&self, index: usize) -> &Document {
        &self.documents[index]
    }

    #[inline]
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Total number of documents, query included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Union of all documents' token sets.
    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &AHashSet<String> {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Candidate> {
        vec![
            Candidate::new(1, "FurniCo", "Furniture"),
            Candidate::new(2, "ChipTech", "Electronics"),
        ]
    }

    #[test]
    fn test_build_orders_documents() {
        let corpus = Corpus::build("Office chairs and desks", &pool());
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.query().index, 0);
        assert_eq!(corpus.document(1).normalized_text, "furnico furniture");
        assert_eq!(corpus.document(2).normalized_text, "chiptech electronics");
        for (i, doc) in corpus.documents().iter().enumerate() {
            assert_eq!(doc.index, i);
        }
    }

    #[test]
    fn test_build_with_empty_pool() {
        let corpus = Corpus::build("anything", &[]);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.query().tokens, vec!["anything"]);
    }

    #[test]
    fn test_vocabulary_is_union() {
        let corpus = Corpus::build("office chairs", &pool());
        let vocab = corpus.vocabulary();
        for term in [
            "office",
            "chairs",
            "furnico",
            "furniture",
            "chiptech",
            "electronics",
        ] {
            assert!(vocab.contains(term), "missing {term}");
        }
        assert_eq!(vocab.len(), 6);
    }

    #[test]
    fn test_term_count() {
        let corpus = Corpus::build("steel steel bolts", &[]);
        assert_eq!(corpus.query().term_count("steel"), 2);
        assert_eq!(corpus.query().term_count("bolts"), 1);
        assert_eq!(corpus.query().term_count("absent"), 0);
    }
}
