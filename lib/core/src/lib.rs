//! # vendx Core
//!
//! Core scoring engine for the vendx vendor-recommendation service.
//!
//! This crate provides the pure computation behind a recommendation: text
//! normalization, per-request corpus construction, TF-IDF weighting, cosine
//! and lexical similarity, and the hybrid ranker that combines them.
//!
//! Everything here is request-scoped: a [`Corpus`] and its scores are built
//! fresh from the inputs of one call and dropped on return, so concurrent
//! requests never share state and no locks are needed.
//!
//! ## Example
//!
//! ```rust
//! use vendx_core::{rank, Candidate};
//!
//! let candidates = vec![
//!     Candidate::new(1, "FurniCo Office Chairs", "Furniture"),
//!     Candidate::new(2, "ChipTech", "Electronics"),
//! ];
//!
//! let result = rank(42, "Office chairs and desks", &candidates).unwrap();
//! assert_eq!(result.top_k[0].id, 1);
//! ```

pub mod candidate;
pub mod corpus;
pub mod error;
pub mod ranker;
pub mod similarity;
pub mod text;
pub mod tfidf;
pub mod vector;

pub use candidate::{Candidate, RankingResult, ScoredCandidate};
pub use corpus::{Corpus, Document};
pub use error::{Error, Result};
pub use ranker::{rank, COSINE_WEIGHT, LEXICAL_WEIGHT, TOP_K};
pub use similarity::{cosine_score, lexical_score};
pub use text::{normalize, tokenize};
pub use tfidf::tfidf;
pub use vector::Vector;
