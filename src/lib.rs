//! # vendx
//!
//! Vendor recommendation engine for procurement tenders.
//!
//! Given a tender's free-text description and a pool of candidate vendor
//! profiles, vendx ranks the vendors by textual relevance and serves the top
//! five matches over HTTP. The ranking combines two signals at fixed equal
//! weight: TF-IDF cosine similarity over a per-request corpus, and a
//! character-bigram lexical similarity that keeps vendors rankable when
//! their vocabulary does not overlap the tender's at all.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! vendx --seed-file data/seed.json --http-port 8080
//! curl localhost:8080/recommend-vendors/1
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use vendx::prelude::*;
//!
//! let candidates = vec![
//!     Candidate::new(1, "FurniCo Office Chairs", "Furniture"),
//!     Candidate::new(2, "ChipTech", "Electronics"),
//! ];
//!
//! let result = rank(42, "Office chairs and desks", &candidates).unwrap();
//! assert_eq!(result.top_k[0].id, 1);
//! ```
//!
//! ## Crate Structure
//!
//! vendx is composed of several crates:
//!
//! - `vendx-core` - the pure scoring engine (normalization, corpus, TF-IDF,
//!   similarity, hybrid ranking)
//! - `vendx-store` - tender/vendor store contracts and the seeded in-memory
//!   implementation
//! - `vendx-api` - the actix-web REST surface

// Re-export core types
pub use vendx_core::{
    rank, Candidate, Corpus, Document, Error, RankingResult, Result, ScoredCandidate, Vector,
    COSINE_WEIGHT, LEXICAL_WEIGHT, TOP_K,
};

// Re-export stores
pub use vendx_store::{InMemoryStore, SeedData, Tender, TenderStore, VendorRecord, VendorStore};

// Re-export API
pub use vendx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        rank, Candidate, Corpus, Error, InMemoryStore, RankingResult, Result, RestApi,
        ScoredCandidate, SeedData, Tender, TenderStore, VendorRecord, VendorStore, TOP_K,
    };
}
