//! # vendx Store
//!
//! Store collaborators for the vendx recommendation engine.
//!
//! The engine consumes two lookup contracts: a [`TenderStore`] that resolves
//! a tender id to its description, and a [`VendorStore`] that lists the
//! candidate pool. The production system backs both with a relational
//! database; [`InMemoryStore`] is the bundled implementation, seeded from a
//! JSON file at startup.

pub mod memory;

use vendx_core::Candidate;

pub use memory::{InMemoryStore, SeedData, Tender, VendorRecord};

/// Lookup of tender descriptions by id.
pub trait TenderStore: Send + Sync {
    /// The tender's free-text description, or `None` when no such tender
    /// exists.
    fn get_tender_description(&self, tender_id: i64) -> Option<String>;
}

/// Listing of candidate vendors.
pub trait VendorStore: Send + Sync {
    /// All candidates, in a stable order. The order is significant: it is
    /// the tie-break for equal ranking scores.
    fn list_candidates(&self) -> Vec<Candidate>;
}
