use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use vendx_core::{Candidate, Error, Result};

use crate::{TenderStore, VendorStore};

/// A tender row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tender {
    pub id: i64,
    pub description: String,
}

/// A vendor row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorRecord {
    pub id: i64,
    pub company_name: String,
    pub category: String,
}

/// Seed-file schema: the rows loaded into an [`InMemoryStore`] at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub tenders: Vec<Tender>,
    #[serde(default)]
    pub vendors: Vec<VendorRecord>,
}

/// Thread-safe in-memory tender/vendor store.
///
/// Vendors are kept in insertion order because listing order is the ranking
/// tie-break. Inserting a tender with an existing id replaces it; inserting
/// a vendor with an existing id replaces it in place.
#[derive(Debug)]
pub struct InMemoryStore {
    tenders: RwLock<HashMap<i64, Tender>>,
    vendors: RwLock<Vec<VendorRecord>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tenders: RwLock::new(HashMap::new()),
            vendors: RwLock::new(Vec::new()),
        }
    }

    /// Load a store from a JSON seed file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let seed: SeedData =
            serde_json::from_str(&contents).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Self::from_seed(seed))
    }

    #[must_use]
    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        for tender in seed.tenders {
            store.insert_tender(tender);
        }
        for vendor in seed.vendors {
            store.insert_vendor(vendor);
        }
        store
    }

    pub fn insert_tender(&self, tender: Tender) {
        self.tenders.write().insert(tender.id, tender);
    }

    pub fn insert_vendor(&self, vendor: VendorRecord) {
        let mut vendors = self.vendors.write();
        if let Some(existing) = vendors.iter_mut().find(|v| v.id == vendor.id) {
            *existing = vendor;
        } else {
            vendors.push(vendor);
        }
    }

    #[must_use]
    pub fn tender_count(&self) -> usize {
        self.tenders.read().len()
    }

    #[must_use]
    pub fn vendor_count(&self) -> usize {
        self.vendors.read().len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TenderStore for InMemoryStore {
    fn get_tender_description(&self, tender_id: i64) -> Option<String> {
        self.tenders
            .read()
            .get(&tender_id)
            .map(|t| t.description.clone())
    }
}

impl VendorStore for InMemoryStore {
    fn list_candidates(&self) -> Vec<Candidate> {
        self.vendors
            .read()
            .iter()
            .map(|v| Candidate::new(v.id, v.company_name.as_str(), v.category.as_str()))
            .collect()
    }
}
