//! In-memory store for TrizHub
//!
//! Provides:
//! - The `Store`: reference data plus `RwLock`-guarded record collections
//! - Seed fixtures for the sample data set
//! - Repository pattern for data access

pub mod fixtures;
mod repository;

pub use repository::{PatentQuery, Repository, SortOrder, StoreStats};

use crate::models::{Citation, Patent, PatentAnalysis};
use crate::triz::TrizReference;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Record collections behind the store lock.
///
/// Plain vectors with linear scans: the store holds a demo-scale data set
/// and list ordering (insertion order for "relevance") must be stable.
#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub patents: Vec<Patent>,
    pub analyses: Vec<PatentAnalysis>,
    pub citations: Vec<Citation>,
}

/// The in-memory system of record
pub struct Store {
    reference: TrizReference,
    pub(crate) inner: RwLock<StoreInner>,
}

impl Store {
    /// Create an empty store (reference data only)
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            reference: TrizReference::builtin(),
            inner: RwLock::new(StoreInner::default()),
        })
    }

    /// Create a store seeded with the sample patents, analyses, and citations
    pub fn seeded() -> Arc<Self> {
        let store = Self::empty();
        let (patents, analyses, citations) = fixtures::sample_records();

        {
            // try_write cannot fail here: the store has not been shared yet
            let mut inner = store
                .inner
                .try_write()
                .expect("store lock uncontended at seed time");
            inner.patents = patents;
            inner.analyses = analyses;
            inner.citations = citations;
        }

        tracing::info!("Store seeded with sample data");
        store
    }

    /// The TRIZ reference data
    pub fn reference(&self) -> &TrizReference {
        &self.reference
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
