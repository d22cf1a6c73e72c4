//! Read-only claim dataset

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use core_kernel::{Claim, ClaimId};

use crate::error::LoadError;

/// Top-level shape of the source document: `{ "claims": [...] }`
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    claims: Vec<Claim>,
}

/// The immutable claim dataset
///
/// Created once from an external source and read-only thereafter. All query
/// and aggregation operations borrow the claim slice; nothing mutates it, so
/// concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    claims: Vec<Claim>,
}

impl DatasetStore {
    /// Loads the dataset from a JSON file on disk
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading claim dataset");
        let file = File::open(path)?;
        Self::load_reader(BufReader::new(file))
    }

    /// Loads the dataset from any reader producing the source document
    pub fn load_reader(reader: impl Read) -> Result<Self, LoadError> {
        let document: DatasetDocument = serde_json::from_reader(reader)?;
        Self::from_claims(document.claims)
    }

    /// Parses the dataset from an in-memory JSON document
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document: DatasetDocument = serde_json::from_str(json)?;
        Self::from_claims(document.claims)
    }

    /// Builds a store from already-decoded claims, enforcing the boundary invariants
    pub fn from_claims(claims: Vec<Claim>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(claims.len());
        for claim in &claims {
            if claim.claim_id.as_str().trim().is_empty() {
                return Err(LoadError::InvalidRecord {
                    claim_id: claim.claim_id.to_string(),
                    reason: "claim id must not be blank".to_string(),
                });
            }
            if !seen.insert(claim.claim_id.clone()) {
                return Err(LoadError::DuplicateClaimId(claim.claim_id.to_string()));
            }
            if !claim.area_claimed_hectares.is_finite() || claim.area_claimed_hectares < 0.0 {
                return Err(LoadError::InvalidRecord {
                    claim_id: claim.claim_id.to_string(),
                    reason: format!(
                        "area claimed must be a non-negative number, got {}",
                        claim.area_claimed_hectares
                    ),
                });
            }
        }

        info!(count = claims.len(), "claim dataset loaded");
        Ok(Self { claims })
    }

    /// All claims, in source document order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Looks up a claim by its id
    pub fn get(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|c| &c.claim_id == id)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
