use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};

use crate::CommitteeHash;

/// Canonical on-chain committee payload
///
/// Mirrors the contract's `setupCommittee` arguments: signature
/// threshold, member endpoint urls, and the packed concatenation of
/// member addresses (a fixed 20-byte stride, no separators), all in
/// the canonical ascending-address order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeDescriptor {
    pub required_signatures: u64,
    pub urls: Vec<String>,
    pub addr_bytes: Vec<u8>,
}

impl CommitteeDescriptor {
    /// Recompute the fingerprint the contract stores for this descriptor
    ///
    /// The contract hashes the packed address bytes with keccak256.
    pub fn committee_hash(&self) -> CommitteeHash {
        keccak256(&self.addr_bytes).into()
    }
}
