// SPDX-License-Identifier: MIT

//! Core types of the DAC committee configuration protocol
//!
//! Covers the pure part only: member records, the canonical
//! (ascending-address) committee ordering, descriptor derivation and
//! local recomputation of the on-chain committee hash. Everything
//! side-effecting lives in higher-level crates.
use dacctl_util_array_type::{
    array_type_define, array_type_impl_debug_as_display, array_type_impl_hex_str,
    array_type_impl_serde, array_type_impl_zero_default,
};

pub mod committee;
pub mod descriptor;
pub mod member;
pub mod num_members;

array_type_define! {
    /// Contract-computed fingerprint of the active committee descriptor
    ///
    /// Used after an update as a verification fingerprint: the caller
    /// recomputes it locally from the descriptor it submitted and
    /// compares with the value the contract reports.
    #[derive(Copy, Clone)]
    pub struct CommitteeHash[32];
}
array_type_impl_zero_default!(CommitteeHash);
array_type_impl_hex_str!(CommitteeHash);
array_type_impl_serde!(CommitteeHash);
array_type_impl_debug_as_display!(CommitteeHash);

impl From<alloy_primitives::B256> for CommitteeHash {
    fn from(value: alloy_primitives::B256) -> Self {
        Self(value.0)
    }
}

impl From<CommitteeHash> for alloy_primitives::B256 {
    fn from(value: CommitteeHash) -> Self {
        alloy_primitives::B256::from(value.0)
    }
}
