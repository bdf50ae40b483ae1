// SPDX-License-Identifier: MIT

//! Committee configuration pipeline
//!
//! The pure part (canonical ordering, descriptor derivation) lives in
//! `dacctl-committee-core`; this crate drives the side-effecting
//! on-chain update through the [`CommitteeContract`] seam: submit the
//! descriptor, await confirmation, read the resulting committee hash
//! back and verify it against the locally recomputed expectation.
//!
//! One run is one logical operation. Nothing is retried here; a failed
//! run is re-derived and resubmitted by the caller, which is safe
//! because derivation is pure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dacctl_committee_core::CommitteeHash;
use dacctl_committee_core::committee::{Committee, ValidationError};
use dacctl_committee_core::descriptor::CommitteeDescriptor;
use snafu::{OptionExt as _, ResultExt as _, Snafu};
use tracing::{debug, info};

const LOG_TARGET: &str = "dacctl::configurator";

/// Error reported by a [`CommitteeContract`] implementation
#[derive(Debug, Snafu)]
pub enum ContractError {
    /// The transaction was rejected by the contract
    #[snafu(display("Contract reverted: {reason}"))]
    Reverted { reason: String },
    /// Transport or node-side failure
    #[snafu(display("Rpc failed: {message}"))]
    Rpc { message: String },
}

/// The committee contract surface, as seen by the configurator
///
/// Implementations carry their own transport and signing capability.
/// The configurator only needs something that can submit a descriptor
/// (awaiting inclusion) and report the currently active committee
/// hash. Confirmation policy is the implementation's business.
#[async_trait]
pub trait CommitteeContract {
    /// Submit the new committee descriptor and await confirmation
    async fn setup_committee(
        &self,
        required_signatures: u64,
        urls: &[String],
        addr_bytes: &[u8],
    ) -> Result<(), ContractError>;

    /// Read the currently active committee hash
    async fn committee_hash(&self) -> Result<CommitteeHash, ContractError>;
}

#[derive(Debug, Snafu)]
pub enum SubmissionError {
    #[snafu(display("Committee update rejected: {source}"))]
    Rejected { source: ContractError },
    #[snafu(display("Committee update not confirmed within {timeout:?}"))]
    Timeout { timeout: Duration },
}

#[derive(Debug, Snafu)]
pub enum ConfiguratorError {
    #[snafu(transparent)]
    Validation { source: ValidationError },
    #[snafu(transparent)]
    Submission { source: SubmissionError },
    /// The update went through but the hash could not be read back
    #[snafu(display("Failed to read back committee hash: {source}"))]
    ReadBack { source: ContractError },
    /// The update went through but a different committee is active
    ///
    /// Signals a stale read or a racing configurator, not a failed
    /// transaction.
    #[snafu(display("On-chain committee hash {actual} does not match expected {expected}"))]
    VerificationMismatch {
        expected: CommitteeHash,
        actual: CommitteeHash,
    },
}

pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;

/// Drives one committee configuration run
pub struct Configurator {
    contract: Arc<dyn CommitteeContract + Send + Sync>,
    /// `None` means wait for confirmation indefinitely
    confirmation_timeout: Option<Duration>,
}

#[bon::bon]
impl Configurator {
    #[builder]
    pub fn new(
        contract: Arc<dyn CommitteeContract + Send + Sync>,
        confirmation_timeout: Option<Duration>,
    ) -> Self {
        Self {
            contract,
            confirmation_timeout,
        }
    }

    /// Derive, publish and verify in one go
    ///
    /// `required_signatures` defaults to the committee size.
    pub async fn run(
        &self,
        committee: &Committee,
        required_signatures: Option<u64>,
    ) -> ConfiguratorResult<CommitteeHash> {
        let descriptor = match required_signatures {
            Some(required) => committee.descriptor_with_threshold(required)?,
            None => committee.descriptor(),
        };

        let actual = self.publish(&descriptor).await?;
        Self::verify(&descriptor, actual)?;

        info!(
            target: LOG_TARGET,
            hash = %actual,
            "Committee updated"
        );
        Ok(actual)
    }

    /// Submit the descriptor and return the on-chain hash after confirmation
    pub async fn publish(
        &self,
        descriptor: &CommitteeDescriptor,
    ) -> ConfiguratorResult<CommitteeHash> {
        info!(
            target: LOG_TARGET,
            required_signatures = descriptor.required_signatures,
            members = descriptor.urls.len(),
            "Submitting committee update"
        );

        let submit = self.contract.setup_committee(
            descriptor.required_signatures,
            &descriptor.urls,
            &descriptor.addr_bytes,
        );

        match self.confirmation_timeout {
            Some(timeout) => tokio::time::timeout(timeout, submit)
                .await
                .ok()
                .context(TimeoutSnafu { timeout })?,
            None => submit.await,
        }
        .context(RejectedSnafu)?;

        debug!(target: LOG_TARGET, "Committee update confirmed, reading hash back");

        let actual = self
            .contract
            .committee_hash()
            .await
            .context(ReadBackSnafu)?;
        Ok(actual)
    }

    /// Compare the locally recomputed hash against the on-chain value
    ///
    /// Catches silent divergence: a mismatch means a stale read or a
    /// differing descriptor applied by a racing actor, which this tool
    /// detects rather than prevents.
    pub fn verify(
        expected: &CommitteeDescriptor,
        actual: CommitteeHash,
    ) -> ConfiguratorResult<()> {
        let expected = expected.committee_hash();
        if expected != actual {
            return VerificationMismatchSnafu { expected, actual }.fail();
        }
        Ok(())
    }
}
