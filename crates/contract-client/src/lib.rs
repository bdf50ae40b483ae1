// SPDX-License-Identifier: MIT

//! JSON-RPC implementation of the committee contract seam
//!
//! Talks to an Ethereum-style node over HTTP. Signing stays with the
//! node (`eth_sendTransaction` against one of its accounts); this
//! crate only encodes calldata, submits the transaction, polls for
//! its receipt and reads the committee hash back with `eth_call`.

pub mod abi;

use std::str::FromStr as _;
use std::time::Duration;

use async_trait::async_trait;
use backon::{FibonacciBuilder, Retryable as _};
use dacctl_committee_core::CommitteeHash;
use dacctl_committee_core::member::AccountAddress;
use dacctl_configurator::{CommitteeContract, ContractError};
use data_encoding::HEXLOWER;
use jsonrpsee::core::ClientError;
use jsonrpsee::core::client::ClientT as _;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, trace};

const LOG_TARGET: &str = "dacctl::contract";

/// Receipt polling cadence
///
/// Open-ended; when a confirmation deadline is wanted, the
/// configurator's timeout is the one that cuts this short.
const RECEIPT_BACKOFF: FibonacciBuilder = FibonacciBuilder::new()
    .with_jitter()
    .without_max_times()
    .with_max_delay(Duration::from_secs(12));

/// Committee contract reached through an Ethereum JSON-RPC endpoint
pub struct EthCommitteeContract {
    client: HttpClient,
    contract: AccountAddress,
    from: AccountAddress,
}

impl EthCommitteeContract {
    pub fn new(
        rpc_url: &str,
        contract: AccountAddress,
        from: AccountAddress,
    ) -> Result<Self, ContractError> {
        let client = HttpClientBuilder::default()
            .build(rpc_url)
            .map_err(|err| ContractError::Rpc {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            contract,
            from,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TxReceipt {
    /// `0x1` on success, `0x0` on revert
    status: Option<String>,
}

#[async_trait]
impl CommitteeContract for EthCommitteeContract {
    async fn setup_committee(
        &self,
        required_signatures: u64,
        urls: &[String],
        addr_bytes: &[u8],
    ) -> Result<(), ContractError> {
        let calldata = abi::encode_setup_committee(required_signatures, urls, addr_bytes);

        let tx = json!({
            "from": self.from.to_string(),
            "to": self.contract.to_string(),
            "data": hex_0x(&calldata),
        });

        let tx_hash: String = self
            .client
            .request("eth_sendTransaction", rpc_params![tx])
            .await
            .map_err(map_client_err)?;

        debug!(target: LOG_TARGET, %tx_hash, "Committee update submitted, awaiting receipt");

        let receipt = (|| async {
            let receipt: Option<TxReceipt> = self
                .client
                .request("eth_getTransactionReceipt", rpc_params![&tx_hash])
                .await
                .map_err(map_client_err)?;
            receipt.ok_or_else(|| ContractError::Rpc {
                message: format!("Transaction {tx_hash} not yet mined"),
            })
        })
        .retry(RECEIPT_BACKOFF)
        .notify(|err: &ContractError, dur: Duration| {
            trace!(
                target: LOG_TARGET,
                dur_millis = %dur.as_millis(),
                %err,
                "Still waiting for receipt"
            );
        })
        .await?;

        if receipt.status.as_deref() != Some("0x1") {
            return Err(ContractError::Reverted {
                reason: format!("Transaction {tx_hash} reverted"),
            });
        }
        Ok(())
    }

    async fn committee_hash(&self) -> Result<CommitteeHash, ContractError> {
        let call = json!({
            "to": self.contract.to_string(),
            "data": hex_0x(&abi::encode_committee_hash()),
        });

        let result: String = self
            .client
            .request("eth_call", rpc_params![call, "latest"])
            .await
            .map_err(map_client_err)?;

        CommitteeHash::from_str(&result).map_err(|err| ContractError::Rpc {
            message: format!("Invalid committeeHash() result {result}: {err}"),
        })
    }
}

fn hex_0x(bytes: &[u8]) -> String {
    format!("0x{}", HEXLOWER.encode(bytes))
}

/// Node-reported call errors carry the revert reason; everything else
/// is a transport-level failure.
fn map_client_err(err: ClientError) -> ContractError {
    match err {
        ClientError::Call(call) => ContractError::Reverted {
            reason: call.message().to_string(),
        },
        other => ContractError::Rpc {
            message: other.to_string(),
        },
    }
}
