use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dacctl_committee_core::member::AccountAddress;

#[derive(Parser, Debug)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Derive the committee descriptor and its expected hash, offline
    Derive {
        #[arg(long, env = "DACCTL_CONFIG")]
        config: PathBuf,
    },
    /// Publish the committee descriptor and verify the on-chain hash
    Setup {
        #[arg(long, env = "DACCTL_CONFIG")]
        config: PathBuf,

        #[arg(long, env = "DACCTL_RPC_URL")]
        rpc_url: String,

        /// Node-managed account the update transaction is sent from
        #[arg(long, env = "DACCTL_FROM")]
        from: AccountAddress,

        /// Give up if the update is not confirmed in time
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
