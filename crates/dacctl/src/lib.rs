mod config;
mod logging;
mod opts;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser as _;
use config::Config;
use dacctl_committee_core::descriptor::CommitteeDescriptor;
use dacctl_configurator::Configurator;
use dacctl_contract_client::EthCommitteeContract;
use data_encoding::HEXLOWER;
use opts::{Commands, Opts};
use snafu::{ResultExt as _, Whatever};

pub struct Dacctl;

impl Dacctl {
    pub async fn run() -> Result<(), Whatever> {
        logging::init_logging()?;

        let opts = Opts::parse();

        match opts.command {
            Commands::Derive { config } => {
                let config = Config::load(&config).await?;
                let descriptor = derive_descriptor(&config)?;

                print_descriptor(&descriptor);
                println!("\texpected_hash={}", descriptor.committee_hash());
            }

            Commands::Setup {
                config,
                rpc_url,
                from,
                timeout_secs,
            } => {
                let config = Config::load(&config).await?;
                let committee = config.committee().whatever_context("Invalid member set")?;
                print_descriptor(&derive_descriptor(&config)?);

                let contract = EthCommitteeContract::new(&rpc_url, config.contract, from)
                    .whatever_context("Failed to set up rpc client")?;

                let configurator = Configurator::builder()
                    .contract(Arc::new(contract))
                    .maybe_confirmation_timeout(timeout_secs.map(Duration::from_secs))
                    .build();

                let hash = configurator
                    .run(&committee, config.required_signatures)
                    .await
                    .whatever_context("Committee update failed")?;

                println!("Committee updated, new committee hash - {hash}");
            }
        }

        Ok(())
    }
}

fn derive_descriptor(config: &Config) -> Result<CommitteeDescriptor, Whatever> {
    let committee = config.committee().whatever_context("Invalid member set")?;

    match config.required_signatures {
        Some(required) => committee
            .descriptor_with_threshold(required)
            .whatever_context("Invalid signature threshold"),
        None => Ok(committee.descriptor()),
    }
}

fn print_descriptor(descriptor: &CommitteeDescriptor) {
    println!("New committee details:");
    println!(
        "\trequired_signatures={}",
        descriptor.required_signatures
    );
    println!("\turls={}", descriptor.urls.join(","));
    println!("\taddr_bytes=0x{}", HEXLOWER.encode(&descriptor.addr_bytes));
}
