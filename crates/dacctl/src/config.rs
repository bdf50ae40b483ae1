use std::path::Path;

use dacctl_committee_core::committee::{Committee, ValidationResult};
use dacctl_committee_core::member::{AccountAddress, Member};
use serde::Deserialize;
use snafu::{ResultExt as _, Whatever};

/// On-disk configuration: the contract address and the member set
///
/// Member order in the file is irrelevant; the canonical order is
/// derived, never declared.
#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    pub contract: AccountAddress,
    pub members: Vec<Member>,
    /// Defaults to the committee size (full consensus)
    pub required_signatures: Option<u64>,
}

impl Config {
    pub async fn load(path: &Path) -> Result<Self, Whatever> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .whatever_context("Failed to read config file")?;

        serde_json::from_str(&raw).whatever_context("Failed to parse config file")
    }

    pub fn committee(&self) -> ValidationResult<Committee> {
        Committee::new(self.members.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parses_member_list_in_any_order() {
        let config: Config = serde_json::from_str(
            r#"{
                "contract": "0x0454CBD42C046A56FF99E667658ab8167e176cB3",
                "members": [
                    {
                        "address": "0xfF76e19cD574121eF2D63C59772091d9546BB1ff",
                        "url": "http://dac-node-2.zkevm.svc.cluster.local:8444/"
                    },
                    {
                        "address": "0xbDf4375ebbdee3faDe7912C1D188D0E12630849E",
                        "url": "http://dac-node-1.zkevm.svc.cluster.local:8444/"
                    }
                ]
            }"#,
        )
        .expect("Valid config");

        assert_eq!(config.required_signatures, None);

        let committee = config.committee().expect("Unique addresses");
        assert_eq!(
            committee[0].url,
            "http://dac-node-1.zkevm.svc.cluster.local:8444/"
        );
    }
}
