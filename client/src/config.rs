//! Client configuration

use std::time::Duration;

use crate::call::PalletIndices;
use crate::keyring::KeyScheme;

pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:9944";

/// How long to follow a submitted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WaitFor {
    /// Return once the node accepted it into the pool
    #[default]
    Pool,
    InBlock,
    Finalized,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket endpoint of the node
    pub endpoint: String,
    pub request_timeout: Duration,
    pub scheme: KeyScheme,
    /// Secret URIs added to the keyring next to Alice and Bob
    pub extra_uris: Vec<String>,
    pub pallets: PalletIndices,
    pub metadata_hash_check: bool,
    pub tip: u128,
    pub wait: WaitFor,
    /// Stop at the first failing transaction
    pub fail_fast: bool,
    /// Sign but do not submit
    pub dry_run: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(60),
            scheme: KeyScheme::Sr25519,
            extra_uris: Vec::new(),
            pallets: PalletIndices::default(),
            metadata_hash_check: false,
            tip: 0,
            wait: WaitFor::Pool,
            fail_fast: false,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn wait_for_parses_cli_names() {
        assert_eq!(WaitFor::from_str("pool", false).unwrap(), WaitFor::Pool);
        assert_eq!(WaitFor::from_str("in-block", false).unwrap(), WaitFor::InBlock);
        assert_eq!(WaitFor::from_str("Finalized", true).unwrap(), WaitFor::Finalized);
        assert!(WaitFor::from_str("forever", false).is_err());
    }
}
