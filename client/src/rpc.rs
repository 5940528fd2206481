//! RPC client for connecting to a Substrate node over WebSocket

use std::sync::Arc;
use std::time::Duration;

use jsonrpsee::{
    core::{
        client::{ClientT, SubscriptionClientT},
        params::ArrayParams,
    },
    rpc_params,
    ws_client::{WsClient, WsClientBuilder},
};
use serde::{Deserialize, Serialize};
use sp_core::H256;
use tokio::sync::RwLock;

use crate::error::{ClientError, Result};

/// RPC client for blockchain interaction
pub struct RpcClient {
    client: Arc<RwLock<Option<WsClient>>>,
    url: String,
    request_timeout: Duration,
}

impl RpcClient {
    /// Create new RPC client
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(RwLock::new(None)),
            url: url.into(),
            request_timeout: Duration::from_secs(60),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connect to the node
    pub async fn connect(&self) -> Result<()> {
        tracing::info!("Connecting to node at {}", self.url);

        let client = WsClientBuilder::default()
            .request_timeout(self.request_timeout)
            .build(&self.url)
            .await
            .map_err(|e| ClientError::Connection {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        *self.client.write().await = Some(client);

        tracing::info!("Connected to node");
        Ok(())
    }

    /// Check if connected
    pub async fn is_connected(&self) -> bool {
        match self.client.read().await.as_ref() {
            Some(client) => client.is_connected(),
            None => false,
        }
    }

    /// Chain name reported by the node
    pub async fn system_chain(&self) -> Result<String> {
        self.request("system_chain", rpc_params![]).await
    }

    /// Get runtime version
    pub async fn runtime_version(&self) -> Result<RuntimeVersion> {
        self.request("state_getRuntimeVersion", rpc_params![]).await
    }

    /// Hash of block zero
    pub async fn genesis_hash(&self) -> Result<H256> {
        let hash: Option<H256> = self.request("chain_getBlockHash", rpc_params![0u32]).await?;
        hash.ok_or(ClientError::NoGenesis)
    }

    /// Next usable nonce for an account, including transactions still in the pool
    pub async fn next_nonce(&self, ss58_address: &str) -> Result<u64> {
        self.request("system_accountNextIndex", rpc_params![ss58_address]).await
    }

    /// Submit signed transaction
    pub async fn submit_extrinsic(&self, signed_tx: &[u8]) -> Result<H256> {
        let tx_hex = format!("0x{}", hex::encode(signed_tx));
        let hash: H256 = self.request("author_submitExtrinsic", rpc_params![tx_hex]).await?;

        tracing::info!("Transaction submitted: {:?}", hash);
        Ok(hash)
    }

    /// Submit a signed transaction and wait until it lands in a block.
    ///
    /// With `until_finalized` the wait continues past `inBlock` to `finalized`.
    pub async fn submit_and_watch(&self, signed_tx: &[u8], until_finalized: bool) -> Result<H256> {
        let guard = self.client.read().await;
        let client = guard.as_ref().ok_or(ClientError::NotConnected)?;

        let tx_hex = format!("0x{}", hex::encode(signed_tx));
        let mut subscription = client
            .subscribe::<TransactionStatus, _>(
                "author_submitAndWatchExtrinsic",
                rpc_params![tx_hex],
                "author_unwatchExtrinsic",
            )
            .await?;

        while let Some(status) = subscription.next().await {
            let status = status.map_err(jsonrpsee::core::ClientError::ParseError)?;
            tracing::debug!("Transaction status: {:?}", status);

            match status {
                TransactionStatus::InBlock(block) if !until_finalized => return Ok(block),
                TransactionStatus::Finalized(block) => return Ok(block),
                status if status.is_terminal_failure() => {
                    return Err(ClientError::TransactionRejected(format!("{:?}", status)));
                }
                _ => {}
            }
        }

        Err(ClientError::WatchEnded)
    }

    async fn request<R>(&self, method: &str, params: ArrayParams) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let client = self.client.read().await;
        let client = client.as_ref().ok_or(ClientError::NotConnected)?;

        Ok(client.request(method, params).await?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeVersion {
    pub spec_name: String,
    pub impl_name: String,
    pub authoring_version: u32,
    pub spec_version: u32,
    pub impl_version: u32,
    pub transaction_version: u32,
}

/// Status notifications of `author_submitAndWatchExtrinsic`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Future,
    Ready,
    Broadcast(Vec<String>),
    InBlock(H256),
    Retracted(H256),
    FinalityTimeout(H256),
    Finalized(H256),
    Usurped(H256),
    Dropped,
    Invalid,
}

impl TransactionStatus {
    /// The transaction will never be included
    pub fn is_terminal_failure(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Usurped(_) | TransactionStatus::Dropped | TransactionStatus::Invalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_notifications() {
        let ready: TransactionStatus = serde_json::from_str(r#""ready""#).unwrap();
        assert_eq!(ready, TransactionStatus::Ready);

        let hash = format!("0x{}", "11".repeat(32));
        let in_block: TransactionStatus =
            serde_json::from_str(&format!(r#"{{"inBlock":"{}"}}"#, hash)).unwrap();
        assert_eq!(in_block, TransactionStatus::InBlock(H256::repeat_byte(0x11)));

        let broadcast: TransactionStatus =
            serde_json::from_str(r#"{"broadcast":["peer-a","peer-b"]}"#).unwrap();
        assert!(matches!(broadcast, TransactionStatus::Broadcast(peers) if peers.len() == 2));

        let dropped: TransactionStatus = serde_json::from_str(r#""dropped""#).unwrap();
        assert!(dropped.is_terminal_failure());
        assert!(!in_block.is_terminal_failure());
    }

    #[test]
    fn parses_runtime_version() {
        let json = r#"{
            "specName": "node-template",
            "implName": "node-template",
            "authoringVersion": 1,
            "specVersion": 100,
            "implVersion": 1,
            "apis": [],
            "transactionVersion": 1,
            "stateVersion": 1
        }"#;
        let version: RuntimeVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.spec_version, 100);
        assert_eq!(version.transaction_version, 1);
    }

    #[tokio::test]
    async fn requests_fail_before_connect() {
        let client = RpcClient::new("ws://127.0.0.1:9944");
        assert!(!client.is_connected().await);
        assert!(matches!(client.runtime_version().await, Err(ClientError::NotConnected)));
        assert!(matches!(
            client.submit_and_watch(&[0u8], false).await,
            Err(ClientError::NotConnected)
        ));
    }

    #[tokio::test]
    #[ignore] // Requires running node
    async fn test_connect() {
        let client = RpcClient::new("ws://127.0.0.1:9944");
        client.connect().await.unwrap();
        assert!(client.is_connected().await);
        assert_ne!(client.genesis_hash().await.unwrap(), H256::zero());
    }
}
