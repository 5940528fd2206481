//! Error types for the kitties client.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to a node or preparing transactions.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A request was made before `connect`
    #[error("not connected to a node")]
    NotConnected,

    /// The WebSocket connection could not be established
    #[error("connection to {url} failed: {reason}")]
    Connection { url: String, reason: String },

    /// A JSON-RPC request failed
    #[error("rpc error: {0}")]
    Rpc(#[from] jsonrpsee::core::ClientError),

    /// `chain_getBlockHash(0)` returned null
    #[error("node returned no genesis block hash")]
    NoGenesis,

    /// The secret URI could not be turned into a key pair
    #[error("invalid secret URI '{0}'")]
    InvalidSecretUri(String),

    /// Unknown key scheme name
    #[error("unknown key scheme '{0}', expected sr25519 or ed25519")]
    UnknownScheme(String),

    /// The keyring already holds a different key under this name
    #[error("keyring name '{name}' is already used by {address}")]
    NameTaken { name: String, address: String },

    /// Neither a keyring name nor a valid SS58 address
    #[error("unknown account '{0}'")]
    UnknownAccount(String),

    /// DNA string could not be decoded
    #[error("invalid DNA '{0}'")]
    InvalidDna(String),

    /// The node refused or dropped a transaction
    #[error("transaction rejected: {0}")]
    TransactionRejected(String),

    /// The watch subscription ended before the transaction was included
    #[error("transaction watch ended without inclusion")]
    WatchEnded,

    /// Transaction plan file could not be read
    #[error("failed to read plan {path}: {source}")]
    PlanIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Transaction plan file is not valid JSON
    #[error("invalid plan: {0}")]
    PlanFormat(#[from] serde_json::Error),
}
