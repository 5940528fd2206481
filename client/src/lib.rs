//! Kitties client
//!
//! Connects to a Substrate node over WebSocket, derives the `//Alice` and
//! `//Bob` development accounts and submits signed calls into the kitties and
//! template pallets.

pub mod call;
pub mod config;
pub mod error;
pub mod extrinsic;
pub mod keyring;
pub mod plan;
pub mod rpc;
pub mod session;

pub use call::{KittiesCall, PalletIndices, RuntimeCall, TemplateCall};
pub use config::{ClientConfig, WaitFor};
pub use error::{ClientError, Result};
pub use extrinsic::{ChainContext, SignedTransaction, UnsignedTransaction};
pub use keyring::{KeyScheme, Keyring, KeyringPair};
pub use plan::{PlannedCall, PlannedTx, TransactionPlan};
pub use rpc::RpcClient;
pub use session::{Session, TxOutcome, TxStatus};
