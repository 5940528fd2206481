//! Transaction plans: the list of pending transactions a session submits

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::call::{KittiesCall, PalletIndices, RuntimeCall, TemplateCall};
use crate::error::{ClientError, Result};
use crate::keyring::{Keyring, KeyringPair};

/// An ordered list of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPlan {
    pub transactions: Vec<PlannedTx>,
}

/// One transaction: who signs it and what it calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTx {
    /// Keyring name of the signer
    pub signer: String,
    #[serde(flatten)]
    pub call: PlannedCall,
}

/// Human-readable call arguments.
///
/// DNA is given as `0x`-prefixed hex or as plain text; accounts as keyring
/// names or SS58 addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum PlannedCall {
    CreateKitty { dna: String, price: u32 },
    TransferKitty { to: String, dna: String },
    SetPrice { dna: String, price: u32 },
    DoSomething { value: u32 },
    CauseError,
    PutNumber { number: u32 },
    DeleteNumber,
}

/// A planned transaction bound to its key pair and encoded call
#[derive(Debug, Clone)]
pub struct ResolvedTx {
    pub signer: KeyringPair,
    pub call: RuntimeCall,
}

impl TransactionPlan {
    /// Alice and Bob each create a kitty, then Alice hands hers to Bob
    pub fn default_plan() -> Self {
        Self {
            transactions: vec![
                PlannedTx {
                    signer: "alice".into(),
                    call: PlannedCall::CreateKitty { dna: "alice-kitty".into(), price: 100 },
                },
                PlannedTx {
                    signer: "bob".into(),
                    call: PlannedCall::CreateKitty { dna: "bob-kitty".into(), price: 150 },
                },
                PlannedTx {
                    signer: "alice".into(),
                    call: PlannedCall::TransferKitty {
                        to: "bob".into(),
                        dna: "alice-kitty".into(),
                    },
                },
            ],
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ClientError::PlanIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Bind every entry to a keyring pair and encode its call
    pub fn resolve(&self, keyring: &Keyring, indices: &PalletIndices) -> Result<Vec<ResolvedTx>> {
        self.transactions
            .iter()
            .map(|tx| {
                let signer = keyring
                    .get(&tx.signer)
                    .cloned()
                    .ok_or_else(|| ClientError::UnknownAccount(tx.signer.clone()))?;
                let call = tx.call.to_runtime_call(keyring, indices)?;
                Ok(ResolvedTx { signer, call })
            })
            .collect()
    }
}

impl PlannedCall {
    pub fn to_runtime_call(
        &self,
        keyring: &Keyring,
        indices: &PalletIndices,
    ) -> Result<RuntimeCall> {
        let call = match self {
            PlannedCall::CreateKitty { dna, price } => RuntimeCall::kitties(
                indices,
                KittiesCall::CreateKitty { dna: parse_dna(dna)?, price: *price },
            ),
            PlannedCall::TransferKitty { to, dna } => RuntimeCall::kitties(
                indices,
                KittiesCall::TransferKitty {
                    to: keyring.resolve_account(to)?,
                    dna: parse_dna(dna)?,
                },
            ),
            PlannedCall::SetPrice { dna, price } => RuntimeCall::kitties(
                indices,
                KittiesCall::SetPrice { dna: parse_dna(dna)?, new_price: *price },
            ),
            PlannedCall::DoSomething { value } => {
                RuntimeCall::template(indices, TemplateCall::DoSomething { something: *value })
            }
            PlannedCall::CauseError => RuntimeCall::template(indices, TemplateCall::CauseError),
            PlannedCall::PutNumber { number } => {
                RuntimeCall::template(indices, TemplateCall::PutNumber { number: *number })
            }
            PlannedCall::DeleteNumber => RuntimeCall::template(indices, TemplateCall::DeleteNumber),
        };
        Ok(call)
    }
}

/// `0x`-prefixed hex is decoded, anything else is taken as UTF-8 bytes
pub fn parse_dna(dna: &str) -> Result<Vec<u8>> {
    match dna.strip_prefix("0x") {
        Some(hex_dna) => hex::decode(hex_dna).map_err(|_| ClientError::InvalidDna(dna.to_string())),
        None if dna.is_empty() => Err(ClientError::InvalidDna(dna.to_string())),
        None => Ok(dna.as_bytes().to_vec()),
    }
}
