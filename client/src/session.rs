//! A connected session: node handle, keyring and transaction execution

use std::collections::HashMap;

use sp_core::{crypto::AccountId32, H256};

use crate::config::{ClientConfig, WaitFor};
use crate::error::{ClientError, Result};
use crate::extrinsic::{ChainContext, UnsignedTransaction};
use crate::keyring::{Keyring, KeyringPair};
use crate::plan::{ResolvedTx, TransactionPlan};
use crate::rpc::RpcClient;

/// Next nonce per signer, seeded from the node and advanced locally
#[derive(Debug, Default)]
pub struct NonceTracker {
    next: HashMap<AccountId32, u64>,
}

impl NonceTracker {
    pub fn known(&self, account: &AccountId32) -> Option<u64> {
        self.next.get(account).copied()
    }

    /// Record the node's view unless a local value already exists
    pub fn seed(&mut self, account: &AccountId32, nonce: u64) {
        self.next.entry(account.clone()).or_insert(nonce);
    }

    /// Hand out the next nonce and advance
    pub fn take(&mut self, account: &AccountId32) -> Option<u64> {
        let next = self.next.get_mut(account)?;
        let nonce = *next;
        *next += 1;
        Some(nonce)
    }

    /// Drop the local value so the next transaction asks the node again
    pub fn forget(&mut self, account: &AccountId32) {
        self.next.remove(account);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    /// Signed only; `hex` is the encoded extrinsic
    DryRun { hash: H256, hex: String },
    /// Accepted into the transaction pool
    Submitted { hash: H256 },
    /// Included in (or finalized with) `block`. Inclusion says nothing about
    /// dispatch: a call failing with a pallet error is still included.
    Included { hash: H256, block: H256 },
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct TxOutcome {
    pub index: usize,
    pub signer: String,
    pub call: &'static str,
    pub nonce: Option<u64>,
    pub status: TxStatus,
}

impl TxOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, TxStatus::Failed { .. })
    }
}

pub struct Session {
    rpc: RpcClient,
    keyring: Keyring,
    config: ClientConfig,
}

impl Session {
    /// Derive the keyring, then open and await the node connection
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let keyring = Self::build_keyring(&config)?;

        let rpc =
            RpcClient::new(config.endpoint.clone()).with_request_timeout(config.request_timeout);
        rpc.connect().await?;

        let chain = rpc.system_chain().await?;
        tracing::info!("Chain: {}", chain);

        Ok(Self { rpc, keyring, config })
    }

    /// Alice, Bob and any configured extra URIs
    pub fn build_keyring(config: &ClientConfig) -> Result<Keyring> {
        let mut keyring = Keyring::dev_accounts(config.scheme)?;
        for uri in &config.extra_uris {
            keyring.add_from_uri(uri)?;
        }
        Ok(keyring)
    }

    pub fn keyring(&self) -> &Keyring {
        &self.keyring
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub async fn chain_context(&self) -> Result<ChainContext> {
        let version = self.rpc.runtime_version().await?;
        let genesis_hash = self.rpc.genesis_hash().await?;

        tracing::debug!(
            "Runtime {} spec_version={} transaction_version={} genesis={:?}",
            version.spec_name,
            version.spec_version,
            version.transaction_version,
            genesis_hash
        );

        Ok(ChainContext {
            genesis_hash,
            spec_version: version.spec_version,
            transaction_version: version.transaction_version,
            metadata_hash_check: self.config.metadata_hash_check,
        })
    }

    /// Sign and submit every transaction of the plan, in order.
    ///
    /// Failures are recorded per entry; with `fail_fast` the remaining entries
    /// are skipped.
    pub async fn execute(&self, plan: &TransactionPlan) -> Result<Vec<TxOutcome>> {
        let resolved = plan.resolve(&self.keyring, &self.config.pallets)?;
        let ctx = self.chain_context().await?;
        let mut nonces = NonceTracker::default();
        let mut outcomes = Vec::with_capacity(resolved.len());

        tracing::info!("Executing {} transactions", resolved.len());

        for (index, tx) in resolved.into_iter().enumerate() {
            let outcome = self.execute_one(index, tx, &ctx, &mut nonces).await;

            match &outcome.status {
                TxStatus::Failed { reason } => {
                    tracing::warn!(
                        "#{} {} by {} failed: {}",
                        index,
                        outcome.call,
                        outcome.signer,
                        reason
                    );
                }
                status => {
                    tracing::info!(
                        "#{} {} by {}: {:?}",
                        index,
                        outcome.call,
                        outcome.signer,
                        status
                    );
                }
            }

            let stop = self.config.fail_fast && !outcome.is_success();
            outcomes.push(outcome);
            if stop {
                tracing::warn!("Stopping after first failure");
                break;
            }
        }

        Ok(outcomes)
    }

    async fn execute_one(
        &self,
        index: usize,
        tx: ResolvedTx,
        ctx: &ChainContext,
        nonces: &mut NonceTracker,
    ) -> TxOutcome {
        let ResolvedTx { signer, call } = tx;
        let mut outcome = TxOutcome {
            index,
            signer: signer.name().to_string(),
            call: call.name(),
            nonce: None,
            status: TxStatus::Failed { reason: String::new() },
        };

        let account = signer.account_id();
        let nonce = match self.reserve_nonce(&signer, nonces).await {
            Ok(nonce) => nonce,
            Err(e) => {
                outcome.status = TxStatus::Failed { reason: e.to_string() };
                return outcome;
            }
        };
        outcome.nonce = Some(nonce);

        let signed = UnsignedTransaction::new(call, nonce, self.config.tip, ctx).sign(&signer);
        let hash = signed.hash();
        let bytes = codec::Encode::encode(&signed);

        if self.config.dry_run {
            outcome.status = TxStatus::DryRun { hash, hex: format!("0x{}", hex::encode(&bytes)) };
            return outcome;
        }

        let result = match self.config.wait {
            WaitFor::Pool => {
                self.rpc.submit_extrinsic(&bytes).await.map(|hash| TxStatus::Submitted { hash })
            }
            WaitFor::InBlock => self
                .rpc
                .submit_and_watch(&bytes, false)
                .await
                .map(|block| TxStatus::Included { hash, block }),
            WaitFor::Finalized => self
                .rpc
                .submit_and_watch(&bytes, true)
                .await
                .map(|block| TxStatus::Included { hash, block }),
        };

        outcome.status = match result {
            Ok(status) => status,
            Err(e) => {
                // rejected transactions do not consume their nonce
                nonces.forget(&account);
                TxStatus::Failed { reason: e.to_string() }
            }
        };
        outcome
    }

    async fn reserve_nonce(&self, signer: &KeyringPair, nonces: &mut NonceTracker) -> Result<u64> {
        let account = signer.account_id();
        if nonces.known(&account).is_none() {
            let on_chain = self.rpc.next_nonce(&signer.address()).await?;
            tracing::debug!("{} next nonce on chain: {}", signer.name(), on_chain);
            nonces.seed(&account, on_chain);
        }
        nonces
            .take(&account)
            .ok_or_else(|| ClientError::UnknownAccount(signer.name().to_string()))
    }
}
