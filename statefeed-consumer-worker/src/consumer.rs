// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Synchronous processing of one block state-access message.

use statefeed_consumer_exports::{
    AccountRow, AccountStoreController, ConsumerConfig, ConsumerError, NftBalanceRow, NftSubType,
    NftType, ProgressCacheController, TokenBalanceRow, TokenType,
};
use statefeed_final_state::{reconcile_account, FinalAccountState};
use statefeed_models::account::CodeMetadataFlags;
use statefeed_models::address::Address;
use statefeed_models::esdt::EsdtType;
use statefeed_models::state_access::BlockStateChanges;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Processes block state-access messages: decode, reconcile, persist,
/// record progress. All mutable state of one message lives in locals, so a
/// single instance can be shared by any number of competing workers.
pub struct BlockStateConsumer {
    config: ConsumerConfig,
    store: Box<dyn AccountStoreController>,
    progress: Box<dyn ProgressCacheController>,
}

impl BlockStateConsumer {
    /// Creates a `BlockStateConsumer`
    pub fn new(
        config: ConsumerConfig,
        store: Box<dyn AccountStoreController>,
        progress: Box<dyn ProgressCacheController>,
    ) -> Self {
        Self {
            config,
            store,
            progress,
        }
    }

    /// Deserializes and processes one queue payload.
    ///
    /// Any error is fatal for the message: it has been logged and must be
    /// surfaced to the transport so the message is redelivered.
    pub fn consume_payload(&self, payload: &[u8]) -> Result<(), ConsumerError> {
        let message: BlockStateChanges = serde_json::from_slice(payload).map_err(|err| {
            error!("could not deserialize state access message: {}", err);
            ConsumerError::MessageFormat(err.to_string())
        })?;
        self.consume_block(message)
    }

    /// Processes one block state-access message.
    ///
    /// Exactly one store upsert and one progress-marker write happen per
    /// successful call; a failed call performs neither completely and can
    /// be retried, yielding the same rows (the pipeline is pure up to the
    /// store hand-off).
    pub fn consume_block(&self, message: BlockStateChanges) -> Result<(), ConsumerError> {
        match self.process_block(&message) {
            Ok(()) => Ok(()),
            Err(err) => {
                error!(
                    "error consuming state changes of block {} from shard {}: {}",
                    message.hash, message.shard_id, err
                );
                Err(err)
            }
        }
    }

    fn process_block(&self, message: &BlockStateChanges) -> Result<(), ConsumerError> {
        if message.shard_id == self.config.metachain_shard_id {
            // metachain blocks carry no user account state
            return Ok(());
        }

        let processing_start = Instant::now();
        let final_states = self.reconcile_message(message)?;
        let rows = self.to_account_rows(message, final_states);
        debug!(
            "decoded state changes for block {} on shard {} in {:?}",
            message.hash,
            message.shard_id,
            processing_start.elapsed()
        );

        // the store only tracks wallet accounts
        self.store.update_accounts(
            rows.into_iter()
                .filter(|row| !row.address.is_contract())
                .collect(),
        )?;

        self.progress.set_latest_block_timestamp(
            message.shard_id,
            message.timestamp_ms,
            self.config.progress_ttl,
        )?;

        debug!(
            "processed state changes for block {} on shard {} in {:?}",
            message.hash,
            message.shard_id,
            processing_start.elapsed()
        );
        Ok(())
    }

    /// Reconciles every account the message touches
    fn reconcile_message(
        &self,
        message: &BlockStateChanges,
    ) -> Result<Vec<(Address, FinalAccountState)>, ConsumerError> {
        let mut reconciled = Vec::with_capacity(message.state_accesses_per_accounts.len());
        for (account_hex, accesses) in &message.state_accesses_per_accounts {
            let address = Address::from_hex(account_hex).map_err(|err| {
                ConsumerError::MessageFormat(format!(
                    "invalid account key {}: {}",
                    account_hex, err
                ))
            })?;
            reconciled.push((address, reconcile_account(&address, &accesses.state_access)));
        }
        Ok(reconciled)
    }

    /// Converts reconciled states into store rows. Accounts whose accesses
    /// carried no decodable account leaf produce no row.
    fn to_account_rows(
        &self,
        message: &BlockStateChanges,
        states: Vec<(Address, FinalAccountState)>,
    ) -> Vec<AccountRow> {
        states
            .into_iter()
            .filter_map(|(key_address, state)| {
                let account = state.account_state?;
                let address = account.address.unwrap_or(key_address);

                let metadata = account
                    .code_metadata
                    .as_deref()
                    .and_then(CodeMetadataFlags::from_hex);
                let (mut tokens, mut nfts) = (Vec::new(), Vec::new());
                for (esdt_type, entries) in &state.esdt_states {
                    for entry in entries {
                        if *esdt_type == EsdtType::Fungible {
                            tokens.push(TokenBalanceRow {
                                identifier: entry.identifier.clone(),
                                nonce: entry.nonce(),
                                balance: entry.value.clone(),
                                token_type: TokenType::FungibleEsdt,
                                sub_type: NftSubType::None,
                            });
                        } else if let Some(nft_type) = NftType::from_esdt_type(*esdt_type) {
                            nfts.push(NftBalanceRow {
                                identifier: entry.identifier.clone(),
                                nonce: entry.nonce(),
                                nft_type,
                                sub_type: NftSubType::from_esdt_type(*esdt_type),
                                collection: entry.collection(),
                                balance: entry.value.clone(),
                            });
                        }
                    }
                }

                let is_contract = address.is_contract();
                Some(AccountRow {
                    address,
                    nonce: account.nonce,
                    balance: account.balance,
                    developer_reward: account.developer_reward,
                    owner_address: account.owner_address,
                    user_name: account.user_name,
                    code_hash: account.code_hash,
                    root_hash: account.root_hash,
                    shard: message.shard_id,
                    timestamp_ms: message.timestamp_ms,
                    timestamp: message.timestamp_ms / 1000,
                    is_guarded: metadata.filter(|_| !is_contract).map(|m| m.guarded),
                    is_upgradeable: metadata.filter(|_| is_contract).map(|m| m.upgradeable),
                    is_readable: metadata.filter(|_| is_contract).map(|m| m.readable),
                    is_payable: metadata.filter(|_| is_contract).map(|m| m.payable),
                    is_payable_by_sc: metadata.filter(|_| is_contract).map(|m| m.payable_by_sc),
                    tokens,
                    nfts,
                })
            })
            .collect()
    }

    /// True when every tracked shard has a progress marker and the oldest
    /// one lags `now_ms` by no more than the configured tolerance
    pub fn is_fresh(&self, now_ms: u64) -> Result<bool, ConsumerError> {
        let marks = self
            .progress
            .get_latest_block_timestamps(&self.config.tracked_shards)?;
        let mut oldest = None;
        for mark in marks {
            match mark {
                Some(timestamp_ms) => {
                    oldest = Some(oldest.map_or(timestamp_ms, |o: u64| o.min(timestamp_ms)));
                }
                None => {
                    warn!("missing progress marker for a tracked shard");
                    return Ok(false);
                }
            }
        }
        let Some(oldest) = oldest else {
            return Ok(false);
        };
        Ok(now_ms.saturating_sub(oldest) <= self.config.max_freshness_lag.as_millis() as u64)
    }
}
