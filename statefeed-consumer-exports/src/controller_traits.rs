// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::ConsumerError;
use crate::rows::AccountRow;
use std::time::Duration;

/// Interface to the persistence layer receiving the reconciled rows
pub trait AccountStoreController: Send + Sync {
    /// Upserts a batch of account rows.
    ///
    /// The batch is the full output of one block message; it must be
    /// applied as one call so that a failed message leaves no partial rows
    /// behind. Re-running the same batch must be a no-op state-wise
    /// (rows are keyed by address).
    fn update_accounts(&self, accounts: Vec<AccountRow>) -> Result<(), ConsumerError>;
}

/// Interface to the cache tracking per-shard consumer progress
pub trait ProgressCacheController: Send + Sync {
    /// Records the timestamp of the latest fully-processed block of a shard
    fn set_latest_block_timestamp(
        &self,
        shard_id: u32,
        timestamp_ms: u64,
        ttl: Duration,
    ) -> Result<(), ConsumerError>;

    /// Reads the progress markers of the given shards, in the same order;
    /// `None` for shards with no (or an expired) marker
    fn get_latest_block_timestamps(
        &self,
        shard_ids: &[u32],
    ) -> Result<Vec<Option<u64>>, ConsumerError>;
}
