// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::ConsumerError;
use crate::rows::AccountRow;
use crate::{AccountStoreController, ProgressCacheController};
use std::time::Duration;

mockall::mock! {
    /// Mock of the account store
    pub AccountStoreController {}

    impl AccountStoreController for AccountStoreController {
        fn update_accounts(&self, accounts: Vec<AccountRow>) -> Result<(), ConsumerError>;
    }
}

mockall::mock! {
    /// Mock of the progress cache
    pub ProgressCacheController {}

    impl ProgressCacheController for ProgressCacheController {
        fn set_latest_block_timestamp(
            &self,
            shard_id: u32,
            timestamp_ms: u64,
            ttl: Duration,
        ) -> Result<(), ConsumerError>;

        fn get_latest_block_timestamps(
            &self,
            shard_ids: &[u32],
        ) -> Result<Vec<Option<u64>>, ConsumerError>;
    }
}
