// Copyright (c) 2022 MASSA LABS <info@massa.net>

use serde::Deserialize;
use statefeed_models::constants::METACHAIN_SHARD_ID;
use std::time::Duration;

/// Expected interval between two blocks of the same shard
const BLOCK_TIME: Duration = Duration::from_secs(6);

/// Configuration of the block state-access consumer
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerConfig {
    /// Name of the fanout exchange the node publishes to
    pub exchange: String,
    /// Name of the logical queue the consumer pool competes on
    pub queue_name: String,
    /// Name of the dead-letter exchange receiving failed messages
    pub dead_letter_exchange: String,
    /// Shard id of the metachain; its messages are acknowledged unprocessed
    pub metachain_shard_id: u32,
    /// Shards whose progress markers the freshness check considers
    pub tracked_shards: Vec<u32>,
    /// Time-to-live of the per-shard progress marker
    pub progress_ttl: Duration,
    /// Tolerated lag of the oldest progress marker before the consumer is
    /// reported as stale
    pub max_freshness_lag: Duration,
    /// Number of competing worker threads draining the queue
    pub worker_count: usize,
    /// Bound of the delivery channel; unbounded when `None`
    pub channel_capacity: Option<usize>,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            exchange: "state_accesses".to_string(),
            queue_name: "api_state_accesses_queue".to_string(),
            dead_letter_exchange: "api_state_accesses_queue_dlx".to_string(),
            metachain_shard_id: METACHAIN_SHARD_ID,
            tracked_shards: vec![0, 1, 2],
            progress_ttl: Duration::from_secs(300),
            max_freshness_lag: BLOCK_TIME,
            worker_count: 1,
            channel_capacity: None,
        }
    }
}
