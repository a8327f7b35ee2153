// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! The block state-access consumer. One inbound message carries every state
//! access of one block on one shard; processing it reconciles the touched
//! accounts, upserts the resulting rows as one batch and records the
//! per-shard progress marker. Any failure is surfaced to the transport so
//! the message is redelivered; no partial progress is recorded.
//!
//! ## `consumer.rs`
//! The synchronous per-message pipeline and the freshness check.
//!
//! ## `worker.rs`
//! A pool of competing worker threads draining the delivery channel, with a
//! dead-letter channel for messages that fail processing.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod consumer;
mod worker;

pub use consumer::BlockStateConsumer;
pub use worker::{
    start_consumer_worker, ConsumerInputSender, ConsumerManager, DeadLetter,
};

#[cfg(test)]
mod tests;
