// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Worker pool draining the delivery channel.
//!
//! The channel plays the role of the logical queue of the transport: the
//! bridge feeding it fans deliveries out to a pool of competing worker
//! threads. A payload whose processing fails is handed to the dead-letter
//! channel together with the error, for the transport to route to the
//! dead-letter exchange.

use crate::consumer::BlockStateConsumer;
use crossbeam_channel::{Receiver, Sender};
use statefeed_consumer_exports::{
    AccountStoreController, ConsumerConfig, ConsumerError, ProgressCacheController,
};
use std::sync::Arc;
use std::thread;
use tracing::info;

/// Commands understood by the worker threads
enum ConsumerCommand {
    /// One raw queue payload to process
    Deliver(Vec<u8>),
    /// Stop the receiving worker thread
    Stop,
}

/// A payload whose processing failed, with the error that caused it
#[derive(Debug)]
pub struct DeadLetter {
    /// The raw payload, unmodified
    pub payload: Vec<u8>,
    /// Why processing failed
    pub error: ConsumerError,
}

/// Feeds queue payloads to the worker pool
#[derive(Clone)]
pub struct ConsumerInputSender {
    sender: Sender<ConsumerCommand>,
}

impl ConsumerInputSender {
    /// Enqueues one raw payload for processing by any available worker
    pub fn deliver(&self, payload: Vec<u8>) -> Result<(), ConsumerError> {
        self.sender
            .send(ConsumerCommand::Deliver(payload))
            .map_err(|_| ConsumerError::Channel("consumer workers are stopped".to_string()))
    }
}

/// Consumer manager used to stop the worker pool
pub trait ConsumerManager {
    /// Stop the worker threads.
    /// Note that we do not take self by value to consume it
    /// because it is not allowed to move out of `Box<dyn ConsumerManager>`
    fn stop(&mut self);
}

struct ConsumerManagerImpl {
    command_sender: Sender<ConsumerCommand>,
    thread_handles: Vec<thread::JoinHandle<()>>,
}

impl ConsumerManager for ConsumerManagerImpl {
    fn stop(&mut self) {
        info!("stopping state access consumer workers...");
        for _ in &self.thread_handles {
            // ignore send failures: the workers are already gone
            let _ = self.command_sender.send(ConsumerCommand::Stop);
        }
        for handle in self.thread_handles.drain(..) {
            handle
                .join()
                .expect("state access consumer thread panicked");
        }
        info!("state access consumer workers stopped");
    }
}

fn worker_loop(
    consumer: Arc<BlockStateConsumer>,
    command_receiver: Receiver<ConsumerCommand>,
    dead_letter_sender: Sender<DeadLetter>,
) {
    loop {
        match command_receiver.recv() {
            Ok(ConsumerCommand::Deliver(payload)) => {
                if let Err(error) = consumer.consume_payload(&payload) {
                    // the error is already logged; route the payload to the
                    // dead-letter side so the transport can take over
                    let _ = dead_letter_sender.send(DeadLetter { payload, error });
                }
            }
            Ok(ConsumerCommand::Stop) | Err(_) => break,
        }
    }
}

/// Launches the consumer worker pool.
///
/// Returns the manager used to stop the pool, the sender feeding it
/// payloads, and the receiving end of the dead-letter channel.
pub fn start_consumer_worker(
    config: ConsumerConfig,
    store: Box<dyn AccountStoreController>,
    progress: Box<dyn ProgressCacheController>,
) -> (
    Box<dyn ConsumerManager>,
    ConsumerInputSender,
    Receiver<DeadLetter>,
) {
    let (command_sender, command_receiver) = match config.channel_capacity {
        Some(capacity) => crossbeam_channel::bounded(capacity),
        None => crossbeam_channel::unbounded(),
    };
    let (dead_letter_sender, dead_letter_receiver) = crossbeam_channel::unbounded();

    let worker_count = config.worker_count.max(1);
    let consumer = Arc::new(BlockStateConsumer::new(config, store, progress));

    let mut thread_handles = Vec::with_capacity(worker_count);
    for i in 0..worker_count {
        let consumer = consumer.clone();
        let command_receiver = command_receiver.clone();
        let dead_letter_sender = dead_letter_sender.clone();
        let thread_builder = thread::Builder::new().name(format!("state_access_consumer_{}", i));
        let handle = thread_builder
            .spawn(move || worker_loop(consumer, command_receiver, dead_letter_sender))
            .expect("failed to spawn thread : state_access_consumer");
        thread_handles.push(handle);
    }

    let manager = ConsumerManagerImpl {
        command_sender: command_sender.clone(),
        thread_handles,
    };

    (
        Box::new(manager),
        ConsumerInputSender {
            sender: command_sender,
        },
        dead_letter_receiver,
    )
}
