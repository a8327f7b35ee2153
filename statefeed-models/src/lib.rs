// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! This crate defines the domain models shared by the statefeed crates:
//!
//! ## `address.rs`
//! The raw 32-byte account address and its bech32 human-readable form,
//! including contract-address classification.
//!
//! ## `esdt.rs`
//! Token-ledger models: the token-class enum, the decoded token ledger
//! entry, and the token storage-key parser.
//!
//! ## `account.rs`
//! The decoded account snapshot, the account-change flag set with its
//! centralized bit table, the trie operation bitmask and the code-metadata
//! flags.
//!
//! ## `state_access.rs`
//! The raw per-block state-access message as delivered by the queue.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub mod account;
pub mod address;
pub mod constants;
pub mod error;
pub mod esdt;
pub mod state_access;

pub use error::ModelsError;
