// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! This crate turns the raw state accesses of one account within one block
//! into its canonical reconciled state.
//!
//! ## `decoder.rs`
//! Decodes the two binary trie leaf formats: the account record and the
//! token ledger entry. Decode failures are non-fatal; they are logged and
//! the faulty leaf contributes no state.
//!
//! ## `final_account_state.rs`
//! The reconciliation algorithm: collapses the ordered access list into at
//! most one account state, one OR-combined change flag set, one
//! deduplicated token state per identifier and a sticky new-account flag.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod decoder;
mod final_account_state;

pub use decoder::{decode_account_state, decode_token_state};
pub use final_account_state::{reconcile_account, FinalAccountState};

#[cfg(test)]
mod tests;
