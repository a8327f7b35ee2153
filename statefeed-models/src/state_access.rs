// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Raw per-block state-access message, as delivered by the queue.
//!
//! One message describes every read/write the accounts of one shard
//! underwent during one block. Binary fields travel base64-encoded; account
//! keys are hex-encoded raw addresses.

use crate::account::StateAccessOperations;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;
use std::collections::BTreeMap;

/// All state accesses of one block on one shard
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStateChanges {
    /// Block hash
    pub hash: String,
    /// Shard that produced the block
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Block nonce
    #[serde(default)]
    pub nonce: u64,
    /// Block timestamp, in milliseconds
    pub timestamp_ms: u64,
    /// Ordered state accesses, keyed by hex-encoded account address
    #[serde(default)]
    pub state_accesses_per_accounts: BTreeMap<String, AccountStateAccesses>,
}

/// The ordered list of state accesses of one account
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStateAccesses {
    /// State accesses in chronological-ascending order
    #[serde(default)]
    pub state_access: Vec<StateAccessEntry>,
}

/// One logical state access of one account within a block
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateAccessEntry {
    /// Access type tag
    #[serde(rename = "type", default)]
    pub access_type: u32,
    /// Position of the access within the block
    #[serde(default)]
    pub index: u32,
    /// Hash of the originating transaction, opaque
    #[serde(default)]
    pub tx_hash: String,
    /// Account-trie key, opaque
    #[serde(default)]
    pub main_trie_key: Option<String>,
    /// Account-trie leaf bytes, absent for pure data-trie accesses
    #[serde_as(as = "Option<Base64>")]
    #[serde(default)]
    pub main_trie_val: Option<Vec<u8>>,
    /// Bitmask of the low-level trie operations performed
    #[serde(default)]
    pub operation: StateAccessOperations,
    /// Bitmask of the account fields that changed; absent when the node
    /// did not track field-level changes for this access
    #[serde(default)]
    pub account_changes: Option<u32>,
    /// Token-ledger mutations carried by this access
    #[serde(default)]
    pub data_trie_changes: Option<Vec<DataTrieChange>>,
}

/// One token-ledger mutation
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTrieChange {
    /// Change type tag
    #[serde(rename = "type", default)]
    pub change_type: u32,
    /// Raw trie key
    #[serde_as(as = "Base64")]
    pub key: Vec<u8>,
    /// Raw trie value, absent for some deletions
    #[serde_as(as = "Option<Base64>")]
    #[serde(default)]
    pub val: Option<Vec<u8>>,
    /// Change format version; version 0 is unsupported and skipped
    pub version: u32,
    /// Whether the entry was written or deleted
    #[serde(default)]
    pub operation: DataTrieChangeOperation,
}

/// Operation tag of a data-trie change
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    IntoPrimitive,
    PartialEq,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum DataTrieChangeOperation {
    /// The entry was written
    #[default]
    Write = 0,
    /// The entry was deleted
    Delete = 1,
}
