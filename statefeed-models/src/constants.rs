// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Protocol-level constants, centralized so that no module re-derives them.

/// Size of a raw account address, in bytes
pub const ADDRESS_SIZE_BYTES: usize = 32;

/// Human-readable part of the bech32 address encoding
pub const ADDRESS_HRP: &str = "erd";

/// A contract address starts with this many zero bytes
pub const CONTRACT_ADDRESS_LEADING_ZEROS: usize = 8;

/// Namespace prefix of token-ledger entries in the account data trie
pub const ESDT_KEY_PREFIX: &[u8] = b"ELRONDesdt";

/// Minimum length of a token ticker
pub const TOKEN_TICKER_MIN_LENGTH: usize = 3;

/// Maximum length of a token ticker
pub const TOKEN_TICKER_MAX_LENGTH: usize = 10;

/// Length of the random suffix following the ticker in a token identifier
pub const TOKEN_RANDOM_LENGTH: usize = 6;

/// Shard id of the metachain; its blocks carry no user account state
pub const METACHAIN_SHARD_ID: u32 = u32::MAX;
