// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Token-ledger models: token classes, decoded token entries and the
//! storage-key grammar.

use crate::constants::{TOKEN_RANDOM_LENGTH, TOKEN_TICKER_MAX_LENGTH, TOKEN_TICKER_MIN_LENGTH};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Token class, as stored in the `type` field of a token ledger leaf.
///
/// The discriminants are the on-wire values; an out-of-range value is a
/// decode error, not a silent fallback.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    IntoPrimitive,
    Ord,
    PartialEq,
    PartialOrd,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum EsdtType {
    /// Fungible token
    Fungible = 0,
    /// Non-fungible token
    NonFungible = 1,
    /// Non-fungible token, v2 issuance
    NonFungibleV2 = 2,
    /// Semi-fungible token
    SemiFungible = 3,
    /// Meta token (fungible with NFT-style metadata)
    MetaFungible = 4,
    /// Dynamic non-fungible token
    DynamicNft = 5,
    /// Dynamic semi-fungible token
    DynamicSft = 6,
    /// Dynamic meta token
    DynamicMeta = 7,
}

/// A decoded token ledger entry for one account
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EsdtState {
    /// Token identifier; carries a `-nonceHex` suffix for non-zero nonces
    pub identifier: String,
    /// Token nonce, hex-encoded (`"00"` for plain fungible entries)
    pub nonce_hex: String,
    /// Token class
    pub esdt_type: EsdtType,
    /// Balance, as a decimal string of arbitrary precision
    pub value: String,
    /// Raw token properties, hex-encoded
    pub properties_hex: String,
    /// Raw reserved bytes, hex-encoded
    pub reserved_hex: String,
    /// Opaque token metadata sub-message, carried through unmodified
    pub token_meta_data: Option<Vec<u8>>,
}

impl EsdtState {
    /// Token nonce as an integer, decoded from its hex form
    pub fn nonce(&self) -> u64 {
        u64::from_str_radix(&self.nonce_hex, 16).unwrap_or_default()
    }

    /// Collection ticker: the identifier with its trailing `-nonceHex`
    /// suffix stripped (the identifier itself for fungible entries)
    pub fn collection(&self) -> String {
        match self.identifier.rfind('-') {
            Some(pos) if self.nonce_hex != "00" => self.identifier[..pos].to_string(),
            _ => self.identifier.clone(),
        }
    }
}

/// A parsed token storage key: the token identifier and its nonce
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenStorageKey {
    /// Token identifier (`TICKER-rrrrrr`), without any nonce suffix
    pub identifier: String,
    /// Nonce bytes in hex form; `"00"` when the key carries no nonce
    pub nonce_hex: String,
}

impl TokenStorageKey {
    /// Parses a raw token storage key (the trie key with its namespace
    /// prefix already stripped).
    ///
    /// The grammar is `TICKER '-' RANDOM(6) NONCE_BYTES*`. Whenever the key
    /// does not match (no separator, a ticker outside the 3..=10 length
    /// range, or a remainder too short to hold the random suffix plus at
    /// least one nonce byte), the whole key is taken as a plain fungible
    /// identifier with nonce `"00"`. This parser never fails.
    ///
    /// ## Example
    /// ```
    /// use statefeed_models::esdt::TokenStorageKey;
    ///
    /// let key = TokenStorageKey::parse(b"ALC-1q2w3e");
    /// assert_eq!(key.identifier, "ALC-1q2w3e");
    /// assert_eq!(key.nonce_hex, "00");
    ///
    /// let key = TokenStorageKey::parse(b"FOXSY-86ecfe\x01");
    /// assert_eq!(key.identifier, "FOXSY-86ecfe");
    /// assert_eq!(key.nonce_hex, "01");
    /// ```
    pub fn parse(raw: &[u8]) -> TokenStorageKey {
        let fallback = || TokenStorageKey {
            identifier: String::from_utf8_lossy(raw).into_owned(),
            nonce_hex: "00".to_string(),
        };

        let separator = match raw.iter().position(|b| *b == b'-') {
            Some(pos) => pos,
            None => return fallback(),
        };
        let ticker_len = separator;
        let remainder = &raw[separator + 1..];
        if !(TOKEN_TICKER_MIN_LENGTH..=TOKEN_TICKER_MAX_LENGTH).contains(&ticker_len)
            || remainder.is_empty()
            || remainder.len() < TOKEN_RANDOM_LENGTH + 1
        {
            return fallback();
        }

        let nonce_start = separator + 1 + TOKEN_RANDOM_LENGTH;
        let nonce_hex = hex::encode(&raw[nonce_start..]);
        TokenStorageKey {
            identifier: String::from_utf8_lossy(&raw[..nonce_start]).into_owned(),
            nonce_hex,
        }
    }

    /// The identifier under which the entry is keyed in the reconciled
    /// state: `identifier-nonceHex` for non-zero nonces, the plain
    /// identifier otherwise
    pub fn composite_identifier(&self) -> String {
        if self.nonce_hex != "00" {
            format!("{}-{}", self.identifier, self.nonce_hex)
        } else {
            self.identifier.clone()
        }
    }
}
