// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Decoded account snapshot and the flag sets attached to state accesses.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// A decoded account-trie leaf.
///
/// Byte-derived fields that decode to an empty value are omitted (`None`)
/// so that the record only asserts what is actually known.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    /// Account nonce
    pub nonce: u64,
    /// Main balance, as a decimal string of arbitrary precision
    pub balance: String,
    /// Accumulated developer reward, as a decimal string
    pub developer_reward: String,
    /// Account address
    pub address: Option<Address>,
    /// Owner address, for contract accounts
    pub owner_address: Option<Address>,
    /// Code hash, base64-encoded
    pub code_hash: Option<String>,
    /// Root hash of the account data trie, base64-encoded
    pub root_hash: Option<String>,
    /// Registered username, hex-encoded
    pub user_name: Option<String>,
    /// Code metadata, hex-encoded
    pub code_metadata: Option<String>,
}

/// Bit table of the account-change mask. All mask handling goes through
/// these constants; no other module hard-codes a bit position.
mod change_bits {
    pub const NONCE: u32 = 0x01;
    pub const BALANCE: u32 = 0x02;
    pub const CODE_HASH: u32 = 0x04;
    pub const ROOT_HASH: u32 = 0x08;
    pub const DEVELOPER_REWARD: u32 = 0x10;
    pub const OWNER_ADDRESS: u32 = 0x20;
    pub const USER_NAME: u32 = 0x40;
    pub const CODE_METADATA: u32 = 0x80;
}

/// Which account fields changed during a state access.
///
/// Flags from multiple accesses of the same account combine with a logical
/// OR through [`AccountChanges::merge`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AccountChanges {
    /// nonce changed
    pub nonce_changed: bool,
    /// balance changed
    pub balance_changed: bool,
    /// code hash changed
    pub code_hash_changed: bool,
    /// root hash changed
    pub root_hash_changed: bool,
    /// developer reward changed
    pub developer_reward_changed: bool,
    /// owner address changed
    pub owner_address_changed: bool,
    /// username changed
    pub user_name_changed: bool,
    /// code metadata changed
    pub code_metadata_changed: bool,
}

impl AccountChanges {
    /// Expands a raw change mask into named flags; an absent mask behaves
    /// like a zero mask
    pub fn from_mask(mask: Option<u32>) -> AccountChanges {
        let mask = mask.unwrap_or(0);
        AccountChanges {
            nonce_changed: mask & change_bits::NONCE != 0,
            balance_changed: mask & change_bits::BALANCE != 0,
            code_hash_changed: mask & change_bits::CODE_HASH != 0,
            root_hash_changed: mask & change_bits::ROOT_HASH != 0,
            developer_reward_changed: mask & change_bits::DEVELOPER_REWARD != 0,
            owner_address_changed: mask & change_bits::OWNER_ADDRESS != 0,
            user_name_changed: mask & change_bits::USER_NAME != 0,
            code_metadata_changed: mask & change_bits::CODE_METADATA != 0,
        }
    }

    /// OR-combines another flag set into this one
    pub fn merge(&mut self, other: &AccountChanges) {
        self.nonce_changed |= other.nonce_changed;
        self.balance_changed |= other.balance_changed;
        self.code_hash_changed |= other.code_hash_changed;
        self.root_hash_changed |= other.root_hash_changed;
        self.developer_reward_changed |= other.developer_reward_changed;
        self.owner_address_changed |= other.owner_address_changed;
        self.user_name_changed |= other.user_name_changed;
        self.code_metadata_changed |= other.code_metadata_changed;
    }
}

/// Bitmask of the low-level trie operations performed by a state access
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateAccessOperations(pub u32);

impl StateAccessOperations {
    /// read contract code
    pub const GET_CODE: u32 = 0x01;
    /// persist the account record
    pub const SAVE_ACCOUNT: u32 = 0x02;
    /// read the account record
    pub const GET_ACCOUNT: u32 = 0x04;
    /// write contract code
    pub const WRITE_CODE: u32 = 0x08;
    /// remove a data-trie entry
    pub const REMOVE_DATA_TRIE: u32 = 0x10;
    /// read a data-trie value
    pub const GET_DATA_TRIE_VALUE: u32 = 0x20;

    /// True if every bit of `ops` is set in this mask
    pub fn contains(&self, ops: u32) -> bool {
        self.0 & ops == ops
    }
}

/// Bit table of the hex code-metadata field
mod metadata_bits {
    pub const PAYABLE: u32 = 0x0002;
    pub const PAYABLE_BY_SC: u32 = 0x0004;
    pub const UPGRADEABLE: u32 = 0x0100;
    pub const READABLE: u32 = 0x0400;
    pub const GUARDED: u32 = 0x0800;
}

/// Flags carried by the code-metadata field of an account record
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodeMetadataFlags {
    /// contract can be upgraded by its owner
    pub upgradeable: bool,
    /// contract storage can be read externally
    pub readable: bool,
    /// contract accepts direct payments
    pub payable: bool,
    /// contract accepts payments from other contracts
    pub payable_by_sc: bool,
    /// wallet is protected by a guardian
    pub guarded: bool,
}

impl CodeMetadataFlags {
    /// Parses the hex code-metadata field; `None` for an absent/empty field
    /// or non-hex content
    pub fn from_hex(hex_str: &str) -> Option<CodeMetadataFlags> {
        if hex_str.is_empty() {
            return None;
        }
        let value = u32::from_str_radix(hex_str, 16).ok()?;
        Some(CodeMetadataFlags {
            upgradeable: value & metadata_bits::UPGRADEABLE != 0,
            readable: value & metadata_bits::READABLE != 0,
            payable: value & metadata_bits::PAYABLE != 0,
            payable_by_sc: value & metadata_bits::PAYABLE_BY_SC != 0,
            guarded: value & metadata_bits::GUARDED != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_absent_masks_decode_identically() {
        assert_eq!(AccountChanges::from_mask(None), AccountChanges::default());
        assert_eq!(
            AccountChanges::from_mask(Some(0)),
            AccountChanges::default()
        );
    }

    #[test]
    fn test_mask_bits_map_to_flags() {
        let changes = AccountChanges::from_mask(Some(0x02 | 0x40));
        assert!(changes.balance_changed);
        assert!(changes.user_name_changed);
        assert!(!changes.nonce_changed);
        assert!(!changes.code_hash_changed);
        assert!(!changes.root_hash_changed);
        assert!(!changes.developer_reward_changed);
        assert!(!changes.owner_address_changed);
        assert!(!changes.code_metadata_changed);

        // 24 = root hash + developer reward
        let changes = AccountChanges::from_mask(Some(24));
        assert!(changes.root_hash_changed);
        assert!(changes.developer_reward_changed);
        assert!(!changes.balance_changed);
    }

    #[test]
    fn test_merge_is_a_logical_or() {
        let mut merged = AccountChanges::from_mask(Some(0x01));
        merged.merge(&AccountChanges::from_mask(Some(0x08)));
        assert!(merged.nonce_changed);
        assert!(merged.root_hash_changed);
        assert!(!merged.balance_changed);
    }

    #[test]
    fn test_operation_mask() {
        let ops = StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT);
        assert!(ops.contains(StateAccessOperations::SAVE_ACCOUNT));
        assert!(!ops.contains(StateAccessOperations::GET_CODE));
    }

    #[test]
    fn test_code_metadata_flags() {
        // 0x0800 = guarded
        let flags = CodeMetadataFlags::from_hex("0800").unwrap();
        assert!(flags.guarded);
        assert!(!flags.upgradeable);
        // 0x0506 = upgradeable + readable + payable + payable_by_sc
        let flags = CodeMetadataFlags::from_hex("0506").unwrap();
        assert!(flags.upgradeable);
        assert!(flags.readable);
        assert!(flags.payable);
        assert!(flags.payable_by_sc);
        assert!(CodeMetadataFlags::from_hex("").is_none());
    }
}
