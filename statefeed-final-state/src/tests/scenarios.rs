// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Scenario tests built on leaf blobs captured from a mainnet-compatible
//! node, plus property tests pinning the reconciliation contract.

use crate::{decode_account_state, decode_token_state, reconcile_account, FinalAccountState};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use statefeed_models::account::StateAccessOperations;
use statefeed_models::address::Address;
use statefeed_models::esdt::EsdtType;
use statefeed_models::state_access::{
    DataTrieChange, DataTrieChangeOperation, StateAccessEntry,
};
use std::str::FromStr;

/// Wallet account record: nonce 0, non-zero balance and reward, no username
const WALLET_LEAF_B64: &str = "EgoABtuSP3tqxyU+GiCFwOGSJGrw8HkLeDkHs5wxnTbRY6P4C446d2BIMwFnjyIgo7jh8DROSNY3jtZL6vVOdbo/PP+O+6q/7dB+r0GfmDwqIAAAAAAAAAAABQCTvw9+sklA7qZm53+p9b3ttaRSUskZMgkAIko5RBEBXgA6IN7lba/irh34wYBfK8KRIY7O4AQNJba8jH/P1hXXPckZSgIBAA==";

/// Contract account record: zero balance, developer reward accumulated
const CONTRACT_LEAF_B64: &str = "EgIAABog9S1Hs2tTj7zA+JLDTnD29ncfZtRsxevT36irfG9yrWIiIBEmI7nptDIBxcYWKgu6Jou5jHnvmOIOj1vjVDHFPMX3KiAAAAAAAAAAAAUAdK2SFnPMf/WJ1mjgCM+/MBDJ1h2IFzIIACD1dWNCKQA6IE+qi6TxMzNnwNuQ8fhDq6VBoT9FgTUSb6bVix2DrIgXSgIFAA==";

/// Token ledger entry for MEX-a659d0, fungible, large balance
const MEX_LEAF_B64: &str = "EgwAb//xm2Vec+YQplg=";

/// Token ledger entry for FOXSY-86ecfe, fungible, balance 10^18
const FOXSY_LEAF_B64: &str = "EgkADeC2s6dkAAA=";

fn test_address() -> Address {
    Address::from_str("erd1dwkr89z4mmqxxgrv0ks62pccmqsheqq3zjwpa7r7fh6v5dgnrmjs8a9wng").unwrap()
}

fn write_change(key: &[u8], val_b64: &str) -> DataTrieChange {
    DataTrieChange {
        change_type: 1,
        key: key.to_vec(),
        val: Some(BASE64.decode(val_b64).unwrap()),
        version: 1,
        operation: DataTrieChangeOperation::Write,
    }
}

fn delete_change(key: &[u8], val_b64: &str) -> DataTrieChange {
    DataTrieChange {
        operation: DataTrieChangeOperation::Delete,
        ..write_change(key, val_b64)
    }
}

#[test]
fn test_decode_wallet_account_leaf() {
    let leaf = BASE64.decode(WALLET_LEAF_B64).unwrap();
    let state = decode_account_state(&leaf).unwrap();
    assert_eq!(state.nonce, 0);
    assert_eq!(state.balance, "126502242682468246846");
    assert_eq!(state.developer_reward, "2470850310072000000");
    assert_eq!(
        state.address.unwrap().to_string(),
        "erd1qqqqqqqqqqqqqpgqjwls7l4jf9qwafnxual6nadaak66g5jjeyvs9dswkt"
    );
    assert_eq!(
        state.owner_address.unwrap().to_string(),
        "erd1mmjkmtlz4cwl3svqtu4u9yfp3m8wqpqdykmterrleltpt4eaeyvsa68xa7"
    );
    assert_eq!(
        state.code_hash.as_deref(),
        Some("hcDhkiRq8PB5C3g5B7OcMZ020WOj+AuOOndgSDMBZ48=")
    );
    assert_eq!(
        state.root_hash.as_deref(),
        Some("o7jh8DROSNY3jtZL6vVOdbo/PP+O+6q/7dB+r0GfmDw=")
    );
    assert_eq!(state.code_metadata.as_deref(), Some("0100"));
    // empty username must be omitted, not present as an empty string
    assert_eq!(state.user_name, None);
}

#[test]
fn test_decode_malformed_account_leaf() {
    // truncated varint: a decode failure, not a panic
    assert!(decode_account_state(&[0x08]).is_none());
}

#[test]
fn test_decode_token_leaf() {
    let change = write_change(b"ELRONDesdtMEX-a659d0", MEX_LEAF_B64);
    let state = decode_token_state(&test_address(), &change).unwrap();
    assert_eq!(state.identifier, "MEX-a659d0");
    assert_eq!(state.nonce_hex, "00");
    assert_eq!(state.esdt_type, EsdtType::Fungible);
    assert_eq!(state.value, "135399426293137262324524632");
    assert_eq!(state.properties_hex, "");
    assert_eq!(state.reserved_hex, "");
    assert_eq!(state.token_meta_data, None);
}

#[test]
fn test_decode_token_leaf_outside_namespace() {
    let change = write_change(b"BADKEY", "AA==");
    assert!(decode_token_state(&test_address(), &change).is_none());
}

#[test]
fn test_delete_forces_zero_value() {
    // the leaf still carries the pre-delete balance of 10^18
    let change = delete_change(b"ELRONDesdtFOXSY-86ecfe", FOXSY_LEAF_B64);
    let state = decode_token_state(&test_address(), &change).unwrap();
    assert_eq!(state.value, "0");
}

#[test]
fn test_unknown_token_class_is_skipped() {
    // field 1 (Type) = 200, out of the declared range
    let change = DataTrieChange {
        change_type: 1,
        key: b"ELRONDesdtMEX-a659d0".to_vec(),
        val: Some(vec![0x08, 0xc8, 0x01]),
        version: 1,
        operation: DataTrieChangeOperation::Write,
    };
    assert!(decode_token_state(&test_address(), &change).is_none());
}

#[test]
fn test_reconcile_contract_block_accesses() {
    // one save-account access carrying a token write, its deletion, and a
    // non-token data-trie write that must be ignored
    let accesses = vec![StateAccessEntry {
        access_type: 1,
        index: 1,
        tx_hash: "zvAPJGf0O/fbqGo5eq9kqs2AguViaEYvyEZmiTQDDwE=".to_string(),
        main_trie_key: None,
        main_trie_val: Some(BASE64.decode(CONTRACT_LEAF_B64).unwrap()),
        operation: StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT),
        account_changes: Some(24),
        data_trie_changes: Some(vec![
            write_change(b"ELRONDesdtFOXSY-86ecfe", FOXSY_LEAF_B64),
            delete_change(b"ELRONDesdtFOXSY-86ecfe", FOXSY_LEAF_B64),
            write_change(b"tournaments\x00\x00\x02\x9c\xf8", "AAAAApz4AAAAAGkLbEg="),
        ]),
    }];

    let final_state = reconcile_account(&test_address(), &accesses);

    let account = final_state.account_state.unwrap();
    assert_eq!(account.nonce, 0);
    assert_eq!(account.balance, "0");
    assert_eq!(account.developer_reward, "9277083780000000");
    assert_eq!(
        account.address.unwrap().to_string(),
        "erd1qqqqqqqqqqqqqpgqwjkey9nne3lltzwkdrsq3nalxqgvn4sa3qtse7d6nx"
    );
    assert_eq!(
        account.owner_address.unwrap().to_string(),
        "erd1f74ghf83xvek0sxmjrclssat54q6z069sy63ymax6k93mqav3qtsp2rv0l"
    );
    assert_eq!(account.code_metadata.as_deref(), Some("0500"));

    // 24 = root hash + developer reward
    assert!(final_state.account_changes.root_hash_changed);
    assert!(final_state.account_changes.developer_reward_changed);
    assert!(!final_state.account_changes.balance_changed);

    // a change mask was present, so this is not a new account
    assert!(!final_state.is_new_account);

    // the FOXSY write/delete pair collapses to a single zero-value entry;
    // the non-token key contributes nothing
    assert_eq!(final_state.esdt_states.len(), 1);
    let fungible = &final_state.esdt_states[&EsdtType::Fungible];
    assert_eq!(fungible.len(), 1);
    assert_eq!(fungible[0].identifier, "FOXSY-86ecfe");
    assert_eq!(fungible[0].value, "0");
}

#[test]
fn test_reconcile_previously_unseen_account_with_token_write() {
    // a save-account access with no change mask and one token write
    let accesses = vec![StateAccessEntry {
        main_trie_val: Some(BASE64.decode(WALLET_LEAF_B64).unwrap()),
        operation: StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT),
        account_changes: None,
        data_trie_changes: Some(vec![write_change(b"ELRONDesdtTKN-abcdef", "EgMAA+g=")]),
        ..Default::default()
    }];
    let final_state = reconcile_account(&test_address(), &accesses);
    assert!(final_state.is_new_account);
    assert_eq!(
        final_state.account_state.as_ref().unwrap().balance,
        "126502242682468246846"
    );
    let fungible = &final_state.esdt_states[&EsdtType::Fungible];
    assert_eq!(fungible.len(), 1);
    assert_eq!(fungible[0].identifier, "TKN-abcdef");
    assert_eq!(fungible[0].value, "1000");
}

#[test]
fn test_reconcile_is_idempotent() {
    let accesses = vec![
        StateAccessEntry {
            main_trie_val: Some(BASE64.decode(WALLET_LEAF_B64).unwrap()),
            operation: StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT),
            data_trie_changes: Some(vec![write_change(
                b"ELRONDesdtMEX-a659d0",
                MEX_LEAF_B64,
            )]),
            ..Default::default()
        },
        StateAccessEntry {
            account_changes: Some(0x02),
            ..Default::default()
        },
    ];
    let first = reconcile_account(&test_address(), &accesses);
    let second = reconcile_account(&test_address(), &accesses);
    assert_eq!(first, second);
}

#[test]
fn test_most_recent_decodable_account_state_wins() {
    let accesses = vec![
        StateAccessEntry {
            // malformed leaf: skipped, does not abort the rest
            main_trie_val: Some(vec![0x08]),
            ..Default::default()
        },
        StateAccessEntry {
            main_trie_val: Some(BASE64.decode(WALLET_LEAF_B64).unwrap()),
            ..Default::default()
        },
    ];
    let final_state = reconcile_account(&test_address(), &accesses);
    assert_eq!(
        final_state.account_state,
        decode_account_state(&BASE64.decode(WALLET_LEAF_B64).unwrap())
    );
}

#[test]
fn test_token_dedup_keeps_last_value() {
    let accesses = vec![
        StateAccessEntry {
            data_trie_changes: Some(vec![write_change(
                b"ELRONDesdtFOXSY-86ecfe",
                FOXSY_LEAF_B64,
            )]),
            ..Default::default()
        },
        StateAccessEntry {
            data_trie_changes: Some(vec![write_change(
                b"ELRONDesdtFOXSY-86ecfe",
                // value 1000
                "EgMAA+g=",
            )]),
            ..Default::default()
        },
    ];
    let final_state = reconcile_account(&test_address(), &accesses);
    let fungible = &final_state.esdt_states[&EsdtType::Fungible];
    assert_eq!(fungible.len(), 1);
    assert_eq!(fungible[0].value, "1000");
}

#[test]
fn test_new_account_flag_is_sticky() {
    let accesses = vec![
        StateAccessEntry {
            account_changes: None,
            operation: StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT),
            ..Default::default()
        },
        StateAccessEntry {
            // a later access with a mask does not clear the flag
            account_changes: Some(0x01),
            operation: StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT),
            ..Default::default()
        },
    ];
    let final_state = reconcile_account(&test_address(), &accesses);
    assert!(final_state.is_new_account);
    // and flags from all accesses are still OR-combined
    assert!(final_state.account_changes.nonce_changed);
}

#[test]
fn test_save_account_with_mask_is_not_new() {
    let accesses = vec![StateAccessEntry {
        account_changes: Some(0x02),
        operation: StateAccessOperations(StateAccessOperations::SAVE_ACCOUNT),
        ..Default::default()
    }];
    assert!(!reconcile_account(&test_address(), &accesses).is_new_account);
}

#[test]
fn test_version_zero_changes_contribute_nothing() {
    let mut change = write_change(b"ELRONDesdtMEX-a659d0", MEX_LEAF_B64);
    change.version = 0;
    let accesses = vec![StateAccessEntry {
        account_changes: Some(0x02),
        data_trie_changes: Some(vec![change]),
        ..Default::default()
    }];
    let final_state = reconcile_account(&test_address(), &accesses);
    assert!(final_state.esdt_states.is_empty());
    // the access still participates in flag reconciliation
    assert!(final_state.account_changes.balance_changed);
}

#[test]
fn test_empty_access_list() {
    let final_state = reconcile_account(&test_address(), &[]);
    assert_eq!(final_state, FinalAccountState::default());
}
