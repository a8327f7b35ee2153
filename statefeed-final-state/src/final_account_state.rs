// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Reconciliation of the ordered state accesses of one account.

use crate::decoder::{decode_account_state, decode_token_state};
use statefeed_models::account::{AccountChanges, AccountState, StateAccessOperations};
use statefeed_models::address::Address;
use statefeed_models::esdt::{EsdtState, EsdtType};
use statefeed_models::state_access::StateAccessEntry;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// The reconciled state of one account at the output of one block
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FinalAccountState {
    /// The winning account snapshot, if any access carried a decodable leaf
    pub account_state: Option<AccountState>,
    /// Change flags, OR-combined across every access
    pub account_changes: AccountChanges,
    /// Reconciled token states, bucketed by token class; an identifier
    /// appears at most once across all buckets
    pub esdt_states: BTreeMap<EsdtType, Vec<EsdtState>>,
    /// True if any access saved the account without a change mask, which is
    /// how the node reports a just-created account
    pub is_new_account: bool,
}

/// Collapses the ordered access list of one account into its final state.
///
/// The list order is chronological-ascending, so reconciliation walks it
/// forward and lets later accesses win:
/// - the most recent decodable account leaf provides the account state,
///   discarding earlier snapshots entirely;
/// - change flags OR-combine across all accesses;
/// - the new-account flag is sticky once set;
/// - token states deduplicate by identifier, most recent wins, with the
///   first-occurrence position preserved so the output is order-stable;
/// - data-trie changes of version 0 are unsupported and contribute nothing.
///
/// Reconciling the same list twice yields an identical result.
pub fn reconcile_account(address: &Address, accesses: &[StateAccessEntry]) -> FinalAccountState {
    let mut account_state: Option<AccountState> = None;
    let mut account_changes = AccountChanges::default();
    let mut is_new_account = false;
    // token states by identifier, plus the first-seen order of identifiers
    let mut latest_tokens: HashMap<String, EsdtState> = HashMap::new();
    let mut token_order: Vec<String> = Vec::new();

    for access in accesses {
        account_changes.merge(&AccountChanges::from_mask(access.account_changes));

        if access.account_changes.is_none()
            && access
                .operation
                .contains(StateAccessOperations::SAVE_ACCOUNT)
        {
            is_new_account = true;
        }

        if let Some(leaf) = &access.main_trie_val {
            if let Some(decoded) = decode_account_state(leaf) {
                account_state = Some(decoded);
            }
        }

        for change in access.data_trie_changes.iter().flatten() {
            if change.version == 0 {
                warn!("unsupported data-trie change version 0 for {}", address);
                continue;
            }
            if let Some(state) = decode_token_state(address, change) {
                if !latest_tokens.contains_key(&state.identifier) {
                    token_order.push(state.identifier.clone());
                }
                latest_tokens.insert(state.identifier.clone(), state);
            }
        }
    }

    let mut esdt_states: BTreeMap<EsdtType, Vec<EsdtState>> = BTreeMap::new();
    for identifier in token_order {
        if let Some(state) = latest_tokens.remove(&identifier) {
            esdt_states.entry(state.esdt_type).or_default().push(state);
        }
    }

    FinalAccountState {
        account_state,
        account_changes,
        esdt_states,
        is_new_account,
    }
}
