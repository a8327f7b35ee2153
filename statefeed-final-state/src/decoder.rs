// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Decoders for the two trie leaf formats.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use num::BigInt;
use prost::Message;
use statefeed_models::account::AccountState;
use statefeed_models::address::Address;
use statefeed_models::constants::ESDT_KEY_PREFIX;
use statefeed_models::esdt::{EsdtState, EsdtType, TokenStorageKey};
use statefeed_models::state_access::{DataTrieChange, DataTrieChangeOperation};
use statefeed_models::ModelsError;
use statefeed_proto::trie::v1::{EsDigitalToken, UserAccountData};
use statefeed_serialization::{BigIntDeserializer, DeserializeError, Deserializer};
use tracing::warn;

/// Decodes a sign-magnitude big integer field into its decimal string form
fn decode_big_int(bytes: &[u8]) -> String {
    let value: BigInt = BigIntDeserializer::new()
        .deserialize::<DeserializeError>(bytes)
        .expect("big integer decoding is total")
        .1;
    value.to_string()
}

fn non_empty_base64(bytes: &[u8]) -> Option<String> {
    (!bytes.is_empty()).then(|| BASE64.encode(bytes))
}

fn non_empty_hex(bytes: &[u8]) -> Option<String> {
    (!bytes.is_empty()).then(|| hex::encode(bytes))
}

fn non_empty_address(bytes: &[u8]) -> Result<Option<Address>, ModelsError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    Address::from_bytes(bytes).map(Some)
}

/// Decodes an account-trie leaf into an [`AccountState`].
///
/// Returns `None` on any malformed leaf: the failure is logged at warning
/// level and must not abort the processing of the remaining accesses.
pub fn decode_account_state(leaf: &[u8]) -> Option<AccountState> {
    match try_decode_account_state(leaf) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!("could not decode account-trie leaf: {}", err);
            None
        }
    }
}

fn try_decode_account_state(leaf: &[u8]) -> Result<AccountState, ModelsError> {
    let record = UserAccountData::decode(leaf)
        .map_err(|err| ModelsError::DeserializeError(err.to_string()))?;
    Ok(AccountState {
        nonce: record.nonce,
        balance: decode_big_int(&record.balance),
        developer_reward: decode_big_int(&record.developer_reward),
        address: non_empty_address(&record.address)?,
        owner_address: non_empty_address(&record.owner_address)?,
        code_hash: non_empty_base64(&record.code_hash),
        root_hash: non_empty_base64(&record.root_hash),
        user_name: non_empty_hex(&record.user_name),
        code_metadata: non_empty_hex(&record.code_metadata),
    })
}

/// Decodes a data-trie change into an [`EsdtState`].
///
/// Keys outside the token-ledger namespace are not token data and yield
/// `None` without a warning; malformed leaves and unknown token classes
/// yield `None` with a warning. A deletion always yields value `"0"`, no
/// matter what the leaf bytes say.
pub fn decode_token_state(address: &Address, change: &DataTrieChange) -> Option<EsdtState> {
    let stripped = change.key.strip_prefix(ESDT_KEY_PREFIX)?;
    match try_decode_token_state(stripped, change) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!("could not decode token leaf for {}: {}", address, err);
            None
        }
    }
}

fn try_decode_token_state(
    stripped_key: &[u8],
    change: &DataTrieChange,
) -> Result<EsdtState, ModelsError> {
    let storage_key = TokenStorageKey::parse(stripped_key);
    let leaf = change.val.as_deref().unwrap_or_default();
    let record = EsDigitalToken::decode(leaf)
        .map_err(|err| ModelsError::DeserializeError(err.to_string()))?;
    let esdt_type = EsdtType::try_from(record.r#type)
        .map_err(|_| ModelsError::UnknownTokenType(record.r#type))?;

    // a deleted entry is a zero balance, never the stale pre-delete value
    let value = if change.operation == DataTrieChangeOperation::Delete {
        "0".to_string()
    } else {
        decode_big_int(&record.value)
    };

    Ok(EsdtState {
        identifier: storage_key.composite_identifier(),
        nonce_hex: storage_key.nonce_hex,
        esdt_type,
        value,
        properties_hex: hex::encode(&record.properties),
        reserved_hex: hex::encode(&record.reserved),
        token_meta_data: (!record.token_meta_data.is_empty()).then_some(record.token_meta_data),
    })
}
