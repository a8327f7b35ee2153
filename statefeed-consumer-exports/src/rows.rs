// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Shapes of the rows handed to the account store.

use serde::{Deserialize, Serialize};
use statefeed_models::address::Address;
use statefeed_models::esdt::EsdtType;

/// Store-level class of a fungible token balance
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TokenType {
    /// Plain fungible token
    #[serde(rename = "FungibleESDT")]
    FungibleEsdt,
}

/// Store-level class of an NFT-family balance
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum NftType {
    /// Non-fungible token
    #[serde(rename = "NonFungibleESDT")]
    NonFungibleEsdt,
    /// Semi-fungible token
    #[serde(rename = "SemiFungibleESDT")]
    SemiFungibleEsdt,
    /// Meta token
    #[serde(rename = "MetaESDT")]
    MetaEsdt,
}

impl NftType {
    /// Store-level NFT class of a token class; `None` for fungible tokens
    pub fn from_esdt_type(esdt_type: EsdtType) -> Option<NftType> {
        match esdt_type {
            EsdtType::Fungible => None,
            EsdtType::NonFungible | EsdtType::NonFungibleV2 | EsdtType::DynamicNft => {
                Some(NftType::NonFungibleEsdt)
            }
            EsdtType::SemiFungible | EsdtType::DynamicSft => Some(NftType::SemiFungibleEsdt),
            EsdtType::MetaFungible | EsdtType::DynamicMeta => Some(NftType::MetaEsdt),
        }
    }
}

/// Store-level subtype refining [`NftType`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum NftSubType {
    /// No subtype (fungible tokens)
    #[default]
    #[serde(rename = "")]
    None,
    /// Non-fungible token
    #[serde(rename = "NonFungibleESDT")]
    NonFungibleEsdt,
    /// Non-fungible token, v2 issuance
    #[serde(rename = "NonFungibleESDTv2")]
    NonFungibleEsdtV2,
    /// Dynamic non-fungible token
    #[serde(rename = "DynamicNonFungibleESDT")]
    DynamicNonFungibleEsdt,
    /// Semi-fungible token
    #[serde(rename = "SemiFungibleESDT")]
    SemiFungibleEsdt,
    /// Dynamic semi-fungible token
    #[serde(rename = "DynamicSemiFungibleESDT")]
    DynamicSemiFungibleEsdt,
    /// Meta token
    #[serde(rename = "MetaESDT")]
    MetaEsdt,
    /// Dynamic meta token
    #[serde(rename = "DynamicMetaESDT")]
    DynamicMetaEsdt,
}

impl NftSubType {
    /// Store-level subtype of a token class
    pub fn from_esdt_type(esdt_type: EsdtType) -> NftSubType {
        match esdt_type {
            EsdtType::Fungible => NftSubType::None,
            EsdtType::NonFungible => NftSubType::NonFungibleEsdt,
            EsdtType::NonFungibleV2 => NftSubType::NonFungibleEsdtV2,
            EsdtType::DynamicNft => NftSubType::DynamicNonFungibleEsdt,
            EsdtType::SemiFungible => NftSubType::SemiFungibleEsdt,
            EsdtType::DynamicSft => NftSubType::DynamicSemiFungibleEsdt,
            EsdtType::MetaFungible => NftSubType::MetaEsdt,
            EsdtType::DynamicMeta => NftSubType::DynamicMetaEsdt,
        }
    }
}

/// One fungible token balance of an account row
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenBalanceRow {
    /// Token identifier
    pub identifier: String,
    /// Token nonce
    pub nonce: u64,
    /// Balance, decimal string
    pub balance: String,
    /// Store-level token class
    pub token_type: TokenType,
    /// Store-level subtype; always `None` for fungible balances
    pub sub_type: NftSubType,
}

/// One NFT-family balance of an account row
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NftBalanceRow {
    /// Token identifier, including the nonce suffix
    pub identifier: String,
    /// Token nonce
    pub nonce: u64,
    /// Store-level NFT class
    pub nft_type: NftType,
    /// Store-level subtype
    pub sub_type: NftSubType,
    /// Collection ticker (identifier without the nonce suffix)
    pub collection: String,
    /// Balance, decimal string
    pub balance: String,
}

/// One reconciled account, in the shape the store upserts
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AccountRow {
    /// Account address
    pub address: Address,
    /// Account nonce
    pub nonce: u64,
    /// Main balance, decimal string
    pub balance: String,
    /// Accumulated developer reward, decimal string
    pub developer_reward: String,
    /// Owner address, for contract accounts
    pub owner_address: Option<Address>,
    /// Registered username, hex-encoded
    pub user_name: Option<String>,
    /// Code hash, base64-encoded
    pub code_hash: Option<String>,
    /// Root hash, base64-encoded
    pub root_hash: Option<String>,
    /// Shard that produced the block
    pub shard: u32,
    /// Block timestamp, milliseconds
    pub timestamp_ms: u64,
    /// Block timestamp, seconds
    pub timestamp: u64,
    /// Wallet guardian flag, from the code metadata
    pub is_guarded: Option<bool>,
    /// Contract upgradeability flag, from the code metadata
    pub is_upgradeable: Option<bool>,
    /// Contract readability flag, from the code metadata
    pub is_readable: Option<bool>,
    /// Contract payability flag, from the code metadata
    pub is_payable: Option<bool>,
    /// Contract payable-by-contract flag, from the code metadata
    pub is_payable_by_sc: Option<bool>,
    /// Fungible token balances touched by the block
    pub tokens: Vec<TokenBalanceRow>,
    /// NFT-family balances touched by the block
    pub nfts: Vec<NftBalanceRow>,
}
