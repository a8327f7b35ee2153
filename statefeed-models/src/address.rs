// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Account address: 32 raw bytes, displayed in bech32 form.

use crate::constants::{ADDRESS_HRP, ADDRESS_SIZE_BYTES, CONTRACT_ADDRESS_LEADING_ZEROS};
use crate::error::ModelsError;
use bech32::{Bech32, Hrp};
use std::str::FromStr;

/// An account address as stored in the account trie
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Address([u8; ADDRESS_SIZE_BYTES]);

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hrp = Hrp::parse(ADDRESS_HRP).map_err(|_| std::fmt::Error)?;
        let encoded = bech32::encode::<Bech32>(hrp, &self.0).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", encoded)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Address {
    type Err = ModelsError;
    /// ## Example
    /// ```rust
    /// # use statefeed_models::address::Address;
    /// # use std::str::FromStr;
    /// let address =
    ///     Address::from_str("erd1qqqqqqqqqqqqqpgqwjkey9nne3lltzwkdrsq3nalxqgvn4sa3qtse7d6nx")
    ///         .unwrap();
    /// assert_eq!(
    ///     address.to_string(),
    ///     "erd1qqqqqqqqqqqqqpgqwjkey9nne3lltzwkdrsq3nalxqgvn4sa3qtse7d6nx"
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data) = bech32::decode(s).map_err(|_| ModelsError::AddressParseError)?;
        if hrp.to_string() != ADDRESS_HRP {
            return Err(ModelsError::AddressParseError);
        }
        let bytes: [u8; ADDRESS_SIZE_BYTES] = data
            .try_into()
            .map_err(|_| ModelsError::AddressParseError)?;
        Ok(Address(bytes))
    }
}

impl ::serde::Serialize for Address {
    fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(&self.to_string())
        } else {
            s.serialize_bytes(&self.0)
        }
    }
}

impl<'de> ::serde::Deserialize<'de> for Address {
    fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Address, D::Error> {
        if d.is_human_readable() {
            struct AddressVisitor;

            impl<'de> ::serde::de::Visitor<'de> for AddressVisitor {
                type Value = Address;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("hrp + bech32::encode(bytes)")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: ::serde::de::Error,
                {
                    Address::from_str(v).map_err(E::custom)
                }
            }
            d.deserialize_str(AddressVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> ::serde::de::Visitor<'de> for BytesVisitor {
                type Value = Address;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a bytestring")
                }

                fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
                where
                    E: ::serde::de::Error,
                {
                    Address::from_bytes(v).map_err(E::custom)
                }
            }
            d.deserialize_bytes(BytesVisitor)
        }
    }
}

impl Address {
    /// Builds an `Address` from raw bytes; fails unless exactly
    /// `ADDRESS_SIZE_BYTES` bytes are provided
    pub fn from_bytes(data: &[u8]) -> Result<Address, ModelsError> {
        let bytes: [u8; ADDRESS_SIZE_BYTES] = data
            .try_into()
            .map_err(|_| ModelsError::AddressParseError)?;
        Ok(Address(bytes))
    }

    /// Builds an `Address` from its hex form, as used for the per-account
    /// keys of the state-access message (an optional `0x` prefix is accepted)
    pub fn from_hex(hex_str: &str) -> Result<Address, ModelsError> {
        let clean = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let data = hex::decode(clean)?;
        Self::from_bytes(&data)
    }

    /// Gets the raw byte representation
    pub fn to_bytes(&self) -> &[u8; ADDRESS_SIZE_BYTES] {
        &self.0
    }

    /// True for contract addresses, which carry a zero-byte prefix instead
    /// of public-key material
    pub fn is_contract(&self) -> bool {
        self.0[..CONTRACT_ADDRESS_LEADING_ZEROS]
            .iter()
            .all(|b| *b == 0)
    }
}
