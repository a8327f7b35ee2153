// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Errors of the models crate.

use displaydoc::Display;
use thiserror::Error;

/// Models error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum ModelsError {
    /// address parse error
    AddressParseError,
    /// hex decoding error: {0}
    HexError(#[from] hex::FromHexError),
    /// unknown token type value: {0}
    UnknownTokenType(u32),
    /// deserialization error: {0}
    DeserializeError(String),
}
