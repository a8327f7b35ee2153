// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Serialization primitives shared by all statefeed crates.
//!
//! Exposes the `Serializer`/`Deserializer` trait pair used for every bespoke
//! byte codec of the project, along with the sign-magnitude arbitrary
//! precision integer codec used by the account and token leaf formats.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod big_int;

pub use big_int::{BigIntDeserializer, BigIntSerializer};

use displaydoc::Display;
use nom::error::{ContextError, ErrorKind, ParseError, VerboseError};
use nom::IResult;
use thiserror::Error;

/// Error while serializing a value into bytes
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum SerializeError {
    /// Number {0} is too big to be serialized
    NumberTooBig(String),
    /// General error {0}
    GeneralError(String),
}

/// Error while deserializing bytes into a value.
///
/// Wraps the nom error chain so that `context(...)` annotations added by the
/// individual deserializers show up in the rendered message.
#[derive(Debug)]
pub struct DeserializeError<'a>(VerboseError<&'a [u8]>);

impl<'a> ParseError<&'a [u8]> for DeserializeError<'a> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        Self(VerboseError::from_error_kind(input, kind))
    }

    fn append(input: &'a [u8], kind: ErrorKind, other: Self) -> Self {
        Self(VerboseError::append(input, kind, other.0))
    }
}

impl<'a> ContextError<&'a [u8]> for DeserializeError<'a> {
    fn add_context(input: &'a [u8], ctx: &'static str, other: Self) -> Self {
        Self(VerboseError::add_context(input, ctx, other.0))
    }
}

impl<'a> std::fmt::Display for DeserializeError<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (input, error) in self.0.errors.iter() {
            match error {
                nom::error::VerboseErrorKind::Context(ctx) => write!(f, "{} / ", ctx)?,
                nom::error::VerboseErrorKind::Nom(kind) => write!(f, "{:?} / ", kind)?,
                nom::error::VerboseErrorKind::Char(c) => write!(f, "char {} / ", c)?,
            }
            // truncate the offending input so that log lines stay readable
            let end = input.len().min(64);
            write!(f, "input: {:02x?}... ", &input[..end])?;
        }
        Ok(())
    }
}

/// Trait for serializing a value of type `T` into a byte buffer
pub trait Serializer<T> {
    /// Appends the serialized form of `value` to `buffer`
    fn serialize(&self, value: &T, buffer: &mut Vec<u8>) -> Result<(), SerializeError>;
}

/// Trait for deserializing a value of type `T` from a byte buffer
pub trait Deserializer<T> {
    /// Reads a `T` from the start of `buffer`, returning the remaining bytes
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], T, E>;
}
