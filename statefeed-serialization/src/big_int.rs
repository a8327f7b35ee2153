// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Sign-magnitude codec for arbitrary precision integers.
//!
//! This is the wire format used by the node for every big-integer leaf
//! field (balances, developer rewards, token values):
//! - zero is the canonical two-byte sequence `[0x00, 0x00]`
//! - a positive value is `0x00` followed by the big-endian magnitude
//! - a negative value is `0x01` followed by the big-endian magnitude
//!
//! Decoding additionally accepts two legacy shapes: an empty buffer (zero)
//! and a buffer whose first byte is not a sign marker, which is read as an
//! unsigned big-endian magnitude. Decoding is total: any byte sequence
//! yields a value and the whole buffer is always consumed.

use crate::{Deserializer, SerializeError, Serializer};
use nom::error::{ContextError, ParseError};
use nom::IResult;
use num::bigint::Sign;
use num::{BigInt, BigUint, Zero};

/// Serializer for sign-magnitude big integers
#[derive(Default, Clone)]
pub struct BigIntSerializer;

impl BigIntSerializer {
    /// Creates a `BigIntSerializer`
    pub const fn new() -> Self {
        Self
    }
}

impl Serializer<BigInt> for BigIntSerializer {
    /// ## Example
    /// ```
    /// use num::BigInt;
    /// use statefeed_serialization::{BigIntSerializer, Serializer};
    ///
    /// let mut buffer = Vec::new();
    /// BigIntSerializer::new().serialize(&BigInt::from(258), &mut buffer).unwrap();
    /// assert_eq!(buffer, vec![0x00, 0x01, 0x02]);
    ///
    /// let mut buffer = Vec::new();
    /// BigIntSerializer::new().serialize(&BigInt::from(0), &mut buffer).unwrap();
    /// assert_eq!(buffer, vec![0x00, 0x00]);
    /// ```
    fn serialize(&self, value: &BigInt, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
        if value.is_zero() {
            // canonical zero used by the node serializer
            buffer.extend_from_slice(&[0x00, 0x00]);
            return Ok(());
        }
        let (sign, magnitude) = value.clone().into_parts();
        buffer.push(match sign {
            Sign::Minus => 0x01,
            _ => 0x00,
        });
        buffer.extend_from_slice(&magnitude.to_bytes_be());
        Ok(())
    }
}

/// Deserializer for sign-magnitude big integers.
///
/// Never fails: it consumes the full input and always yields a value.
#[derive(Default, Clone)]
pub struct BigIntDeserializer;

impl BigIntDeserializer {
    /// Creates a `BigIntDeserializer`
    pub const fn new() -> Self {
        Self
    }
}

impl Deserializer<BigInt> for BigIntDeserializer {
    /// ## Example
    /// ```
    /// use num::BigInt;
    /// use statefeed_serialization::{BigIntDeserializer, DeserializeError, Deserializer};
    ///
    /// let deserializer = BigIntDeserializer::new();
    /// let (rest, value) = deserializer.deserialize::<DeserializeError>(&[0x00, 0x01, 0x02]).unwrap();
    /// assert!(rest.is_empty());
    /// assert_eq!(value, BigInt::from(258));
    ///
    /// // legacy magnitude-only buffers decode as unsigned
    /// let (_, value) = deserializer.deserialize::<DeserializeError>(&[0x05]).unwrap();
    /// assert_eq!(value, BigInt::from(5));
    /// ```
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], BigInt, E> {
        let rest: &[u8] = &buffer[buffer.len()..];
        if buffer.is_empty() {
            return Ok((rest, BigInt::zero()));
        }
        if buffer.len() == 2 && buffer[0] == 0x00 && buffer[1] == 0x00 {
            return Ok((rest, BigInt::zero()));
        }
        let value = match buffer[0] {
            0x00 => BigInt::from(BigUint::from_bytes_be(&buffer[1..])),
            0x01 => -BigInt::from(BigUint::from_bytes_be(&buffer[1..])),
            // legacy encoding without a sign marker
            _ => BigInt::from(BigUint::from_bytes_be(buffer)),
        };
        Ok((rest, value))
    }
}
