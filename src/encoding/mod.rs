//! Padding policies layered over the integer conversion engine. Both
//! [`Bitcoin`] and [`Fixed`] turn leading zero bytes into leading zero
//! symbols; they differ only in how many symbols they emit.

pub mod bitcoin;
pub mod fixed;

pub use bitcoin::Bitcoin;
pub use fixed::Fixed;

use crate::{error::CorruptInputError, integer::ALPHABET};
use num_bigint::BigUint;
use num_traits::Zero;
use std::{fmt, iter};

/// A base58 encoding scheme.
pub trait Encoding {
    fn encode(&self, input: impl AsRef<[u8]>) -> String;

    /// # Errors
    /// `CorruptInputError` locating the first byte of `input` outside the
    /// alphabet.
    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, CorruptInputError>;
}

fn pad_digits(zeros: usize, digits: String) -> String {
    let mut output = String::with_capacity(zeros + digits.len());
    output.extend(iter::repeat(char::from(ALPHABET.zero())).take(zeros));
    output.push_str(&digits);
    output
}

/// `zeros` zero bytes followed by the minimal big-endian bytes of `n`, none
/// when `n` is zero.
fn pad_bytes(zeros: usize, n: &BigUint) -> Vec<u8> {
    let mut output = vec![0u8; zeros];
    if !n.is_zero() {
        output.extend_from_slice(&n.to_bytes_be());
    }
    output
}

/// Names an [`Encoding`] chosen at run time.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Scheme {
    #[default]
    Bitcoin,
    Fixed,
}

impl Encoding for Scheme {
    fn encode(&self, input: impl AsRef<[u8]>) -> String {
        match self {
            Scheme::Bitcoin => Bitcoin.encode(input),
            Scheme::Fixed => Fixed.encode(input),
        }
    }

    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, CorruptInputError> {
        match self {
            Scheme::Bitcoin => Bitcoin.decode(input),
            Scheme::Fixed => Fixed.decode(input),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Bitcoin => write!(f, "bitcoin"),
            Scheme::Fixed => write!(f, "fixed"),
        }
    }
}
