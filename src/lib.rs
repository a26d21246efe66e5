//! Base58 encoding as used in Bitcoin addresses.
//!
//! Bytes are read as one big-endian unsigned integer and written out in radix
//! 58. Leading zero bytes have no numeric weight, so they are carried as
//! leading `1` symbols. Two padding schemes are provided: [`Bitcoin`] emits one
//! `1` per leading zero byte, [`Fixed`] always pads to the widest encoding of
//! the input length.
//!
//! ```
//! use base58::{Bitcoin, Encoding, Fixed};
//!
//! let buffer = [0u8, 0, 0, 58];
//! assert_eq!(Bitcoin.encode(&buffer), "11121");
//! assert_eq!(Fixed.encode(&buffer), "111121");
//! assert_eq!(Fixed.decode("111121").unwrap(), buffer);
//! assert_eq!(Fixed.decode("1111?1").unwrap_err().index(), 4);
//! ```

pub mod alphabet;
pub mod encoding;
pub mod error;
pub mod integer;

pub use alphabet::{Alphabet, AlphabetError};
pub use encoding::{Bitcoin, Encoding, Fixed, Scheme};
pub use error::CorruptInputError;
pub use integer::{bits_per_digit, decode_int, decoded_len, encode_int, max_encoded_len, ALPHABET, RADIX};
pub use num_bigint::BigUint;
