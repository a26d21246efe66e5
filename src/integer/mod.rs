//! Conversion between arbitrary-precision unsigned integers and base58 digit
//! strings. Numeric zero has no digits; the zero symbol only ever appears as a
//! digit inside a longer number or as padding added by an [`Encoding`].
//!
//! [`Encoding`]: crate::Encoding

pub mod decode;
pub mod encode;
pub mod length;

pub use crate::alphabet::Alphabet;
pub use decode::decode_int;
pub use encode::encode_int;
pub use length::{bits_per_digit, decoded_len, max_encoded_len};

pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const RADIX: usize = ALPHABET.len();
