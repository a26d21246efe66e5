use super::{ALPHABET, RADIX};
use crate::error::CorruptInputError;
use num_bigint::BigUint;

/// Parses a string of base58 digits, most significant first. The empty string
/// is zero.
///
/// # Errors
/// `CorruptInputError` with the byte offset of the first byte that is not an
/// alphabet symbol.
pub fn decode_int(input: impl AsRef<[u8]>) -> Result<BigUint, CorruptInputError> {
    let mut n = BigUint::default();
    for (index, &character) in input.as_ref().iter().enumerate() {
        let value = ALPHABET.decode(character, index)?;
        n *= RADIX as u32;
        n += u32::from(value);
    }
    Ok(n)
}
