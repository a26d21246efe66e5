use super::{max_encoded_len, ALPHABET, RADIX};
use num_bigint::BigUint;
use num_traits::Zero;

/// Encodes `n` as base58 digits, most significant first. Zero encodes to the
/// empty string.
pub fn encode_int(n: &BigUint) -> String {
    if n.is_zero() {
        return String::new();
    }
    let mut output = Vec::with_capacity(max_encoded_len(n.bits() as usize));
    // to_radix_le works on its own copy and yields the remainders of repeated
    // division, least significant first
    for digit in n.to_radix_le(RADIX as u32) {
        output.push(ALPHABET.encode(digit as usize));
    }
    output.reverse();
    output.into_iter().map(char::from).collect()
}
