use super::RADIX;

/// Bits of entropy per base58 digit.
pub fn bits_per_digit() -> f64 {
    (RADIX as f64).log2()
}

/// Maximum number of base58 digits needed for any integer of `bits` bits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn max_encoded_len(bits: usize) -> usize {
    (bits as f64 / bits_per_digit()).ceil() as usize
}

/// Number of bytes an unpadded string of `digits` base58 digits is
/// guaranteed to represent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn decoded_len(digits: usize) -> usize {
    (digits as f64 * bits_per_digit() / 8.0).floor() as usize
}
