use super::{pad_bytes, pad_digits, Encoding};
use crate::{
    error::CorruptInputError,
    integer::{decode_int, decoded_len, encode_int, max_encoded_len},
};
use num_bigint::BigUint;

/// Pads with as many zero symbols as the widest value of the same byte length
/// would need, so the output length depends only on the input length.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fixed;

impl Encoding for Fixed {
    fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let digits = encode_int(&BigUint::from_bytes_be(input));
        let zeros = max_encoded_len(input.len() * 8).saturating_sub(digits.len());
        pad_digits(zeros, digits)
    }

    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, CorruptInputError> {
        let input = input.as_ref();
        let n = decode_int(input)?;
        let len = minimal_len(&n);
        // more digits than the value needs must never truncate it
        let zeros = decoded_len(input.len()).saturating_sub(len);
        Ok(pad_bytes(zeros, &n))
    }
}

fn minimal_len(n: &BigUint) -> usize {
    ((n.bits() + 7) / 8) as usize
}
