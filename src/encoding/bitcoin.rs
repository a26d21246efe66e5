use super::{pad_bytes, pad_digits, Encoding};
use crate::{
    error::CorruptInputError,
    integer::{decode_int, encode_int, ALPHABET},
};
use num_bigint::BigUint;

/// Bitcoin address padding: one zero symbol per leading zero byte. The length
/// of the output varies with the value of the input, not only its length.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bitcoin;

impl Encoding for Bitcoin {
    fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let n = BigUint::from_bytes_be(&input[zeros..]);
        pad_digits(zeros, encode_int(&n))
    }

    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, CorruptInputError> {
        let input = input.as_ref();
        let zero = ALPHABET.zero();
        let zeros = input.iter().take_while(|&&value| value == zero).count();
        // leading zero symbols add nothing to the value, so the offsets of the
        // whole input are kept in errors
        let n = decode_int(input)?;
        Ok(pad_bytes(zeros, &n))
    }
}
