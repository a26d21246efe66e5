use crate::error::CorruptInputError;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum AlphabetError {
    #[error("Duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },
    #[error("Non-ascii character {character:#02x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
}

/// Symbol table mapping digit values to ASCII symbols and back.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, AlphabetError> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(AlphabetError::NonAsciiCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(AlphabetError::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Looks up the digit value of `character`, found at byte offset `index`
    /// of the input being decoded.
    pub fn decode(&self, character: u8, index: usize) -> Result<u8, CorruptInputError> {
        self.decode
            .get(character as usize)
            .copied()
            .flatten()
            .ok_or(CorruptInputError(index))
    }

    /// The symbol standing for digit zero, used as the padding symbol.
    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, AlphabetError};
    use crate::error::CorruptInputError;

    #[test]
    fn lookup() {
        let alphabet = Alphabet::new(b"xyz").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.zero(), b'x');
        assert_eq!(alphabet.encode(2), b'z');
        assert_eq!(alphabet.decode(b'y', 0), Ok(1));
        assert_eq!(alphabet.decode(b'a', 7), Err(CorruptInputError(7)));
        assert_eq!(alphabet.decode(0xff, 3), Err(CorruptInputError(3)));
    }

    #[test]
    fn duplicate_character() {
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(AlphabetError::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
    }

    #[test]
    fn non_ascii_character() {
        assert_eq!(
            Alphabet::new(&[b'a', 0xc3]).err(),
            Some(AlphabetError::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }
}
