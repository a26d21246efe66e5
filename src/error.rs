use thiserror::Error;

/// Returned when a string holds a byte outside the base58 alphabet. Carries
/// the zero-based byte offset of the first such byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("illegal base58 data at input byte {0}")]
pub struct CorruptInputError(pub usize);

impl CorruptInputError {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::CorruptInputError;

    #[test]
    fn display() {
        let error = CorruptInputError(4);
        assert_eq!(error.index(), 4);
        assert_eq!(error.to_string(), "illegal base58 data at input byte 4");
    }
}
