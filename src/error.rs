use thiserror::Error;

/// Represents errors that can occur while validating a codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicIdError {
    /// Error when the alphabet has fewer symbols than the codec can work with
    #[error("Alphabet must contain at least {min} symbols, got {len}")]
    AlphabetTooShort { len: usize, min: usize },
    /// Error when the alphabet contains a multibyte character
    #[error("Alphabet symbols must be single-byte ASCII characters")]
    AlphabetNotAscii,
    /// Error when the same symbol appears twice in the alphabet
    #[error("Alphabet contains duplicate symbol '{symbol}'")]
    DuplicateSymbol { symbol: char },
    /// Error when the minimum output length exceeds the supported bound
    #[error("Minimum length {length} exceeds the supported maximum of {max}")]
    MinLengthTooLarge { length: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let too_short = PublicIdError::AlphabetTooShort { len: 2, min: 3 };
        assert_eq!(
            too_short.to_string(),
            "Alphabet must contain at least 3 symbols, got 2"
        );

        let duplicate = PublicIdError::DuplicateSymbol { symbol: 'a' };
        assert_eq!(
            duplicate.to_string(),
            "Alphabet contains duplicate symbol 'a'"
        );

        let too_large = PublicIdError::MinLengthTooLarge {
            length: 300,
            max: 255,
        };
        assert_eq!(
            too_large.to_string(),
            "Minimum length 300 exceeds the supported maximum of 255"
        );
    }

    #[test]
    fn test_error_debug() {
        let err = PublicIdError::AlphabetNotAscii;
        assert!(format!("{:?}", err).contains("AlphabetNotAscii"));
    }

    #[test]
    fn test_error_clone() {
        let original = PublicIdError::DuplicateSymbol { symbol: 'x' };
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
