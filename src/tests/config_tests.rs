//! Configuration tests

#[cfg(test)]
mod tests {
    use crate::{PublicIdConfig, PublicIdError};

    #[test]
    fn test_default_config() {
        let config = PublicIdConfig::default();
        assert_eq!(config.alphabet().len(), 62);
        assert_eq!(config.min_length(), 0);
    }

    #[test]
    fn test_custom_config() {
        let config = PublicIdConfig::builder()
            .alphabet("abcABC123")
            .unwrap()
            .min_length(8)
            .unwrap()
            .build();
        assert_eq!(config.alphabet(), "abcABC123");
        assert_eq!(config.min_length(), 8);
    }

    #[test]
    fn test_duplicate_symbol_err() {
        let err = PublicIdConfig::builder().alphabet("abcb").unwrap_err();
        assert_eq!(err, PublicIdError::DuplicateSymbol { symbol: 'b' });
    }

    #[test]
    fn test_short_alphabet_err() {
        let err = PublicIdConfig::builder().alphabet("ab").unwrap_err();
        assert_eq!(err, PublicIdError::AlphabetTooShort { len: 2, min: 3 });
    }

    #[test]
    fn test_multibyte_alphabet_err() {
        let err = PublicIdConfig::builder().alphabet("abcñ").unwrap_err();
        assert_eq!(err, PublicIdError::AlphabetNotAscii);
    }

    #[test]
    fn test_min_length_bounds() {
        // Whole supported range is accepted
        for length in [0usize, 6, 20, 255] {
            let config = PublicIdConfig::builder().min_length(length).unwrap().build();
            assert_eq!(config.min_length(), length);
        }

        let err = PublicIdConfig::builder().min_length(256).unwrap_err();
        assert_eq!(
            err,
            PublicIdError::MinLengthTooLarge {
                length: 256,
                max: 255
            }
        );
    }

    #[test]
    fn test_smallest_valid_alphabet() {
        let config = PublicIdConfig::builder().alphabet("abc").unwrap().build();
        assert_eq!(config.alphabet(), "abc");
    }
}
