//! Configuration for public-id codecs

mod builder;

pub use builder::PublicIdConfigBuilder;
use builder::{DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH};

/// Validated codec settings: the symbol alphabet and the minimum output
/// length.
///
/// Invalid settings are rejected by the builder before a config value can
/// exist, so services fail at startup rather than on first request. Fields
/// never mutate after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIdConfig {
    alphabet: Box<str>,
    min_length: u8,
}

impl PublicIdConfig {
    /// Create a new configuration builder
    pub fn builder() -> PublicIdConfigBuilder {
        PublicIdConfigBuilder::new()
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: PublicIdConfigBuilder) -> Self {
        Self {
            alphabet: b.alphabet.into_boxed_str(),
            min_length: b.min_length,
        }
    }

    /// The configured symbols, in their configured order
    #[inline(always)]
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Shortest string `encode` will produce for non-empty input
    #[inline(always)]
    pub fn min_length(&self) -> usize {
        self.min_length as usize
    }
}

impl Default for PublicIdConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.into(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}
