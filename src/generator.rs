//! Paired 32-bit and 64-bit codecs behind one configuration
//!
//! Services hold one of these for the lifetime of the process: write paths
//! encode row ids into response payloads and `Location` headers, read
//! paths decode incoming public ids back to storage keys.

use crate::codec::PublicIdCodec;
use crate::config::PublicIdConfig;

/// Public-id front end owning a 32-bit and a 64-bit codec built from the
/// same configuration.
///
/// Both codecs run the identical algorithm; ids produced for values within
/// the 32-bit range decode identically through either.
#[derive(Debug, Clone)]
pub struct PublicIdGenerator {
    ints: PublicIdCodec<u32>,
    longs: PublicIdCodec<u64>,
    config: PublicIdConfig,
}

impl PublicIdGenerator {
    /// Create a generator from a validated configuration
    pub fn new(config: &PublicIdConfig) -> Self {
        Self {
            ints: PublicIdCodec::new(config),
            longs: PublicIdCodec::new(config),
            config: config.clone(),
        }
    }

    /// The configuration both codecs were built from
    pub fn config(&self) -> &PublicIdConfig {
        &self.config
    }

    /// Encode a sequence of 32-bit-range numbers
    pub fn encode(&self, numbers: &[u32]) -> String {
        self.ints.encode(numbers)
    }

    /// Encode a sequence of 64-bit-range numbers
    pub fn encode_long(&self, numbers: &[u64]) -> String {
        self.longs.encode(numbers)
    }

    /// Decode a public id into 32-bit-range numbers; empty on any input
    /// that is not an id of this configuration
    pub fn decode(&self, id: &str) -> Vec<u32> {
        self.ints.decode(id)
    }

    /// Decode a public id into 64-bit-range numbers; empty on any input
    /// that is not an id of this configuration
    pub fn decode_long(&self, id: &str) -> Vec<u64> {
        self.longs.decode(id)
    }

    /// Compose a public id for a row: a fixed per-entity tag followed by
    /// the internal row id, encoded together so ids of different entity
    /// kinds never collide.
    pub fn encode_tagged(&self, tag: u32, row_id: u32) -> String {
        self.encode(&[tag, row_id])
    }

    /// Recover the row id from a tagged public id.
    ///
    /// Returns `0` when the id decodes to fewer than two numbers - the
    /// same silent fallback the consuming service has always applied. Row
    /// ids start at 1 in the backing store, so callers treat `0` as
    /// "identifier not found". The tag is not verified.
    pub fn row_id_of(&self, id: &str) -> u32 {
        self.decode(id).get(1).copied().unwrap_or(0)
    }
}
