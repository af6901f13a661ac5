//! # PublicId
//!
//! Deterministic, reversible public identifiers for database rows.
//!
//! Pack an ordered sequence of non-negative integers into a short opaque
//! string and unpack it server-side without a lookup table:
//! - 🔒 Sequential storage keys never appear in URLs or payloads
//! - 🔁 Reversible and deterministic, no stored mapping
//! - 🧵 Stateless and thread-safe after construction
//! - 📏 Configurable alphabet and minimum output length
//!
//! Obfuscation, not cryptography: ids are cheap to decode for anyone who
//! knows the alphabet, they only prevent casual enumeration.

#![forbid(unsafe_code)]

mod alphabet;
mod codec;
mod config;
mod error;
mod generator;
mod number;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use codec::PublicIdCodec;
pub use config::{PublicIdConfig, PublicIdConfigBuilder};
pub use error::PublicIdError;
pub use generator::PublicIdGenerator;
pub use number::IdNumber;
