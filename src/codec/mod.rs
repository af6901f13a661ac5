//! Core public-id codec implementation
//!
//! Split into modules:
//! - `shuffle` - deterministic working-alphabet permutation
//! - `digits` - arbitrary-radix positional conversion
//!
//! This module orchestrates both into the reversible encoding: rotation
//! offset, prefix symbol, per-number separators, and minimum-length
//! padding.

mod digits;
mod shuffle;

use std::marker::PhantomData;

use crate::alphabet::Alphabet;
use crate::config::PublicIdConfig;
use crate::number::IdNumber;

use digits::{push_digits, read_digits};
pub(crate) use shuffle::shuffle;

/// Reversible codec between number sequences and opaque strings,
/// parameterized over the integer width it operates on.
///
/// Stateless after construction: `encode` and `decode` take `&self`,
/// allocate only transient buffers, and can be called from any number of
/// threads without synchronization.
#[derive(Debug, Clone)]
pub struct PublicIdCodec<T: IdNumber> {
    alphabet: Alphabet,
    min_length: usize,
    _width: PhantomData<T>,
}

impl<T: IdNumber> PublicIdCodec<T> {
    /// Create a codec from a validated configuration
    pub fn new(config: &PublicIdConfig) -> Self {
        Self {
            alphabet: Alphabet::new(config.alphabet()),
            min_length: config.min_length(),
            _width: PhantomData,
        }
    }

    /// Encode an ordered sequence of numbers into one opaque string.
    ///
    /// The output is built entirely from the configured alphabet and is at
    /// least `min_length` characters long. An empty slice encodes to the
    /// empty string. Deterministic: identical input always yields the
    /// identical string.
    pub fn encode(&self, numbers: &[T]) -> String {
        if numbers.is_empty() {
            return String::new();
        }

        let n = self.alphabet.len();
        let offset = self.rotation_offset(numbers);

        let mut working = self.alphabet.working(offset);
        let mut id = Vec::with_capacity(self.min_length.max(n));
        // The prefix records the rotation for decode: first symbol of the
        // rotated order, before the reversal.
        id.push(self.alphabet.symbol(offset));

        for (i, &number) in numbers.iter().enumerate() {
            push_digits(&mut id, number, &working[1..]);
            if i < numbers.len() - 1 {
                id.push(working[0]);
                shuffle(&mut working);
            }
        }

        if id.len() < self.min_length {
            // The separator in force marks where padding starts; decode
            // stops at it.
            id.push(working[0]);
            while id.len() < self.min_length {
                shuffle(&mut working);
                let take = (self.min_length - id.len()).min(n);
                id.extend_from_slice(&working[..take]);
            }
        }

        String::from_utf8_lossy(&id).into_owned()
    }

    /// Decode an opaque string back into its number sequence.
    ///
    /// Permissive: empty input, any character outside the configured
    /// alphabet, or a segment that overflows the codec's width all yield
    /// an empty vector rather than an error. Callers treat an empty or
    /// too-short result as "identifier not found".
    pub fn decode(&self, id: &str) -> Vec<T> {
        let bytes = id.as_bytes();
        if bytes.is_empty() || !bytes.iter().all(|&b| self.alphabet.contains(b)) {
            return Vec::new();
        }

        let Some(offset) = self.alphabet.position(bytes[0]) else {
            return Vec::new();
        };
        let mut working = self.alphabet.working(offset);
        let mut rest = &bytes[1..];
        let mut numbers = Vec::new();

        while !rest.is_empty() {
            let separator = working[0];
            match rest.iter().position(|&b| b == separator) {
                // A leading separator marks minimum-length padding
                Some(0) => break,
                Some(at) => {
                    let Some(number) = read_digits(&rest[..at], &working[1..]) else {
                        return Vec::new();
                    };
                    numbers.push(number);
                    rest = &rest[at + 1..];
                    shuffle(&mut working);
                }
                None => {
                    let Some(number) = read_digits(rest, &working[1..]) else {
                        return Vec::new();
                    };
                    numbers.push(number);
                    break;
                }
            }
        }
        numbers
    }

    /// Rotation derived from the input so different sequences start from
    /// different working alphabets
    fn rotation_offset(&self, numbers: &[T]) -> usize {
        let n = self.alphabet.len();
        let mut offset = numbers.len();
        for (i, &number) in numbers.iter().enumerate() {
            offset += i + self.alphabet.symbol(number.digit(n)) as usize;
        }
        offset % n
    }
}

impl<T: IdNumber> Default for PublicIdCodec<T> {
    fn default() -> Self {
        Self::new(&PublicIdConfig::default())
    }
}
