//! SMS message payloads and the random message generator
//!
//! A message is nothing more than its text. The generator draws a length in
//! `1..=100` and then each character independently from [`ALPHABET`].

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Shortest generated message
pub const MIN_MESSAGE_LEN: usize = 1;
/// Longest generated message
pub const MAX_MESSAGE_LEN: usize = 100;

/// ASCII letters, digits, punctuation and whitespace
pub const ALPHABET: &[u8] = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
)
.as_bytes();

/// An immutable SMS text payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (every generated character is a single byte)
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Generate a random message from the given RNG
pub fn generate_message_with(rng: &mut impl Rng) -> Message {
    let len = rng.gen_range(MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN);
    let text: String = (0..len)
        .filter_map(|_| ALPHABET.choose(&mut *rng).map(|&byte| char::from(byte)))
        .collect();
    Message(text)
}

/// Generate a random message using the thread-local RNG
pub fn generate_random_message() -> Message {
    generate_message_with(&mut rand::thread_rng())
}

/// True if `c` may appear in a generated message
pub fn is_message_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_alphabet_matches_ascii_classes() {
        let expected: Vec<u8> = (0u8..128)
            .filter(|b| {
                b.is_ascii_alphanumeric()
                    || b.is_ascii_punctuation()
                    || matches!(*b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
            })
            .collect();
        let mut actual = ALPHABET.to_vec();
        actual.sort_unstable();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_generated_length_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let message = generate_message_with(&mut rng);
            assert!(
                (MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&message.len()),
                "length {} out of range",
                message.len()
            );
        }
    }

    #[test]
    fn test_generated_characters_in_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1_000 {
            let message = generate_message_with(&mut rng);
            assert!(message.as_str().chars().all(is_message_char));
        }
    }

    #[test]
    fn test_thread_rng_generator() {
        let message = generate_random_message();
        assert!(!message.is_empty());
        assert!(message.len() <= MAX_MESSAGE_LEN);
        assert!(message.as_str().chars().all(is_message_char));
    }

    #[test]
    fn test_same_seed_same_messages() {
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..10 {
            assert_eq!(
                generate_message_with(&mut first),
                generate_message_with(&mut second)
            );
        }
    }

    #[test]
    fn test_lengths_cover_both_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let lengths: Vec<usize> = (0..20_000)
            .map(|_| generate_message_with(&mut rng).len())
            .collect();

        assert!(lengths.contains(&MIN_MESSAGE_LEN));
        assert!(lengths.contains(&MAX_MESSAGE_LEN));
    }
}
