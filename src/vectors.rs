use thiserror::Error;

use crate::digest::DIGEST_LENGTH;

/// A message together with its expected lowercase hex digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVector {
    pub name: &'static str,
    pub message: &'static [u8],
    pub expected_hex: &'static str,
}

pub const HELLO_WORLD: KnownVector = KnownVector {
    name: "hello world",
    message: b"hello world",
    expected_hex: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
};

pub const EMPTY: KnownVector = KnownVector {
    name: "empty message",
    message: b"",
    expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
};

/// Vectors run by the `smoke` command
pub const SHA256_VECTORS: &[KnownVector] = &[HELLO_WORLD, EMPTY];

/// A hex literal that cannot be a digest of the expected family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("expected {expected} hex characters, found {actual}")]
    BadLength { expected: usize, actual: usize },
    #[error("invalid character {ch:?} at position {index}, expected [0-9a-f]")]
    InvalidChar { index: usize, ch: char },
}

/// Reject literals that are not exactly `2 * DIGEST_LENGTH` lowercase hex
/// characters.
pub fn validate_hex_literal(literal: &str) -> Result<(), VectorError> {
    let expected = 2 * DIGEST_LENGTH;
    let actual = literal.chars().count();
    if actual != expected {
        return Err(VectorError::BadLength { expected, actual });
    }

    for (index, ch) in literal.chars().enumerate() {
        if !matches!(ch, '0'..='9' | 'a'..='f') {
            return Err(VectorError::InvalidChar { index, ch });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::HashVerifier;

    #[test]
    fn builtin_vectors_are_well_formed() {
        for vector in SHA256_VECTORS {
            assert_eq!(validate_hex_literal(vector.expected_hex), Ok(()), "{}", vector.name);
        }
    }

    #[test]
    fn builtin_vector_messages_hash_to_distinct_digests() {
        let verifier = HashVerifier::sha256();

        let hello = verifier.compute_digest(HELLO_WORLD.message).unwrap();
        let empty = verifier.compute_digest(EMPTY.message).unwrap();

        assert_ne!(hello, empty);
    }

    #[test]
    fn overlong_literal_is_rejected() {
        let literal = format!("b{}", HELLO_WORLD.expected_hex);

        let result = validate_hex_literal(&literal);

        assert_eq!(result, Err(VectorError::BadLength { expected: 64, actual: 65 }));
    }

    #[test]
    fn truncated_literal_is_rejected() {
        let literal = &HELLO_WORLD.expected_hex[..63];

        let result = validate_hex_literal(literal);

        assert_eq!(result, Err(VectorError::BadLength { expected: 64, actual: 63 }));
    }

    #[test]
    fn uppercase_literal_is_rejected() {
        let literal = HELLO_WORLD.expected_hex.to_uppercase();

        let result = validate_hex_literal(&literal);

        assert_eq!(result, Err(VectorError::InvalidChar { index: 0, ch: 'B' }));
    }

    #[test]
    fn non_hex_character_is_rejected() {
        let mut literal = String::from(EMPTY.expected_hex);
        literal.replace_range(10..11, "g");

        let result = validate_hex_literal(&literal);

        assert_eq!(result, Err(VectorError::InvalidChar { index: 10, ch: 'g' }));
    }
}
