//! Digest computation through a pluggable hashing primitive.
//!
//! The verifier never hashes anything itself. It drives an injected
//! [`HashPrimitive`] through init, update and finalize, renders the result
//! as lowercase hex and compares it against an expected literal.

mod sha256;
#[cfg(test)]
pub(crate) mod testing;

pub use sha256::Sha256Primitive;

use thiserror::Error;
use tracing::debug;

/// Byte length of a SHA-256 digest
pub const DIGEST_LENGTH: usize = 32;

/// Fixed-size digest produced by a [`HashPrimitive`]
pub type Digest = [u8; DIGEST_LENGTH];

/// Failure reported by the hashing backend at one of its three stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("hash context initialization failed")]
    InitFailed,
    #[error("hash update failed")]
    UpdateFailed,
    #[error("hash finalization failed")]
    FinalizeFailed,
}

/// A hashing backend exposing an init/update/finalize interface.
///
/// Each call returns a success flag. The context is owned by the caller for
/// a single computation and is dropped on every exit path.
pub trait HashPrimitive {
    type Context;

    /// Create a fresh hashing context, or `None` if the backend cannot.
    fn init(&self) -> Option<Self::Context>;

    /// Absorb `data` into the context.
    fn update(&self, context: &mut Self::Context, data: &[u8]) -> bool;

    /// Consume the context and write the digest into `out`.
    fn finalize(&self, context: Self::Context, out: &mut Digest) -> bool;
}

/// Outcome of comparing a computed digest against an expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Match,
    NoMatch { actual: String },
}

impl CheckResult {
    pub fn is_match(&self) -> bool {
        matches!(self, CheckResult::Match)
    }
}

/// Computes and verifies digests with an injected primitive.
#[derive(Debug, Clone)]
pub struct HashVerifier<P = Sha256Primitive> {
    primitive: P,
}

impl HashVerifier<Sha256Primitive> {
    pub fn sha256() -> Self {
        HashVerifier::new(Sha256Primitive)
    }
}

impl Default for HashVerifier<Sha256Primitive> {
    fn default() -> Self {
        HashVerifier::sha256()
    }
}

impl<P: HashPrimitive> HashVerifier<P> {
    pub fn new(primitive: P) -> Self {
        HashVerifier { primitive }
    }

    /// Hash `message` in a single update call.
    ///
    /// The first stage that fails is reported and no digest is produced.
    pub fn compute_digest(&self, message: &[u8]) -> Result<Digest, HashError> {
        let mut context = self.primitive.init().ok_or(HashError::InitFailed)?;

        if !self.primitive.update(&mut context, message) {
            return Err(HashError::UpdateFailed);
        }

        let mut digest = [0u8; DIGEST_LENGTH];
        if !self.primitive.finalize(context, &mut digest) {
            return Err(HashError::FinalizeFailed);
        }

        debug!(message_len = message.len(), "computed digest");
        Ok(digest)
    }

    pub fn hex_digest(&self, message: &[u8]) -> Result<String, HashError> {
        self.compute_digest(message).map(|digest| to_hex(&digest))
    }

    /// Returns `Ok(true)` iff hashing succeeds and the hex digest equals
    /// `expected_hex` exactly (case-sensitive).
    pub fn verify(&self, message: &[u8], expected_hex: &str) -> Result<bool, HashError> {
        Ok(self.check(message, expected_hex)?.is_match())
    }

    /// Like [`verify`](Self::verify), but keeps the actual digest on mismatch.
    pub fn check(&self, message: &[u8], expected_hex: &str) -> Result<CheckResult, HashError> {
        let actual = self.hex_digest(message)?;
        if actual == expected_hex {
            Ok(CheckResult::Match)
        } else {
            Ok(CheckResult::NoMatch { actual })
        }
    }
}

/// Render bytes as lowercase hex, two zero-padded characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
