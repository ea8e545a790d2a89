//! Known-answer smoke test for a hashing backend.

use thiserror::Error;
use tracing::{info, warn};

use crate::digest::{CheckResult, HashError, HashPrimitive, HashVerifier};
use crate::vectors::{KnownVector, VectorError, validate_hex_literal};

/// The first failed check of a smoke run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("malformed test vector '{vector}': {source}")]
    MalformedVector {
        vector: String,
        #[source]
        source: VectorError,
    },

    #[error("failed to generate hash for '{vector}': {source}")]
    HashFailed {
        vector: String,
        #[source]
        source: HashError,
    },

    #[error("unexpected message hash for '{vector}': expected {expected}, got {actual}")]
    Mismatch {
        vector: String,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorOutcome {
    Passed,
    MalformedVector(VectorError),
    HashFailed(HashError),
    Mismatch { actual: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorResult {
    pub vector: KnownVector,
    pub outcome: VectorOutcome,
}

impl VectorResult {
    pub fn passed(&self) -> bool {
        self.outcome == VectorOutcome::Passed
    }

    /// Convert a failed outcome into the error describing it.
    pub fn error(&self) -> Option<VerifyError> {
        let vector = self.vector.name.to_string();
        match &self.outcome {
            VectorOutcome::Passed => None,
            VectorOutcome::MalformedVector(source) => Some(VerifyError::MalformedVector {
                vector,
                source: source.clone(),
            }),
            VectorOutcome::HashFailed(source) => Some(VerifyError::HashFailed {
                vector,
                source: *source,
            }),
            VectorOutcome::Mismatch { actual } => Some(VerifyError::Mismatch {
                vector,
                expected: self.vector.expected_hex.to_string(),
                actual: actual.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    pub results: Vec<VectorResult>,
}

impl SmokeReport {
    pub fn passed(&self) -> bool {
        self.results.iter().all(VectorResult::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = VerifyError> + '_ {
        self.results.iter().filter_map(VectorResult::error)
    }

    /// Surface the first failure, if any.
    pub fn into_result(self) -> Result<(), VerifyError> {
        match self.failures().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Run every vector against `verifier`.
///
/// A malformed vector is reported without hashing its message.
pub fn run_vectors<P: HashPrimitive>(
    verifier: &HashVerifier<P>,
    vectors: &[KnownVector],
) -> SmokeReport {
    let results = vectors
        .iter()
        .map(|vector| VectorResult {
            vector: *vector,
            outcome: run_vector(verifier, vector),
        })
        .collect();

    SmokeReport { results }
}

fn run_vector<P: HashPrimitive>(
    verifier: &HashVerifier<P>,
    vector: &KnownVector,
) -> VectorOutcome {
    if let Err(e) = validate_hex_literal(vector.expected_hex) {
        warn!(vector = vector.name, error = %e, "malformed test vector");
        return VectorOutcome::MalformedVector(e);
    }

    match verifier.check(vector.message, vector.expected_hex) {
        Ok(CheckResult::Match) => {
            info!(vector = vector.name, "hash matches");
            VectorOutcome::Passed
        }
        Ok(CheckResult::NoMatch { actual }) => {
            warn!(
                vector = vector.name,
                expected = vector.expected_hex,
                actual = %actual,
                "unexpected message hash"
            );
            VectorOutcome::Mismatch { actual }
        }
        Err(e) => {
            warn!(vector = vector.name, error = %e, "failed to generate hash");
            VectorOutcome::HashFailed(e)
        }
    }
}
