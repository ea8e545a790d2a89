use crate::digest::HashVerifier;
use crate::smoke::{SmokeReport, run_vectors};
use crate::vectors::SHA256_VECTORS;

pub fn run() -> SmokeReport {
    run_vectors(&HashVerifier::sha256(), SHA256_VECTORS)
}
