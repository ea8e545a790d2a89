use std::path::Path;

use crate::digest::{CheckResult, HashPrimitive, HashVerifier};
use crate::error::Result;
use crate::utils::hash::read_file;

pub fn run<P: HashPrimitive>(
    verifier: &HashVerifier<P>,
    expected: &str,
    file: &Path,
) -> Result<CheckResult> {
    let data = read_file(file)?;
    Ok(verifier.check(&data, expected)?)
}
