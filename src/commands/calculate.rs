use std::path::Path;

use crate::digest::{HashPrimitive, HashVerifier};
use crate::error::Result;
use crate::utils::hash::hash_file;

pub fn run<P: HashPrimitive>(verifier: &HashVerifier<P>, file: &Path) -> Result<String> {
    hash_file(verifier, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::HashError;
    use crate::digest::testing::{FailingPrimitive, Stage};
    use crate::error::Error;
    use crate::vectors::HELLO_WORLD;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn prints_known_vector_digest() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(HELLO_WORLD.message).unwrap();

        let hash = run(&HashVerifier::sha256(), file.path()).unwrap();

        assert_eq!(hash, HELLO_WORLD.expected_hex);
    }

    #[test]
    fn init_failure_produces_no_digest() {
        let file = NamedTempFile::new().unwrap();
        let verifier = HashVerifier::new(FailingPrimitive::new(Stage::Init));

        let result = run(&verifier, file.path());

        assert!(matches!(result, Err(Error::Hash(HashError::InitFailed))));
    }
}
