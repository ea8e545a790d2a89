use std::fs;
use std::path::Path;

use crate::digest::{HashPrimitive, HashVerifier};
use crate::error::{Error, Result};

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Hash the full contents of a file as lowercase hex.
pub fn hash_file<P: HashPrimitive>(verifier: &HashVerifier<P>, path: &Path) -> Result<String> {
    let data = read_file(path)?;
    Ok(verifier.hex_digest(&data)?)
}
