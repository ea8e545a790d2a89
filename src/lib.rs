pub mod commands;
pub mod digest;
pub mod error;
pub mod smoke;
pub mod utils;
pub mod vectors;
pub mod versions;

pub use digest::{
    CheckResult, DIGEST_LENGTH, Digest, HashError, HashPrimitive, HashVerifier, Sha256Primitive,
    to_hex,
};
pub use error::{Error, Result};
