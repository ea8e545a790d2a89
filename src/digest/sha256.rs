use sha2::{Digest as Sha2Digest, Sha256};

use super::{Digest, HashPrimitive};

/// SHA-256 backend provided by the `sha2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Primitive;

impl HashPrimitive for Sha256Primitive {
    type Context = Sha256;

    fn init(&self) -> Option<Sha256> {
        Some(Sha256::new())
    }

    fn update(&self, context: &mut Sha256, data: &[u8]) -> bool {
        context.update(data);
        true
    }

    fn finalize(&self, context: Sha256, out: &mut Digest) -> bool {
        out.copy_from_slice(&context.finalize());
        true
    }
}
