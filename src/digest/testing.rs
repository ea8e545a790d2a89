//! Backends that fail on demand, for exercising error paths.

use std::cell::Cell;
use std::rc::Rc;

use super::{Digest, HashPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Update,
    Finalize,
}

/// Context that counts how many times it has been dropped.
pub struct TrackedContext {
    drops: Rc<Cell<usize>>,
}

impl Drop for TrackedContext {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

pub struct FailingPrimitive {
    fail_at: Stage,
    drops: Rc<Cell<usize>>,
}

impl FailingPrimitive {
    pub fn new(fail_at: Stage) -> Self {
        FailingPrimitive {
            fail_at,
            drops: Rc::new(Cell::new(0)),
        }
    }

    /// Shared counter of released contexts.
    pub fn drops(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.drops)
    }
}

impl HashPrimitive for FailingPrimitive {
    type Context = TrackedContext;

    fn init(&self) -> Option<TrackedContext> {
        if self.fail_at == Stage::Init {
            return None;
        }
        Some(TrackedContext {
            drops: Rc::clone(&self.drops),
        })
    }

    fn update(&self, _context: &mut TrackedContext, _data: &[u8]) -> bool {
        self.fail_at != Stage::Update
    }

    fn finalize(&self, _context: TrackedContext, out: &mut Digest) -> bool {
        if self.fail_at == Stage::Finalize {
            return false;
        }
        out.fill(0xab);
        true
    }
}
