use std::sync::Arc;

use parking_lot::RwLock;

use crate::{CompiledPattern, Error};

/// A compiled pattern shared between threads that can be recompiled in
/// place.
///
/// Matching works on a snapshot and never holds the lock while walking the
/// fragments. Recompiling happens outside the lock too; only the final swap
/// is exclusive, so concurrent matches see either the old or the new
/// fragments, never a mix.
#[derive(Clone)]
pub struct SharedPattern {
    current: Arc<RwLock<Arc<CompiledPattern>>>,
}

impl SharedPattern {
    #[must_use]
    pub fn new(pattern: CompiledPattern) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(pattern))),
        }
    }

    pub fn compile(raw: &str) -> Result<Self, Error> {
        CompiledPattern::compile(raw).map(Self::new)
    }

    /// The pattern as of now. Later recompilations don't affect it.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Arc<CompiledPattern> {
        self.current.read().clone()
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.snapshot().matches(candidate)
    }

    /// Replace the pattern for all clones of this handle, returning the
    /// previous one. If `raw` doesn't compile, nothing changes.
    pub fn recompile(&self, raw: &str) -> Result<Arc<CompiledPattern>, Error> {
        let pattern = Arc::new(CompiledPattern::compile(raw)?);
        let previous = std::mem::replace(&mut *self.current.write(), pattern);
        tracing::debug!(previous = previous.raw(), raw, "Recompiled shared pattern");
        Ok(previous)
    }
}

impl From<CompiledPattern> for SharedPattern {
    #[inline]
    fn from(pattern: CompiledPattern) -> Self {
        Self::new(pattern)
    }
}

impl std::fmt::Debug for SharedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedPattern")
            .field(&*self.snapshot())
            .finish()
    }
}

impl std::fmt::Display for SharedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&*self.snapshot(), f)
    }
}
