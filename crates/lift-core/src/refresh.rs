//! Deferred recomputation primitive.
//!
//! A derived value (a sprite's texture rect, its screen position) only needs
//! recomputing when one of its inputs changed.  `Refresh` is the explicit
//! form of that contract: producers call [`mark`][Refresh::mark] when an
//! input changes, the consumer calls [`take`][Refresh::take] once per frame
//! and recomputes only on `true`.
//!
//! Recomputations guarded this way must be idempotent and pure functions of
//! current state: safe to skip when not marked, safe to run redundantly.

/// One dirty flag guarding a deferred recomputation.
#[derive(Debug, Clone)]
pub struct Refresh {
    needed: bool,
}

impl Refresh {
    /// A flag that starts marked, so the first resolution always runs.
    /// Derived values have no meaningful state before their first compute.
    #[inline]
    pub fn new() -> Self {
        Self { needed: true }
    }

    /// Mark the derived value stale.
    #[inline]
    pub fn mark(&mut self) {
        self.needed = true;
    }

    /// Clear the flag, returning whether a recomputation is due.
    #[inline]
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.needed, false)
    }

    /// Peek without clearing.
    #[inline]
    pub fn is_marked(&self) -> bool {
        self.needed
    }
}

impl Default for Refresh {
    fn default() -> Self {
        Self::new()
    }
}
