//! Periodic time model.
//!
//! # Design
//!
//! Edge weights repeat with a fixed, graph-wide cycle length `N` — the
//! [`Period`].  The position inside that cycle is the [`Phase`]:
//!
//!   phase after k traversals = (starting phase + k) mod N
//!
//! Using an integer phase as the canonical time unit means all cycle
//! arithmetic is exact (no drift, no rounding) and comparisons are O(1).
//! Elapsed time may grow without bound; only its residue mod `N` ever
//! matters, which is why [`Phase::wrap`] accepts a full `u64` step count.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Period ────────────────────────────────────────────────────────────────────

/// The graph-wide weight-cycle length `N`.
///
/// Validated at construction: a zero period would make phase arithmetic
/// divide by zero, so [`Period::new`] rejects it.  Store one `Period` per
/// graph — every edge's weight cycle has exactly this many entries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period(u32);

impl Period {
    /// The degenerate single-entry cycle: weights never vary.
    pub const ONE: Period = Period(1);

    /// Construct a period, rejecting zero.
    pub fn new(n: u32) -> CoreResult<Period> {
        if n == 0 {
            return Err(CoreError::ZeroPeriod);
        }
        Ok(Period(n))
    }

    /// The cycle length as a raw integer.  Always ≥ 1.
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The cycle length as a `usize` for table sizing.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Position within the weight cycle, always in `[0, N)`.
///
/// A `Phase` is only meaningful relative to the [`Period`] it was reduced
/// against; all constructors here take the period explicitly so an
/// out-of-range phase cannot be built.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase(pub u32);

impl Phase {
    pub const ZERO: Phase = Phase(0);

    /// The phase one traversal later: `(self + 1) mod N`.
    #[inline(always)]
    pub fn next(self, period: Period) -> Phase {
        Phase((self.0 + 1) % period.0)
    }

    /// Reduce an arbitrary elapsed step count to its phase.
    ///
    /// Exact for any `u64` step — this is the mechanism by which periodic
    /// weight cycles apply no matter how large elapsed time has grown.
    #[inline(always)]
    pub fn wrap(step: u64, period: Period) -> Phase {
        Phase((step % period.0 as u64) as u32)
    }

    /// Cast to `usize` for direct use as a table index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
