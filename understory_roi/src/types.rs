// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared across the crate: dendron identifiers and ROI kinds.

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Identifier for a [`Dendron`](crate::Dendron).
///
/// This is a small, copyable handle that an ROI stores as its back-reference
/// while it is a member of a dendron. It never owns or borrows the dendron,
/// so holding one does not keep the dendron alive.
///
/// ## Semantics
///
/// - Every call to [`Dendron::new`](crate::Dendron::new) allocates a fresh id.
/// - Ids are never reused within a process, so two live dendrons never share one.
/// - Ids are allocated from a global pointer-width atomic counter and are unique across threads.
///
/// ### Targets
///
/// Allocation uses `AtomicUsize::fetch_add`, so the target must support atomic
/// read-modify-write at pointer width (`target_has_atomic = "ptr"`). 32-bit targets
/// without 64-bit atomics, such as `riscv32imac` or `thumbv7m`, are fine; targets with
/// only atomic loads and stores, such as `thumbv6m` or `riscv32imc`, are not supported.
///
/// The counter is ample for practical lifetimes; behavior on overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DendronId(usize);

static NEXT_DENDRON_ID: AtomicUsize = AtomicUsize::new(1);

impl DendronId {
    pub(crate) fn next() -> Self {
        Self(NEXT_DENDRON_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id, for diagnostics.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DendronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dendron#{}", self.0)
    }
}

/// Tag naming which shape variant an ROI carries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RoiKind {
    /// Center row plus semi-axis length row.
    Ellipsoid,
    /// Two endpoint rows.
    Line,
    /// Minimum-corner row plus maximum-corner row.
    Rectangle,
    /// One row per vertex.
    Polygon,
}

impl RoiKind {
    /// Lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ellipsoid => "ellipsoid",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Polygon => "polygon",
        }
    }
}

impl fmt::Display for RoiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
