// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for ROI construction and dendron mutation.

use thiserror::Error;

use crate::types::RoiKind;

/// Errors returned by shape constructors and [`Dendron::remove`](crate::Dendron::remove).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoiError {
    /// A removal index was not below the dendron's count.
    #[error("index {index} is out of bounds for a dendron holding {count} ROIs")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of ROIs held at the time of the call.
        count: usize,
    },

    /// A two-row shape was given the wrong number of rows.
    #[error("{kind} data must have exactly {expected} rows, got {actual}")]
    RowCount {
        /// Shape being constructed.
        kind: RoiKind,
        /// Required row count.
        expected: usize,
        /// Row count of the supplied array.
        actual: usize,
    },

    /// A polygon was given an array with no vertex rows.
    #[error("polygon data must have at least one vertex row")]
    EmptyPolygon,

    /// The supplied array has no columns, so there are no dimensions to describe.
    #[error("{kind} data must have at least one column")]
    NoDimensions {
        /// Shape being constructed.
        kind: RoiKind,
    },
}
