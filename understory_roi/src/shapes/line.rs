// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line ROI: a segment between two endpoints.

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::RoiError;
use crate::shapes::{check_two_rows, planar_point};
use crate::types::RoiKind;

/// Line segment in `D` dimensions.
///
/// Data has shape `[2, D]`: row 0 is endpoint one, row 1 is endpoint two.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    data: Array2<f64>,
}

impl Line {
    /// Create a line from a `[2, D]` array.
    pub fn new(data: Array2<f64>) -> Result<Self, RoiError> {
        check_two_rows(RoiKind::Line, &data)?;
        Ok(Self { data })
    }

    /// Number of spatial dimensions (columns).
    pub fn ndim(&self) -> usize {
        self.data.ncols()
    }

    /// First endpoint.
    pub fn endpoint_one(&self) -> ArrayView1<'_, f64> {
        self.data.row(0)
    }

    /// Second endpoint.
    pub fn endpoint_two(&self) -> ArrayView1<'_, f64> {
        self.data.row(1)
    }

    /// Raw `[2, D]` data.
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consume the line and return its raw data.
    pub fn into_data(self) -> Array2<f64> {
        self.data
    }

    /// Planar line as a Kurbo line, or `None` if `ndim() != 2`.
    pub fn to_line(&self) -> Option<kurbo::Line> {
        if self.ndim() != 2 {
            return None;
        }
        Some(kurbo::Line::new(
            planar_point(self.endpoint_one()),
            planar_point(self.endpoint_two()),
        ))
    }
}
