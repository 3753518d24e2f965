// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle ROI: an axis-aligned box given by its minimum and maximum corners.

use kurbo::Rect;
use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::RoiError;
use crate::shapes::check_two_rows;
use crate::types::RoiKind;

/// Axis-aligned box in `D` dimensions.
///
/// Data has shape `[2, D]`: row 0 holds the minimum value along each axis,
/// row 1 the maximum. Corners are stored as given; they are not reordered.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    data: Array2<f64>,
}

impl Rectangle {
    /// Create a rectangle from a `[2, D]` array.
    pub fn new(data: Array2<f64>) -> Result<Self, RoiError> {
        check_two_rows(RoiKind::Rectangle, &data)?;
        Ok(Self { data })
    }

    /// Number of spatial dimensions (columns).
    pub fn ndim(&self) -> usize {
        self.data.ncols()
    }

    /// Minimum-corner coordinates.
    pub fn min_values(&self) -> ArrayView1<'_, f64> {
        self.data.row(0)
    }

    /// Maximum-corner coordinates.
    pub fn max_values(&self) -> ArrayView1<'_, f64> {
        self.data.row(1)
    }

    /// Raw `[2, D]` data.
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consume the rectangle and return its raw data.
    pub fn into_data(self) -> Array2<f64> {
        self.data
    }

    /// Planar rectangle as a Kurbo rect, or `None` if `ndim() != 2`.
    ///
    /// The rect is built from the corners as stored, so an inverted rectangle
    /// stays inverted; call [`Rect::abs`] if you need it normalized.
    pub fn to_rect(&self) -> Option<Rect> {
        if self.ndim() != 2 {
            return None;
        }
        let (min, max) = (self.min_values(), self.max_values());
        Some(Rect::new(min[0], min[1], max[0], max[1]))
    }
}
