// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ellipsoid ROI: a center and per-axis radii.

use kurbo::{Ellipse, Vec2};
use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::RoiError;
use crate::shapes::{check_two_rows, planar_point};
use crate::types::RoiKind;

/// Axis-aligned ellipsoid in `D` dimensions.
///
/// Data has shape `[2, D]`: row 0 is the center, row 1 the semi-axis lengths (radii).
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    data: Array2<f64>,
}

impl Ellipsoid {
    /// Create an ellipsoid from a `[2, D]` array.
    pub fn new(data: Array2<f64>) -> Result<Self, RoiError> {
        check_two_rows(RoiKind::Ellipsoid, &data)?;
        Ok(Self { data })
    }

    /// Number of spatial dimensions (columns).
    pub fn ndim(&self) -> usize {
        self.data.ncols()
    }

    /// Center coordinates.
    pub fn center(&self) -> ArrayView1<'_, f64> {
        self.data.row(0)
    }

    /// Radius along each axis.
    pub fn semi_axis_length(&self) -> ArrayView1<'_, f64> {
        self.data.row(1)
    }

    /// Raw `[2, D]` data.
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consume the ellipsoid and return its raw data.
    pub fn into_data(self) -> Array2<f64> {
        self.data
    }

    /// Planar ellipsoid as an unrotated Kurbo ellipse, or `None` if `ndim() != 2`.
    pub fn to_ellipse(&self) -> Option<Ellipse> {
        if self.ndim() != 2 {
            return None;
        }
        let radii = self.semi_axis_length();
        Some(Ellipse::new(
            planar_point(self.center()),
            Vec2::new(radii[0], radii[1]),
            0.0,
        ))
    }
}
