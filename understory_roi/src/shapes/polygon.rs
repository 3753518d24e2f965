// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon ROI: an ordered list of vertices.

use kurbo::BezPath;
use ndarray::{Array2, ArrayView2};

use crate::error::RoiError;
use crate::shapes::planar_point;
use crate::types::RoiKind;

/// Polygon in `D` dimensions with `V` vertices.
///
/// Data has shape `[V, D]`, one row per vertex. There is no row with a special
/// meaning; [`Polygon::vertices`] is the whole array. The polygon is implicitly
/// closed from the last vertex back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    data: Array2<f64>,
}

impl Polygon {
    /// Create a polygon from a `[V, D]` array with at least one vertex.
    pub fn new(data: Array2<f64>) -> Result<Self, RoiError> {
        let (rows, cols) = data.dim();
        if rows == 0 {
            return Err(RoiError::EmptyPolygon);
        }
        if cols == 0 {
            return Err(RoiError::NoDimensions {
                kind: RoiKind::Polygon,
            });
        }
        Ok(Self { data })
    }

    /// Number of spatial dimensions (columns).
    pub fn ndim(&self) -> usize {
        self.data.ncols()
    }

    /// Number of vertices (rows).
    pub fn vertex_count(&self) -> usize {
        self.data.nrows()
    }

    /// All vertices, one per row.
    pub fn vertices(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Raw `[V, D]` data. Same as [`Polygon::vertices`].
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consume the polygon and return its raw data.
    pub fn into_data(self) -> Array2<f64> {
        self.data
    }

    /// Planar polygon as a closed Kurbo path, or `None` if `ndim() != 2`.
    pub fn to_bez_path(&self) -> Option<BezPath> {
        if self.ndim() != 2 {
            return None;
        }
        let mut path = BezPath::new();
        let mut rows = self.data.rows().into_iter();
        let first = rows.next()?;
        path.move_to(planar_point(first));
        for row in rows {
            path.line_to(planar_point(row));
        }
        path.close_path();
        Some(path)
    }
}
