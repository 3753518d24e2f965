// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape variants carried by an [`Roi`](crate::Roi).
//!
//! Each variant owns its raw `ndarray` data and exposes named, non-copying row views:
//!
//! | Variant       | Row 0          | Row 1             | Rows 2..      |
//! |---------------|----------------|-------------------|---------------|
//! | [`Ellipsoid`] | center         | semi-axis lengths | n/a           |
//! | [`Line`]      | endpoint one   | endpoint two      | n/a           |
//! | [`Rectangle`] | minimum corner | maximum corner    | n/a           |
//! | [`Polygon`]   | vertex         | vertex            | vertex        |
//!
//! The number of columns is the dimension count of the shape.
//! Constructors check row and column counts and return [`RoiError`] on malformed input.
//!
//! ## Planar interop
//!
//! Shapes with exactly two columns can be converted into the matching Kurbo type.
//! Column 0 is read as `x` and column 1 as `y`.
//! Conversions return `None` for any other dimension count.

pub mod ellipsoid;
pub mod line;
pub mod polygon;
pub mod rectangle;

use kurbo::Point;
use ndarray::{Array2, ArrayView1};

use crate::error::RoiError;
use crate::types::RoiKind;

pub use ellipsoid::Ellipsoid;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

/// Check the `[2, D]` layout shared by ellipsoids, lines, and rectangles.
pub(crate) fn check_two_rows(kind: RoiKind, data: &Array2<f64>) -> Result<(), RoiError> {
    let (rows, cols) = data.dim();
    if rows != 2 {
        return Err(RoiError::RowCount {
            kind,
            expected: 2,
            actual: rows,
        });
    }
    if cols == 0 {
        return Err(RoiError::NoDimensions { kind });
    }
    Ok(())
}

/// Read a planar row as a Kurbo point. Caller guarantees two columns.
pub(crate) fn planar_point(row: ArrayView1<'_, f64>) -> Point {
    Point::new(row[0], row[1])
}
