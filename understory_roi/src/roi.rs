// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Roi`] record: a shape plus a back-reference to its owning dendron.

use ndarray::ArrayView2;

use crate::shapes::{Ellipsoid, Line, Polygon, Rectangle};
use crate::types::{DendronId, RoiKind};

/// Closed set of shapes an ROI can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum RoiShape {
    /// See [`Ellipsoid`].
    Ellipsoid(Ellipsoid),
    /// See [`Line`].
    Line(Line),
    /// See [`Rectangle`].
    Rectangle(Rectangle),
    /// See [`Polygon`].
    Polygon(Polygon),
}

impl RoiShape {
    /// Which variant this is.
    pub fn kind(&self) -> RoiKind {
        match self {
            Self::Ellipsoid(_) => RoiKind::Ellipsoid,
            Self::Line(_) => RoiKind::Line,
            Self::Rectangle(_) => RoiKind::Rectangle,
            Self::Polygon(_) => RoiKind::Polygon,
        }
    }

    /// Raw data of the underlying shape.
    pub fn data(&self) -> ArrayView2<'_, f64> {
        match self {
            Self::Ellipsoid(s) => s.data(),
            Self::Line(s) => s.data(),
            Self::Rectangle(s) => s.data(),
            Self::Polygon(s) => s.data(),
        }
    }

    /// Number of spatial dimensions (columns of the raw data).
    pub fn ndim(&self) -> usize {
        self.data().ncols()
    }
}

impl From<Ellipsoid> for RoiShape {
    fn from(shape: Ellipsoid) -> Self {
        Self::Ellipsoid(shape)
    }
}

impl From<Line> for RoiShape {
    fn from(shape: Line) -> Self {
        Self::Line(shape)
    }
}

impl From<Rectangle> for RoiShape {
    fn from(shape: Rectangle) -> Self {
        Self::Rectangle(shape)
    }
}

impl From<Polygon> for RoiShape {
    fn from(shape: Polygon) -> Self {
        Self::Polygon(shape)
    }
}

/// A region of interest.
///
/// An `Roi` starts out unowned. Adding it to a [`Dendron`](crate::Dendron) moves it
/// into the dendron and records the dendron's [`DendronId`] as its back-reference;
/// removing it hands it back with the back-reference cleared.
///
/// The back-reference is a plain id, so it never keeps a dendron alive.
///
/// Cloning produces an unowned copy: the clone is not a member of any dendron,
/// even when the original is.
#[derive(Debug, PartialEq)]
pub struct Roi {
    dendron: Option<DendronId>,
    shape: RoiShape,
}

impl Clone for Roi {
    fn clone(&self) -> Self {
        Self {
            dendron: None,
            shape: self.shape.clone(),
        }
    }
}

impl Roi {
    /// Create an unowned ROI.
    pub fn new(shape: impl Into<RoiShape>) -> Self {
        Self {
            dendron: None,
            shape: shape.into(),
        }
    }

    /// The dendron currently holding this ROI, if any.
    pub fn dendron(&self) -> Option<DendronId> {
        self.dendron
    }

    /// Set or clear the back-reference. Only the dendron drives this.
    pub(crate) fn set_dendron(&mut self, dendron: Option<DendronId>) {
        self.dendron = dendron;
    }

    /// The carried shape.
    pub fn shape(&self) -> &RoiShape {
        &self.shape
    }

    /// Consume the ROI and return its shape.
    pub fn into_shape(self) -> RoiShape {
        self.shape
    }

    /// Which variant this ROI carries.
    pub fn kind(&self) -> RoiKind {
        self.shape.kind()
    }

    /// Raw data of the carried shape.
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.shape.data()
    }

    /// Number of spatial dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// The ellipsoid, if this ROI carries one.
    pub fn as_ellipsoid(&self) -> Option<&Ellipsoid> {
        match &self.shape {
            RoiShape::Ellipsoid(s) => Some(s),
            _ => None,
        }
    }

    /// The line, if this ROI carries one.
    pub fn as_line(&self) -> Option<&Line> {
        match &self.shape {
            RoiShape::Line(s) => Some(s),
            _ => None,
        }
    }

    /// The rectangle, if this ROI carries one.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match &self.shape {
            RoiShape::Rectangle(s) => Some(s),
            _ => None,
        }
    }

    /// The polygon, if this ROI carries one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match &self.shape {
            RoiShape::Polygon(s) => Some(s),
            _ => None,
        }
    }
}

impl From<RoiShape> for Roi {
    fn from(shape: RoiShape) -> Self {
        Self::new(shape)
    }
}

impl From<Ellipsoid> for Roi {
    fn from(shape: Ellipsoid) -> Self {
        Self::new(shape)
    }
}

impl From<Line> for Roi {
    fn from(shape: Line) -> Self {
        Self::new(shape)
    }
}

impl From<Rectangle> for Roi {
    fn from(shape: Rectangle) -> Self {
        Self::new(shape)
    }
}

impl From<Polygon> for Roi {
    fn from(shape: Polygon) -> Self {
        Self::new(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use ndarray::array;

    fn line() -> Line {
        Line::new(array![[0.0, 0.0], [5.0, 5.0]]).unwrap()
    }

    #[test]
    fn new_roi_is_unowned() {
        let roi = Roi::new(line());
        assert_eq!(roi.dendron(), None);
        assert_eq!(roi.kind(), RoiKind::Line);
        assert_eq!(roi.ndim(), 2);
    }

    #[test]
    fn set_dendron_sets_and_clears() {
        let id = DendronId::next();
        let mut roi = Roi::new(line());
        roi.set_dendron(Some(id));
        assert_eq!(roi.dendron(), Some(id));
        roi.set_dendron(None);
        assert_eq!(roi.dendron(), None);
    }

    #[test]
    fn clone_drops_back_reference() {
        let mut roi = Roi::new(line());
        roi.set_dendron(Some(DendronId::next()));
        let copy = roi.clone();
        assert_eq!(copy.dendron(), None);
        assert_eq!(copy.shape(), roi.shape());
    }

    #[test]
    fn variant_accessors_match_kind() {
        let poly: Roi = Polygon::new(array![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]])
            .unwrap()
            .into();
        assert_eq!(poly.kind(), RoiKind::Polygon);
        assert!(poly.as_polygon().is_some());
        assert!(poly.as_line().is_none());
        assert!(poly.as_ellipsoid().is_none());
        assert!(poly.as_rectangle().is_none());
        assert_eq!(poly.data().nrows(), 3);
    }

    #[test]
    fn into_shape_returns_variant() {
        let rect = Rectangle::new(array![[0.0, 0.0], [10.0, 10.0]]).unwrap();
        let roi = Roi::from(rect.clone());
        assert_eq!(roi.into_shape(), RoiShape::Rectangle(rect));
    }
}
