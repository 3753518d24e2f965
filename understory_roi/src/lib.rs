// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roi --heading-base-level=0

//! Understory ROI: regions of interest for image-analysis annotation.
//!
//! Understory ROI is a small data model for annotating images with simple shapes.
//!
//! - Four shape variants: [`Ellipsoid`], [`Line`], [`Rectangle`], and [`Polygon`], each backed by an `ndarray` `[rows, D]` array.
//! - An [`Roi`] record wraps one shape and carries a back-reference to the [`Dendron`] that owns it.
//! - A [`Dendron`] is an ordered collection of ROIs with add/remove by position and an always-accurate count.
//!
//! Shapes are `D`-dimensional: the number of columns in the raw array is the dimension count,
//! so the same types describe 2D image annotations and 3D volume annotations.
//!
//! ## Ownership
//!
//! The dendron owns its ROIs. Each ROI records the owning dendron as a [`DendronId`],
//! a copyable handle rather than a pointer, so an ROI never keeps its dendron alive and
//! there are no reference cycles. Adding moves the ROI in; removing hands it back with
//! the back-reference cleared.
//!
//! ## Not a geometry engine
//!
//! This crate does not compute areas, test containment, index shapes spatially, or read and write
//! annotation files. It only holds shape records.
//! For planar (two-column) shapes it offers conversions into Kurbo types such as
//! [`kurbo::Rect`] and [`kurbo::BezPath`] so geometry can be done there.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use understory_roi::{Dendron, Ellipsoid, Polygon, Roi, RoiError};
//!
//! let mut dendron = Dendron::new();
//!
//! // Row 0 is the center, row 1 the semi-axis lengths.
//! let cell = Ellipsoid::new(array![[12.0, 30.0], [4.0, 6.0]])?;
//! assert_eq!(cell.center(), array![12.0, 30.0]);
//! dendron.add(Some(Roi::from(cell)));
//!
//! // Polygons take one row per vertex.
//! let outline = Polygon::new(array![[0.0, 0.0], [8.0, 0.0], [8.0, 8.0]])?;
//! dendron.add(Some(outline.into()));
//!
//! // Adding nothing is a no-op.
//! dendron.add(None);
//! assert_eq!(dendron.count(), 2);
//!
//! // Every member points back at its dendron.
//! assert!(dendron.iter().all(|roi| roi.dendron() == Some(dendron.id())));
//!
//! // Removing hands the ROI back, unowned.
//! let removed = dendron.remove(0)?;
//! assert_eq!(removed.dendron(), None);
//! assert_eq!(dendron.count(), 1);
//!
//! // Out-of-range removals are errors and change nothing.
//! assert!(matches!(dendron.remove(5), Err(RoiError::IndexOutOfBounds { .. })));
//! assert_eq!(dendron.count(), 1);
//! # Ok::<(), RoiError>(())
//! ```
//!
//! Malformed arrays are rejected at construction:
//!
//! ```rust
//! use ndarray::array;
//! use understory_roi::{Line, RoiError, RoiKind};
//!
//! let err = Line::new(array![[0.0, 0.0]]).unwrap_err();
//! assert_eq!(err, RoiError::RowCount { kind: RoiKind::Line, expected: 2, actual: 1 });
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` in Kurbo, `ndarray`, and `thiserror`.
//! - `libm`: use Kurbo's `libm` backend for `no_std` builds.
//!
//! ## Logging
//!
//! The crate emits records through the [`log`] facade: `debug` when [`Dendron::add`] is
//! given nothing, `trace` on every add and remove. Install any `log` backend to see them.
//!
//! This crate is `no_std` and uses `alloc`.
//! It needs pointer-width atomic read-modify-write support to allocate [`DendronId`]s.

#![no_std]

extern crate alloc;

pub mod dendron;
pub mod error;
pub mod roi;
pub mod shapes;
pub mod types;

pub use dendron::Dendron;
pub use error::RoiError;
pub use roi::{Roi, RoiShape};
pub use shapes::{Ellipsoid, Line, Polygon, Rectangle};
pub use types::{DendronId, RoiKind};
