// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Dendron`]: an ordered collection that owns ROIs.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::RoiError;
use crate::roi::Roi;
use crate::types::DendronId;

/// Ordered owner of ROIs.
///
/// ## Ownership protocol
///
/// - [`Dendron::add`] moves an ROI in, sets its back-reference to [`Dendron::id`],
///   and appends it. Insertion order is significant: it defines the indices
///   accepted by [`Dendron::remove`].
/// - [`Dendron::remove`] takes the ROI at a position out, clears its back-reference,
///   and returns it to the caller.
/// - Every member's [`Roi::dendron`] is `Some(self.id())` for as long as it is held.
///
/// Because ROIs are moved in, one ROI can never be held twice, whether by the
/// same dendron or by two different ones.
///
/// ## Count
///
/// [`Dendron::count`] is recomputed after every structural mutation and always
/// equals the number of held ROIs.
///
/// ## Threading
///
/// A dendron is plain data with no internal synchronization. Share it across
/// threads behind a lock if more than one thread mutates it.
pub struct Dendron {
    id: DendronId,
    rois: Vec<Roi>,
    count: usize,
}

impl core::fmt::Debug for Dendron {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dendron")
            .field("id", &self.id)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl Default for Dendron {
    fn default() -> Self {
        Self::new()
    }
}

impl Dendron {
    /// Create an empty dendron with a fresh [`DendronId`].
    pub fn new() -> Self {
        Self {
            id: DendronId::next(),
            rois: Vec::new(),
            count: 0,
        }
    }

    /// Create an empty dendron with room for at least `capacity` ROIs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: DendronId::next(),
            rois: Vec::with_capacity(capacity),
            count: 0,
        }
    }

    /// This dendron's identifier, as stored in member ROIs.
    pub fn id(&self) -> DendronId {
        self.id
    }

    /// Add an ROI to the end of the dendron.
    ///
    /// `None` is accepted and ignored: the dendron is left untouched and no error
    /// is returned. A debug-level log record notes the call, since passing
    /// nothing is usually a caller mistake.
    pub fn add(&mut self, roi: Option<Roi>) {
        let Some(roi) = roi else {
            debug!("{}: ignoring add of an absent ROI", self.id);
            return;
        };
        self.push(roi);
    }

    /// Add an ROI (or a bare shape) to the end of the dendron and return its index.
    ///
    /// This is the non-optional form of [`Dendron::add`]: ownership is recorded the
    /// same way, and the returned index is the one [`Dendron::remove`] accepts
    /// until an earlier ROI is removed.
    pub fn push(&mut self, roi: impl Into<Roi>) -> usize {
        let mut roi = roi.into();
        roi.set_dendron(Some(self.id));
        trace!("{}: adding {} ROI at index {}", self.id, roi.kind(), self.rois.len());
        self.rois.push(roi);
        self.update_count();
        self.count - 1
    }

    /// Remove the ROI at `index` and return it with its back-reference cleared.
    ///
    /// Returns [`RoiError::IndexOutOfBounds`] if `index >= self.count()`, in which
    /// case the dendron is left unmodified. Later ROIs shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Roi, RoiError> {
        if index >= self.rois.len() {
            return Err(RoiError::IndexOutOfBounds {
                index,
                count: self.count,
            });
        }
        let mut roi = self.rois.remove(index);
        roi.set_dendron(None);
        self.update_count();
        trace!("{}: removed {} ROI at index {}", self.id, roi.kind(), index);
        Ok(roi)
    }

    /// Remove every ROI, in order, clearing each back-reference.
    pub fn clear(&mut self) -> Vec<Roi> {
        let mut out: Vec<Roi> = self.rois.drain(..).collect();
        for roi in &mut out {
            roi.set_dendron(None);
        }
        self.update_count();
        trace!("{}: cleared {} ROIs", self.id, out.len());
        out
    }

    /// Number of held ROIs.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the dendron holds no ROIs.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The ROI at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Roi> {
        self.rois.get(index)
    }

    /// Held ROIs in insertion order.
    pub fn rois(&self) -> &[Roi] {
        &self.rois
    }

    /// Iterate held ROIs in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Roi> {
        self.rois.iter()
    }

    /// Whether `roi` is currently held by this dendron.
    pub fn contains(&self, roi: &Roi) -> bool {
        roi.dendron() == Some(self.id)
    }

    fn update_count(&mut self) {
        self.count = self.rois.len();
    }
}

impl Extend<Roi> for Dendron {
    fn extend<I: IntoIterator<Item = Roi>>(&mut self, iter: I) {
        for roi in iter {
            self.push(roi);
        }
    }
}

impl<'a> IntoIterator for &'a Dendron {
    type Item = &'a Roi;
    type IntoIter = core::slice::Iter<'a, Roi>;

    fn into_iter(self) -> Self::IntoIter {
        self.rois.iter()
    }
}
