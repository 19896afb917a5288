//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Inclusive zoom level ranges

use crate::zoom::{InvalidZoom, Zoom, ZoomValidator};
use std::cmp;
use std::fmt;
use std::iter::FusedIterator;

/// Validated zoom levels `min..=max`.
///
/// ```rust
/// use tile_grid::{ZoomBounds, ZoomRange};
///
/// let zooms = ZoomRange::new(5, 2, &ZoomBounds::new(0, 22)).unwrap();
/// assert_eq!(zooms.to_vec(), vec![2, 3, 4, 5]);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ZoomRange {
    min: Zoom,
    max: Zoom,
}

impl ZoomRange {
    /// Zoom range between `z1` and `z2` in any order.
    /// Fails if the validator rejects one of the levels.
    pub fn new<V: ZoomValidator + ?Sized>(
        z1: Zoom,
        z2: Zoom,
        validator: &V,
    ) -> Result<ZoomRange, InvalidZoom> {
        validator.validate(z1)?;
        validator.validate(z2)?;
        Ok(ZoomRange {
            min: cmp::min(z1, z2),
            max: cmp::max(z1, z2),
        })
    }
    pub fn min(&self) -> Zoom {
        self.min
    }
    pub fn max(&self) -> Zoom {
        self.max
    }
    pub fn diff_zoom(&self) -> Zoom {
        self.max - self.min
    }
    /// Number of zoom levels
    pub fn count(&self) -> u16 {
        self.diff_zoom() as u16 + 1
    }
    pub fn contains(&self, zoom: Zoom) -> bool {
        zoom >= self.min && zoom <= self.max
    }
    pub fn to_vec(&self) -> Vec<Zoom> {
        (self.min..=self.max).collect()
    }
    pub fn iter(&self) -> ZoomRangeIter {
        ZoomRangeIter::new(*self)
    }
}

impl fmt::Display for ZoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl IntoIterator for ZoomRange {
    type Item = Zoom;
    type IntoIter = ZoomRangeIter;

    fn into_iter(self) -> ZoomRangeIter {
        ZoomRangeIter::new(self)
    }
}

impl<'a> IntoIterator for &'a ZoomRange {
    type Item = Zoom;
    type IntoIter = ZoomRangeIter;

    fn into_iter(self) -> ZoomRangeIter {
        self.iter()
    }
}

/// Ascending zoom level iterator
#[derive(Clone, Debug)]
pub struct ZoomRangeIter {
    z: Zoom,
    max: Zoom,
    finished: bool,
}

impl ZoomRangeIter {
    fn new(range: ZoomRange) -> ZoomRangeIter {
        ZoomRangeIter {
            z: range.min,
            max: range.max,
            finished: false,
        }
    }
}

impl Iterator for ZoomRangeIter {
    type Item = Zoom;

    fn next(&mut self) -> Option<Zoom> {
        if self.finished {
            return None;
        }
        let current = self.z;
        if self.z < self.max {
            self.z += 1;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.finished {
            0
        } else {
            (self.max - self.z) as usize + 1
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for ZoomRangeIter {}

impl FusedIterator for ZoomRangeIter {}
