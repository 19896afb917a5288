//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Rectangular tile ranges at a fixed zoom level

use crate::zoom::{TileNumber, Zoom};
use crate::zoom_range::ZoomRange;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::iter::FusedIterator;

/// Tile address `(x, y, z)`
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileCoord {
    pub x: TileNumber,
    pub y: TileNumber,
    pub z: Zoom,
}

impl TileCoord {
    pub fn new(x: TileNumber, y: TileNumber, z: Zoom) -> TileCoord {
        TileCoord { x, y, z }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TileRangeError {
    /// minx > maxx
    InvertedX { min: TileNumber, max: TileNumber },
    /// miny > maxy
    InvertedY { min: TileNumber, max: TileNumber },
    /// Tile numbers don't fit at the requested zoom level
    Overflow { zoom: Zoom },
}

impl fmt::Display for TileRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileRangeError::InvertedX { min, max } => {
                write!(f, "Invalid tile range: minx {} > maxx {}", min, max)
            }
            TileRangeError::InvertedY { min, max } => {
                write!(f, "Invalid tile range: miny {} > maxy {}", min, max)
            }
            TileRangeError::Overflow { zoom } => {
                write!(f, "Tile numbers out of range at zoom level {}", zoom)
            }
        }
    }
}

impl Error for TileRangeError {}

/// Block of tiles at one zoom level.
///
/// Bounds are inclusive and always satisfy `minx <= maxx` and `miny <= maxy`.
/// Iterating yields the tiles row by row, starting at `(minx, miny)`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileRange {
    zoom: Zoom,
    minx: TileNumber,
    miny: TileNumber,
    maxx: TileNumber,
    maxy: TileNumber,
}

impl TileRange {
    pub fn new(
        zoom: Zoom,
        minx: TileNumber,
        miny: TileNumber,
        maxx: TileNumber,
        maxy: TileNumber,
    ) -> Result<TileRange, TileRangeError> {
        if minx > maxx {
            return Err(TileRangeError::InvertedX {
                min: minx,
                max: maxx,
            });
        }
        if miny > maxy {
            return Err(TileRangeError::InvertedY {
                min: miny,
                max: maxy,
            });
        }
        Ok(TileRange {
            zoom,
            minx,
            miny,
            maxx,
            maxy,
        })
    }
    /// Range containing a single tile
    pub fn single(tile: TileCoord) -> TileRange {
        TileRange {
            zoom: tile.z,
            minx: tile.x,
            miny: tile.y,
            maxx: tile.x,
            maxy: tile.y,
        }
    }
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }
    pub fn minx(&self) -> TileNumber {
        self.minx
    }
    pub fn miny(&self) -> TileNumber {
        self.miny
    }
    pub fn maxx(&self) -> TileNumber {
        self.maxx
    }
    pub fn maxy(&self) -> TileNumber {
        self.maxy
    }
    pub fn diff_x(&self) -> TileNumber {
        self.maxx - self.minx
    }
    pub fn diff_y(&self) -> TileNumber {
        self.maxy - self.miny
    }
    pub fn columns(&self) -> u64 {
        self.diff_x() as u64 + 1
    }
    pub fn rows(&self) -> u64 {
        self.diff_y() as u64 + 1
    }
    /// Number of tiles (columns x rows)
    pub fn count(&self) -> u64 {
        self.rows() * self.columns()
    }
    pub fn contains(&self, tile: &TileCoord) -> bool {
        tile.z == self.zoom
            && tile.x >= self.minx
            && tile.x <= self.maxx
            && tile.y >= self.miny
            && tile.y <= self.maxy
    }
    /// Range covering the same area at another zoom level of a quadtree grid.
    pub fn at_zoom(&self, zoom: Zoom) -> Result<TileRange, TileRangeError> {
        if zoom >= self.zoom {
            let shift = (zoom - self.zoom) as u32;
            let (minx, maxx) =
                scale_up(self.minx, self.maxx, shift).ok_or(TileRangeError::Overflow { zoom })?;
            let (miny, maxy) =
                scale_up(self.miny, self.maxy, shift).ok_or(TileRangeError::Overflow { zoom })?;
            TileRange::new(zoom, minx, miny, maxx, maxy)
        } else {
            let shift = (self.zoom - zoom) as u32;
            let down = |n: TileNumber| n.checked_shr(shift).unwrap_or(0);
            TileRange::new(
                zoom,
                down(self.minx),
                down(self.miny),
                down(self.maxx),
                down(self.maxy),
            )
        }
    }
    /// Ranges for all levels of `zooms`, in ascending zoom order
    pub fn levels(&self, zooms: &ZoomRange) -> Result<Vec<TileRange>, TileRangeError> {
        zooms.iter().map(|zoom| self.at_zoom(zoom)).collect()
    }
    /// Fresh iterator starting at `(minx, miny)`
    pub fn iter(&self) -> TileRangeIter {
        TileRangeIter::new(*self)
    }
}

fn scale_up(min: TileNumber, max: TileNumber, shift: u32) -> Option<(TileNumber, TileNumber)> {
    if shift >= TileNumber::BITS {
        return None;
    }
    let lo = TileNumber::try_from((min as u64) << shift).ok()?;
    let hi = TileNumber::try_from(((max as u64 + 1) << shift) - 1).ok()?;
    Some((lo, hi))
}

impl fmt::Display for TileRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}-{}/{}-{}",
            self.zoom, self.minx, self.maxx, self.miny, self.maxy
        )
    }
}

impl IntoIterator for TileRange {
    type Item = TileCoord;
    type IntoIter = TileRangeIter;

    fn into_iter(self) -> TileRangeIter {
        TileRangeIter::new(self)
    }
}

impl<'a> IntoIterator for &'a TileRange {
    type Item = TileCoord;
    type IntoIter = TileRangeIter;

    fn into_iter(self) -> TileRangeIter {
        self.iter()
    }
}

/// Row-major tile iterator
#[derive(Clone, Debug)]
pub struct TileRangeIter {
    range: TileRange,
    x: TileNumber,
    y: TileNumber,
    finished: bool,
}

impl TileRangeIter {
    fn new(range: TileRange) -> TileRangeIter {
        TileRangeIter {
            range,
            x: range.minx,
            y: range.miny,
            finished: false,
        }
    }
    fn remaining(&self) -> u64 {
        if self.finished {
            return 0;
        }
        ((self.range.maxy - self.y) as u64)
            .saturating_mul(self.range.columns())
            .saturating_add((self.range.maxx - self.x) as u64 + 1)
    }
}

impl Iterator for TileRangeIter {
    type Item = TileCoord;

    fn next(&mut self) -> Option<TileCoord> {
        if self.finished {
            return None;
        }
        let current = TileCoord::new(self.x, self.y, self.range.zoom);
        if self.x < self.range.maxx {
            self.x += 1;
        } else if self.y < self.range.maxy {
            self.x = self.range.minx;
            self.y += 1;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for TileRangeIter {}
