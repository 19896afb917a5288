//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Tile grids

use crate::tile_range::{TileRange, TileRangeError};
use crate::zoom::{InvalidZoom, TileNumber, Zoom, ZoomValidator};
use std::cmp;

/// Grid origin
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Origin {
    TopLeft,
    BottomLeft, //TopRight, BottomRight
}

/// Quadtree tile grid.
///
/// Every zoom level doubles the number of tiles in both directions.
#[derive(PartialEq, Clone, Debug)]
pub struct Grid {
    /// Number of tile columns at zoom level 0.
    width: u32,
    /// Number of tile rows at zoom level 0.
    height: u32,
    /// Number of zoom levels, starting at 0.
    nlevels: u8,
    /// Grid origin
    pub origin: Origin,
}

impl Grid {
    /// WGS84 grid (two tiles at level 0)
    pub fn wgs84() -> Grid {
        Grid::new(2, 1, 18, Origin::BottomLeft)
    }

    /// Web Mercator grid (Google maps compatible)
    pub fn web_mercator() -> Grid {
        Grid::new(1, 1, 23, Origin::BottomLeft)
    }

    pub fn new(width: u32, height: u32, nlevels: u8, origin: Origin) -> Grid {
        Grid {
            width,
            height,
            nlevels,
            origin,
        }
    }
    pub fn nlevels(&self) -> u8 {
        self.nlevels
    }
    pub fn maxzoom(&self) -> u8 {
        self.nlevels.saturating_sub(1)
    }
    /// (maxx, maxy) of grid level, i.e. number of columns and rows.
    /// Saturates at `u64::MAX` for deep levels.
    pub fn level_limit(&self, zoom: Zoom) -> (u64, u64) {
        let scale = 1u64.checked_shl(zoom as u32).unwrap_or(u64::MAX);
        (
            (self.width as u64).saturating_mul(scale),
            (self.height as u64).saturating_mul(scale),
        )
    }
    /// reverse y tile for XYZ adressing scheme
    pub fn ytile_from_xyz(&self, ytile: TileNumber, zoom: Zoom) -> TileNumber {
        // y = maxy-ytile-1
        let maxy = self.level_limit(zoom).1;
        let y = maxy.saturating_sub(ytile as u64).saturating_sub(1);
        cmp::min(y, TileNumber::MAX as u64) as TileNumber
    }
    /// All tiles of a grid level
    pub fn full_range(&self, zoom: Zoom) -> Result<TileRange, String> {
        self.validate(zoom).map_err(|e| e.to_string())?;
        let (maxx, maxy) = self.level_limit(zoom);
        let last = |n: u64| {
            if n == 0 || n - 1 > TileNumber::MAX as u64 {
                Err(TileRangeError::Overflow { zoom })
            } else {
                Ok((n - 1) as TileNumber)
            }
        };
        let maxx = last(maxx).map_err(|e| e.to_string())?;
        let maxy = last(maxy).map_err(|e| e.to_string())?;
        TileRange::new(zoom, 0, 0, maxx, maxy).map_err(|e| e.to_string())
    }
    /// Tile range limited to the grid level
    pub fn tile_range(
        &self,
        zoom: Zoom,
        minx: TileNumber,
        miny: TileNumber,
        maxx: TileNumber,
        maxy: TileNumber,
    ) -> Result<TileRange, String> {
        let level = self.full_range(zoom)?;
        // to avoid requesting out-of-range tiles
        let maxx = cmp::min(maxx, level.maxx());
        let maxy = cmp::min(maxy, level.maxy());
        TileRange::new(zoom, minx, miny, maxx, maxy).map_err(|e| e.to_string())
    }
}

impl ZoomValidator for Grid {
    fn validate(&self, zoom: Zoom) -> Result<(), InvalidZoom> {
        if self.nlevels > 0 && zoom < self.nlevels {
            Ok(())
        } else {
            Err(InvalidZoom {
                zoom,
                minzoom: 0,
                maxzoom: self.maxzoom(),
            })
        }
    }
}
