//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::Config;
use crate::core::config::TilesetCfg;
use tile_grid::{Grid, Origin, TileCoord, TileRange};

/// Named set of cached tiles
#[derive(Clone, Debug)]
pub struct Tileset {
    pub name: String,
    pub minzoom: Option<u8>,
    pub maxzoom: Option<u8>,
    /// Tile limits at their reference zoom level
    pub limits: Option<TileRange>,
    pub format: String,
}

impl Tileset {
    pub fn minzoom(&self) -> u8 {
        self.minzoom.unwrap_or(0)
    }
    pub fn maxzoom(&self, grid: &Grid) -> u8 {
        self.maxzoom.unwrap_or(grid.maxzoom())
    }
    /// Tile limits, the full grid if undefined
    pub fn get_limits(&self, grid: &Grid) -> Result<TileRange, String> {
        match self.limits {
            Some(limits) => Ok(limits),
            None => grid.full_range(0),
        }
    }
    /// Cache path in XYZ addressing scheme
    pub fn tile_path(&self, grid: &Grid, tile: &TileCoord) -> String {
        // Bottom-left grids are stored with flipped rows
        let y = match grid.origin {
            Origin::BottomLeft => grid.ytile_from_xyz(tile.y, tile.z),
            Origin::TopLeft => tile.y,
        };
        format!("{}/{}/{}/{}.{}", self.name, tile.z, tile.x, y, self.format)
    }
}

impl<'a> Config<'a, TilesetCfg> for Tileset {
    fn from_config(ts_cfg: &TilesetCfg) -> Result<Self, String> {
        let limits = match ts_cfg.limits {
            Some(ref cfg) => Some(
                TileRange::new(cfg.zoom, cfg.minx, cfg.miny, cfg.maxx, cfg.maxy)
                    .map_err(|e| format!("Tileset '{}': {}", ts_cfg.name, e))?,
            ),
            None => None,
        };
        Ok(Tileset {
            name: ts_cfg.name.clone(),
            minzoom: ts_cfg.minzoom,
            maxzoom: ts_cfg.maxzoom,
            limits,
            format: ts_cfg.format.clone(),
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[[tileset]]
name = "tiles"
minzoom = 0
maxzoom = 14
#format = "png"
# Tile limits at reference zoom level (Default: full grid)
#limits = { zoom = 10, minx = 530, miny = 356, maxx = 538, maxy = 362 }
"#;
        toml.to_string()
    }
}
