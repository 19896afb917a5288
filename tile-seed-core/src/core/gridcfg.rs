//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use tile_grid::{Grid, Origin};

impl<'a> Config<'a, GridCfg> for Grid {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        if let Some(ref gridname) = grid_cfg.predefined {
            match gridname.as_str() {
                "wgs84" => Ok(Grid::wgs84()),
                "web_mercator" => Ok(Grid::web_mercator()),
                _ => Err(format!("Unkown grid '{}'", gridname)),
            }
        } else if let Some(ref usergrid) = grid_cfg.user {
            let origin = match &usergrid.origin as &str {
                "TopLeft" => Ok(Origin::TopLeft),
                "BottomLeft" => Ok(Origin::BottomLeft),
                _ => Err(format!("Unexpected enum value '{}'", usergrid.origin)),
            };
            if usergrid.width == 0 || usergrid.height == 0 || usergrid.nlevels == 0 {
                return Err("Empty grid definition".to_string());
            }
            let grid = Grid::new(usergrid.width, usergrid.height, usergrid.nlevels, origin?);
            Ok(grid)
        } else {
            Err("Invalid grid definition".to_string())
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
# Predefined grids: web_mercator, wgs84
predefined = "web_mercator"
# User defined quadtree grid:
#[grid.user]
#width = 2   # tile columns at level 0
#height = 1  # tile rows at level 0
#nlevels = 20
#origin = "TopLeft"
"#;
        toml.to_string()
    }
}
