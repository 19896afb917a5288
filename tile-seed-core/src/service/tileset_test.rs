//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::TilesetCfg;
use crate::core::parse_config;
use crate::core::Config;
use crate::service::tileset::Tileset;
use tile_grid::{Grid, Origin, TileCoord, TileRange};

#[test]
fn test_tileset_from_config() {
    let toml = r#"
        name = "zurich"
        minzoom = 10
        limits = { zoom = 10, minx = 535, miny = 664, maxx = 537, maxy = 665 }
        "#;
    let cfg: TilesetCfg = parse_config(toml.to_string(), "").unwrap();
    let tileset = Tileset::from_config(&cfg).unwrap();
    let grid = Grid::web_mercator();
    assert_eq!(tileset.minzoom(), 10);
    assert_eq!(tileset.maxzoom(&grid), 22);
    assert_eq!(tileset.format, "pbf");
    assert_eq!(
        tileset.get_limits(&grid),
        Ok(TileRange::new(10, 535, 664, 537, 665).unwrap())
    );
}

#[test]
fn test_inverted_limits() {
    let toml = r#"
        name = "broken"
        limits = { zoom = 3, minx = 5, miny = 0, maxx = 1, maxy = 1 }
        "#;
    let cfg: TilesetCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        Tileset::from_config(&cfg).err(),
        Some("Tileset 'broken': Invalid tile range: minx 5 > maxx 1".to_string())
    );
}

#[test]
fn test_default_limits() {
    let tileset = Tileset {
        name: "world".to_string(),
        minzoom: None,
        maxzoom: None,
        limits: None,
        format: "png".to_string(),
    };
    assert_eq!(tileset.minzoom(), 0);
    let limits = tileset.get_limits(&Grid::wgs84()).unwrap();
    assert_eq!((limits.zoom(), limits.columns(), limits.rows()), (0, 2, 1));
}

#[test]
fn test_tile_path() {
    let tileset = Tileset {
        name: "osm".to_string(),
        minzoom: None,
        maxzoom: None,
        limits: None,
        format: "pbf".to_string(),
    };
    let tile = TileCoord::new(486, 691, 10);
    assert_eq!(tileset.tile_path(&Grid::web_mercator(), &tile), "osm/10/486/332.pbf");
    let grid = Grid::new(1, 1, 20, Origin::TopLeft);
    assert_eq!(tileset.tile_path(&grid, &tile), "osm/10/486/691.pbf");
}
