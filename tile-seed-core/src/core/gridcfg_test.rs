//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::parse_config;
use crate::core::Config;
use tile_grid::{Grid, Origin, ZoomValidator};

#[test]
fn test_grid_from_config() {
    let toml = r#"
        #[grid]
        predefined = "web_mercator"
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = Grid::from_config(&config).unwrap();
    assert_eq!(grid, Grid::web_mercator());

    let toml = r#"
        #[grid.user]
        [user]
        width = 2
        height = 1
        nlevels = 20
        origin = "TopLeft"
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = Grid::from_config(&config).unwrap();
    assert_eq!(grid.origin, Origin::TopLeft);
    assert_eq!(grid.maxzoom(), 19);
    assert_eq!(grid.level_limit(1), (4, 2));
    assert!(grid.validate(20).is_err());
}

#[test]
fn test_grid_config_errors() {
    let toml = r#"
        predefined = "lambert"
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        Grid::from_config(&config).err(),
        Some("Unkown grid 'lambert'".to_string())
    );

    let toml = r#"
        [user]
        width = 1
        height = 1
        nlevels = 10
        origin = "Center"
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        Grid::from_config(&config).err(),
        Some("Unexpected enum value 'Center'".to_string())
    );

    let config: GridCfg = parse_config("".to_string(), "").unwrap();
    assert_eq!(
        Grid::from_config(&config).err(),
        Some("Invalid grid definition".to_string())
    );
}
