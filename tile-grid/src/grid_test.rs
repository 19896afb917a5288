//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{Grid, Origin};
use crate::tile_range::TileRange;
use crate::zoom::ZoomValidator;

#[test]
fn test_levels() {
    let grid = Grid::web_mercator();
    assert_eq!(grid.nlevels(), 23);
    assert_eq!(grid.maxzoom(), 22);
    assert_eq!(grid.level_limit(0), (1, 1));
    assert_eq!(grid.level_limit(10), (1024, 1024));

    let grid = Grid::wgs84();
    assert_eq!(grid.maxzoom(), 17);
    assert_eq!(grid.level_limit(0), (2, 1));
    assert_eq!(grid.level_limit(3), (16, 8));
}

#[test]
fn test_validate() {
    let grid = Grid::web_mercator();
    assert!(grid.validate(0).is_ok());
    assert!(grid.validate(22).is_ok());
    assert!(grid.validate(23).is_err());

    let grid = Grid::new(1, 1, 0, Origin::TopLeft);
    assert!(grid.validate(0).is_err());
}

#[test]
fn test_full_range() {
    let grid = Grid::web_mercator();
    assert_eq!(grid.full_range(0), TileRange::new(0, 0, 0, 0, 0).map_err(|e| e.to_string()));
    let level = grid.full_range(2).unwrap();
    assert_eq!(level.count(), 16);
    assert_eq!((level.maxx(), level.maxy()), (3, 3));

    let level = Grid::wgs84().full_range(1).unwrap();
    assert_eq!((level.columns(), level.rows()), (4, 2));

    assert_eq!(
        grid.full_range(23),
        Err("Invalid zoom level 23 (expected 0-22)".to_string())
    );
}

#[test]
fn test_tile_range_clamped() {
    let grid = Grid::web_mercator();
    let range = grid.tile_range(2, 1, 1, 10, 10).unwrap();
    assert_eq!(range, TileRange::new(2, 1, 1, 3, 3).unwrap());

    // completely outside of grid level
    assert!(grid.tile_range(2, 5, 0, 6, 1).is_err());
}

#[test]
fn test_ytile_from_xyz() {
    let grid = Grid::web_mercator();
    assert_eq!(grid.ytile_from_xyz(332, 10), 691);
    assert_eq!(grid.ytile_from_xyz(691, 10), 332);
    assert_eq!(grid.ytile_from_xyz(0, 0), 0);
    //overflow
    assert_eq!(grid.ytile_from_xyz(u32::MAX, 10), 0);
}

#[test]
fn test_deep_levels() {
    let grid = Grid::new(1, 1, 255, Origin::TopLeft);
    assert_eq!(grid.level_limit(63), (1 << 63, 1 << 63));
    assert_eq!(grid.level_limit(64), (u64::MAX, u64::MAX));
    assert_eq!(grid.level_limit(200), (u64::MAX, u64::MAX));
    assert_eq!(Grid::new(3, 2, 255, Origin::TopLeft).level_limit(63), (u64::MAX, u64::MAX));

    // rows beyond TileNumber saturate
    assert_eq!(grid.ytile_from_xyz(0, 32), u32::MAX);
    assert_eq!(grid.ytile_from_xyz(0, 40), u32::MAX);
    assert_eq!(grid.ytile_from_xyz(0, 64), u32::MAX);
    assert_eq!(grid.ytile_from_xyz(1, 32), u32::MAX - 1);
    assert!(grid.full_range(33).is_err());
}
