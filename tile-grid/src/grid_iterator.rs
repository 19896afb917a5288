//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::tile_range::{TileCoord, TileRange, TileRangeIter};
use std::iter::FusedIterator;

/// Level-by-level iterator
pub struct GridIterator {
    limits: Vec<TileRange>,
    level: usize,
    tiles: Option<TileRangeIter>,
}

impl GridIterator {
    /// Iterate over `limits` in the given order, row by row within each level
    pub fn new(limits: Vec<TileRange>) -> GridIterator {
        let tiles = limits.first().map(|limit| limit.iter());
        GridIterator {
            limits,
            level: 0,
            tiles,
        }
    }
    /// Total number of tiles in all levels
    pub fn total(&self) -> u64 {
        self.limits.iter().map(|limit| limit.count()).sum()
    }
}

impl Iterator for GridIterator {
    type Item = TileCoord;

    fn next(&mut self) -> Option<TileCoord> {
        loop {
            let tiles = self.tiles.as_mut()?;
            if let Some(tile) = tiles.next() {
                return Some(tile);
            }
            self.level += 1;
            self.tiles = self.limits.get(self.level).map(|limit| limit.iter());
        }
    }
}

impl FusedIterator for GridIterator {}

#[test]
fn test_mercator_iter() {
    use crate::grid::Grid;
    use crate::zoom_range::ZoomRange;

    let grid = Grid::web_mercator();
    let zooms = ZoomRange::new(0, 2, &grid).unwrap();
    let limits = grid.full_range(0).unwrap().levels(&zooms).unwrap();
    let griditer = GridIterator::new(limits);
    assert_eq!(griditer.total(), 21);
    let cells = griditer
        .map(|t| (t.z, t.x, t.y))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (0, 0, 0),
            (1, 0, 0),
            (1, 1, 0),
            (1, 0, 1),
            (1, 1, 1),
            (2, 0, 0),
            (2, 1, 0),
            (2, 2, 0),
            (2, 3, 0),
            (2, 0, 1),
            (2, 1, 1),
            (2, 2, 1),
            (2, 3, 1),
            (2, 0, 2),
            (2, 1, 2),
            (2, 2, 2),
            (2, 3, 2),
            (2, 0, 3),
            (2, 1, 3),
            (2, 2, 3),
            (2, 3, 3)
        ]
    );

    let zooms = ZoomRange::new(2, 1, &grid).unwrap();
    let limits = grid.full_range(0).unwrap().levels(&zooms).unwrap();
    let cells = GridIterator::new(limits).collect::<Vec<_>>();
    assert_eq!(cells.len(), 4 + 16);
    assert_eq!(cells[0], TileCoord::new(0, 0, 1));
    assert_eq!(cells[4], TileCoord::new(0, 0, 2));

    let zooms = ZoomRange::new(0, 0, &grid).unwrap();
    let limits = grid.full_range(0).unwrap().levels(&zooms).unwrap();
    let cells = GridIterator::new(limits).collect::<Vec<_>>();
    assert_eq!(cells, vec![TileCoord::new(0, 0, 0)]);
}

#[test]
fn test_empty_limits() {
    let mut griditer = GridIterator::new(Vec::new());
    assert_eq!(griditer.total(), 0);
    assert_eq!(griditer.next(), None);
    assert_eq!(griditer.next(), None);
}

#[test]
fn test_sublevel_iter() {
    // one tile at level 1, drilled down to level 3
    let base = TileRange::single(TileCoord::new(1, 0, 1));
    let limits = vec![base.at_zoom(2).unwrap(), base.at_zoom(3).unwrap()];
    let griditer = GridIterator::new(limits);
    assert_eq!(griditer.total(), 4 + 16);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells.first(), Some(&TileCoord::new(2, 0, 2)));
    assert_eq!(cells[3], TileCoord::new(3, 1, 2));
    assert_eq!(cells.last(), Some(&TileCoord::new(7, 3, 3)));
}
