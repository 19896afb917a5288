//! A library for enumerating map tiles over rectangular ranges and zoom levels
//!
//! ## Tile ranges
//!
//! ```rust
//! use tile_grid::{TileCoord, TileRange};
//!
//! let range = TileRange::new(3, 1, 0, 2, 1).unwrap();
//! assert_eq!(range.count(), 4);
//! let tiles: Vec<TileCoord> = range.iter().collect();
//! assert_eq!(tiles[1], TileCoord::new(2, 0, 3));
//! ```
//!
//! ## Zoom ranges
//!
//! ```rust
//! use tile_grid::{Grid, ZoomRange};
//!
//! let grid = Grid::web_mercator();
//! let zooms = ZoomRange::new(5, 2, &grid).unwrap();
//! assert_eq!(zooms.to_vec(), vec![2, 3, 4, 5]);
//! assert!(ZoomRange::new(2, 25, &grid).is_err());
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use tile_grid::{Grid, GridIterator, ZoomRange};
//!
//! let grid = Grid::web_mercator();
//! let zooms = ZoomRange::new(0, 2, &grid).unwrap();
//! let limits = grid.full_range(0).unwrap().levels(&zooms).unwrap();
//! for tile in GridIterator::new(limits) {
//!     println!("Tile {}/{}/{}", tile.z, tile.x, tile.y);
//! }
//! ```

mod grid;
mod grid_iterator;
#[cfg(test)]
mod grid_test;
mod tile_range;
mod zoom;
mod zoom_range;

pub use grid::{Grid, Origin};
pub use grid_iterator::GridIterator;
pub use tile_range::{TileCoord, TileRange, TileRangeError, TileRangeIter};
pub use zoom::{InvalidZoom, TileNumber, Zoom, ZoomBounds, ZoomValidator};
pub use zoom_range::{ZoomRange, ZoomRangeIter};
