//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Zoom levels and their validation

use std::error::Error;
use std::fmt;

/// Zoom level
pub type Zoom = u8;

/// Tile number along one axis
pub type TileNumber = u32;

/// Zoom level rejected by a validator
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct InvalidZoom {
    pub zoom: Zoom,
    pub minzoom: Zoom,
    pub maxzoom: Zoom,
}

impl fmt::Display for InvalidZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid zoom level {} (expected {}-{})",
            self.zoom, self.minzoom, self.maxzoom
        )
    }
}

impl Error for InvalidZoom {}

/// Decides which zoom levels a tiling scheme supports
pub trait ZoomValidator {
    fn validate(&self, zoom: Zoom) -> Result<(), InvalidZoom>;
}

impl<F> ZoomValidator for F
where
    F: Fn(Zoom) -> Result<(), InvalidZoom>,
{
    fn validate(&self, zoom: Zoom) -> Result<(), InvalidZoom> {
        self(zoom)
    }
}

/// Inclusive zoom limits
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ZoomBounds {
    pub minzoom: Zoom,
    pub maxzoom: Zoom,
}

impl ZoomBounds {
    pub fn new(minzoom: Zoom, maxzoom: Zoom) -> ZoomBounds {
        ZoomBounds { minzoom, maxzoom }
    }
}

impl ZoomValidator for ZoomBounds {
    fn validate(&self, zoom: Zoom) -> Result<(), InvalidZoom> {
        if zoom >= self.minzoom && zoom <= self.maxzoom {
            Ok(())
        } else {
            Err(InvalidZoom {
                zoom,
                minzoom: self.minzoom,
                maxzoom: self.maxzoom,
            })
        }
    }
}

#[test]
fn test_zoom_bounds() {
    let bounds = ZoomBounds::new(0, 19);
    assert_eq!(bounds.validate(0), Ok(()));
    assert_eq!(bounds.validate(19), Ok(()));
    assert_eq!(
        bounds.validate(20),
        Err(InvalidZoom {
            zoom: 20,
            minzoom: 0,
            maxzoom: 19
        })
    );

    let bounds = ZoomBounds::new(3, 5);
    assert!(bounds.validate(2).is_err());
    assert_eq!(
        bounds.validate(2).unwrap_err().to_string(),
        "Invalid zoom level 2 (expected 3-5)"
    );
}

#[test]
fn test_closure_validator() {
    let even_only = |zoom: Zoom| {
        if zoom % 2 == 0 {
            Ok(())
        } else {
            Err(InvalidZoom {
                zoom,
                minzoom: 0,
                maxzoom: Zoom::MAX,
            })
        }
    };
    assert!(even_only.validate(4).is_ok());
    assert!(even_only.validate(5).is_err());
}
