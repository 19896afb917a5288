//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg, TilesetCfg, DEFAULT_CONFIG};
use crate::core::parse_config;
use std::env;

#[test]
fn test_load_config() {
    let config = read_config("src/test/seed.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.grid.predefined, Some("web_mercator".to_string()));
    assert_eq!(config.tilesets.len(), 2);
    assert_eq!(config.tilesets[0].name, "osm");
    assert_eq!(config.tilesets[0].format, "pbf");
    assert!(config.tilesets[0].limits.is_none());
    assert_eq!(config.tilesets[1].format, "png");
    let limits = config.tilesets[1].limits.as_ref().unwrap();
    assert_eq!((limits.zoom, limits.minx, limits.maxy), (10, 535, 665));
    let seed = config.seed.expect("missing [seed]");
    assert_eq!(seed.nodes, Some(2));
    assert_eq!(seed.nodeno, Some(1));
    assert_eq!(seed.progress, Some(false));
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.tilesets[0].name, "tiles");
    assert_eq!(config.tilesets[0].maxzoom, Some(5));
    assert!(config.seed.is_none());
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let toml = r#"
        [grid]
        predefined = "web_mercator"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().contains("tileset"));
}

#[test]
fn test_env_template() {
    env::set_var("TILE_SEED_TEST_NAME", "from_env");
    let toml = r#"
        name = "{{env.TILE_SEED_TEST_NAME}}"
        maxzoom = 8
        "#;
    let config: TilesetCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.name, "from_env");
    assert_eq!(config.maxzoom, Some(8));

    let toml = r#"
        name = "${TILE_SEED_TEST_NAME}"
        "#;
    let config: Result<TilesetCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        config.err(),
        Some("Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string())
    );
}
