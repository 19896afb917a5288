//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub grid: GridCfg,
    #[serde(rename = "tileset")]
    pub tilesets: Vec<TilesetCfg>,
    pub seed: Option<SeedCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    pub predefined: Option<String>,
    pub user: Option<UserGridCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UserGridCfg {
    /// Number of tile columns at zoom level 0.
    pub width: u32,
    /// Number of tile rows at zoom level 0.
    pub height: u32,
    /// Number of zoom levels. Valid zoom levels are 0 to nlevels-1.
    pub nlevels: u8,
    /// Grid origin
    pub origin: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilesetCfg {
    pub name: String,
    pub minzoom: Option<u8>,
    pub maxzoom: Option<u8>,
    /// Tile limits at a reference zoom level (Default: full grid)
    pub limits: Option<TileLimitsCfg>,
    /// File extension of cached tiles
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TileLimitsCfg {
    pub zoom: u8,
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

pub fn default_format() -> String {
    "pbf".to_string()
}

#[derive(Deserialize, Default, Clone, Debug)]
pub struct SeedCfg {
    /// Number of seeding nodes
    pub nodes: Option<u8>,
    /// Number of this node (0 <= n < nodes)
    pub nodeno: Option<u8>,
    pub progress: Option<bool>,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[grid]
predefined = "web_mercator"

[[tileset]]
name = "tiles"
minzoom = 0
maxzoom = 5
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
