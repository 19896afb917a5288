//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, Config};
use crate::service::tileset::Tileset;
use pbr::ProgressBar;
use std::cmp;
use std::io::{stderr, Stderr, Write};
use tile_grid::{Grid, GridIterator, TileCoord, TileRange, ZoomRange};

/// Bulk operation applied to each seeded tile (prefetch, invalidation, ...)
pub trait TileVisitor {
    fn visit(&mut self, path: &str, tile: &TileCoord) -> Result<(), String>;
}

/// Writes tile paths line by line
pub struct PathWriter<W: Write> {
    out: W,
}

impl<W: Write> PathWriter<W> {
    pub fn new(out: W) -> PathWriter<W> {
        PathWriter { out }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
    /// Flush buffered paths and return the writer
    pub fn finish(self) -> Result<W, String> {
        let mut out = self.out;
        out.flush().map_err(|e| e.to_string())?;
        Ok(out)
    }
}

impl<W: Write> TileVisitor for PathWriter<W> {
    fn visit(&mut self, path: &str, _tile: &TileCoord) -> Result<(), String> {
        writeln!(self.out, "{}", path).map_err(|e| e.to_string())
    }
}

#[derive(Default, PartialEq, Clone, Debug)]
pub struct SeedStats {
    /// Tiles in all levels, including those of other nodes
    pub tiles: u64,
    pub visited: u64,
    /// Tiles handled by other nodes
    pub skipped: u64,
    pub failed: u64,
}

/// Tile limits of one tileset, one entry per zoom level
pub struct SeedPlan<'a> {
    pub tileset: &'a Tileset,
    pub limits: Vec<TileRange>,
}

impl<'a> SeedPlan<'a> {
    pub fn count(&self) -> u64 {
        self.limits.iter().map(|limit| limit.count()).sum()
    }
}

#[derive(Clone)]
pub struct Seeder {
    pub grid: Grid,
    pub tilesets: Vec<Tileset>,
}

impl Seeder {
    pub fn get_tileset(&self, name: &str) -> Option<&Tileset> {
        self.tilesets.iter().find(|t| t.name == name)
    }
    /// Zoom levels of tileset limited by grid and requested levels
    pub fn zoom_range(
        &self,
        tileset: &Tileset,
        minzoom: Option<u8>,
        maxzoom: Option<u8>,
    ) -> Result<Option<ZoomRange>, String> {
        let ts_minzoom = cmp::max(tileset.minzoom(), minzoom.unwrap_or(0));
        let ts_maxzoom = cmp::min(
            cmp::min(tileset.maxzoom(&self.grid), maxzoom.unwrap_or(u8::MAX)),
            self.grid.maxzoom(),
        );
        match minzoom {
            Some(z) if z < ts_minzoom => warn!("Skipping zoom levels <{}", ts_minzoom),
            _ => {}
        }
        match maxzoom {
            Some(z) if z > ts_maxzoom => warn!("Skipping zoom levels >{}", ts_maxzoom),
            _ => {}
        }
        if ts_minzoom > ts_maxzoom {
            warn!("No zoom levels left for tileset '{}'", tileset.name);
            return Ok(None);
        }
        ZoomRange::new(ts_minzoom, ts_maxzoom, &self.grid)
            .map(Some)
            .map_err(|e| format!("Tileset '{}': {}", tileset.name, e))
    }
    /// Tile limits for each zoom level
    pub fn tile_limits(&self, tileset: &Tileset, zooms: &ZoomRange) -> Result<Vec<TileRange>, String> {
        let base = tileset.get_limits(&self.grid)?;
        zooms
            .iter()
            .map(|zoom| {
                let limit = base
                    .at_zoom(zoom)
                    .map_err(|e| format!("Tileset '{}': {}", tileset.name, e))?;
                self.grid
                    .tile_range(zoom, limit.minx(), limit.miny(), limit.maxx(), limit.maxy())
            })
            .collect()
    }
    /// Tile limits of selected tilesets
    pub fn plan(
        &self,
        tileset_name: Option<&str>,
        minzoom: Option<u8>,
        maxzoom: Option<u8>,
    ) -> Result<Vec<SeedPlan>, String> {
        if let Some(name) = tileset_name {
            if self.get_tileset(name).is_none() {
                return Err(format!("Unknown tileset '{}'", name));
            }
        }
        let mut plans = Vec::new();
        for tileset in &self.tilesets {
            if tileset_name.is_some() && tileset_name != Some(tileset.name.as_str()) {
                continue;
            }
            let limits = match self.zoom_range(tileset, minzoom, maxzoom)? {
                Some(zooms) => {
                    debug!("tileset '{}' zoom levels {}", tileset.name, zooms);
                    self.tile_limits(tileset, &zooms)?
                }
                None => Vec::new(),
            };
            plans.push(SeedPlan { tileset, limits });
        }
        Ok(plans)
    }
    /// Visit all tiles of selected tilesets
    pub fn seed<V: TileVisitor>(
        &self,
        tileset_name: Option<&str>,
        minzoom: Option<u8>,
        maxzoom: Option<u8>,
        nodes: Option<u8>,
        nodeno: Option<u8>,
        progress: bool,
        visitor: &mut V,
    ) -> Result<SeedStats, String> {
        let nodes = nodes.unwrap_or(1) as u64;
        let nodeno = nodeno.unwrap_or(0) as u64;
        if nodes == 0 || nodeno >= nodes {
            return Err(format!(
                "Invalid node number {} (expected 0 <= nodeno < {})",
                nodeno, nodes
            ));
        }
        let mut stats = SeedStats::default();
        for plan in self.plan(tileset_name, minzoom, maxzoom)? {
            if progress {
                eprintln!("Seeding tileset '{}'...", plan.tileset.name);
            }
            info!(
                "Seeding tileset '{}' ({} tiles)",
                plan.tileset.name,
                plan.count()
            );
            self.seed_tileset(&plan, nodes, nodeno, progress, visitor, &mut stats);
        }
        info!(
            "{} tiles visited, {} skipped, {} failed",
            stats.visited, stats.skipped, stats.failed
        );
        Ok(stats)
    }
    fn seed_tileset<V: TileVisitor>(
        &self,
        plan: &SeedPlan,
        nodes: u64,
        nodeno: u64,
        progress: bool,
        visitor: &mut V,
        stats: &mut SeedStats,
    ) {
        let mut tileno: u64 = 0;
        let mut pb: Option<ProgressBar<Stderr>> = None;
        let mut pb_z = None;
        for tile in GridIterator::new(plan.limits.clone()) {
            if progress && pb_z != Some(tile.z) {
                pb_z = Some(tile.z);
                if let Some(limit) = plan.limits.iter().find(|l| l.zoom() == tile.z) {
                    debug!("level {}: {}", tile.z, limit);
                    let total = node_share(tileno, limit.count(), nodes, nodeno);
                    let mut bar = self.progress_bar(&format!("Level {}: ", tile.z), total);
                    bar.tick();
                    if let Some(mut done) = pb.replace(bar) {
                        done.finish();
                    }
                }
            }

            stats.tiles += 1;
            let skip = tileno % nodes != nodeno;
            tileno += 1;
            if skip {
                stats.skipped += 1;
                continue;
            }

            let path = plan.tileset.tile_path(&self.grid, &tile);
            match visitor.visit(&path, &tile) {
                Ok(()) => stats.visited += 1,
                Err(err) => {
                    error!("Error visiting {}: {}", path, err);
                    stats.failed += 1;
                }
            }

            if let Some(ref mut bar) = pb {
                bar.inc();
            }
        }
        if let Some(mut bar) = pb {
            bar.finish();
        }
    }
    fn progress_bar(&self, msg: &str, total: u64) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), total);
        pb.message(msg);
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
}

/// Number of tile numbers in `first..first+count` visited by node `nodeno`
pub(crate) fn node_share(first: u64, count: u64, nodes: u64, nodeno: u64) -> u64 {
    // tile numbers below `end` with n % nodes == nodeno
    let below = |end: u64| {
        if end > nodeno {
            (end - nodeno - 1) / nodes + 1
        } else {
            0
        }
    };
    below(first.saturating_add(count)) - below(first)
}

impl<'a> Config<'a, ApplicationCfg> for Seeder {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let grid = Grid::from_config(&config.grid)?;
        let tilesets = config
            .tilesets
            .iter()
            .map(Tileset::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Seeder { grid, tilesets })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_SEED);
        config.push_str(&Grid::gen_config());
        config.push_str(&Tileset::gen_config());
        config.push_str(TOML_SEED_NODES);
        config
    }
}

const TOML_SEED: &'static str = r#"# tile_seed configuration
"#;

const TOML_SEED_NODES: &'static str = r#"
#[seed]
#nodes = 4   # Number of seeding nodes
#nodeno = 0  # Number of this node (0 <= n < nodes)
#progress = true
"#;
