//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;
use tile_seed_core::core::config::DEFAULT_CONFIG;
use tile_seed_core::core::{parse_config, read_config, ApplicationCfg, Config};
use tile_seed_core::service::{PathWriter, Seeder};
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn exit_with_error(msg: &str) -> ! {
    eprintln!("Error - {}", msg);
    process::exit(1)
}

/// Parse optional argument value
fn arg_value<T: FromStr>(args: &ArgMatches<'_>, name: &str, what: &str) -> Option<T> {
    args.value_of(name).map(|s| {
        s.parse::<T>().unwrap_or_else(|_| {
            exit_with_error(&format!("Error parsing '{}' as {}", name, what))
        })
    })
}

fn config_from_args(args: &ArgMatches<'_>) -> ApplicationCfg {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            exit_with_error(&format!("Error reading configuration - {}", err))
        })
    } else {
        let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "")
            .unwrap_or_else(|err| exit_with_error(&err));
        if let Some(grid) = args.value_of("grid") {
            config.grid.predefined = Some(grid.to_string());
        }
        config
    }
}

fn seeder_from_config(config: &ApplicationCfg) -> Seeder {
    Seeder::from_config(config).unwrap_or_else(|err| {
        exit_with_error(&format!("Error reading configuration - {}", err))
    })
}

fn seed(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let seeder = seeder_from_config(&config);
    let seed_cfg = config.seed.unwrap_or_default();
    let tileset = args.value_of("tileset");
    let minzoom = arg_value::<u8>(args, "minzoom", "integer value");
    let maxzoom = arg_value::<u8>(args, "maxzoom", "integer value");
    let nodes = arg_value::<u8>(args, "nodes", "integer value").or(seed_cfg.nodes);
    let nodeno = arg_value::<u8>(args, "nodeno", "integer value").or(seed_cfg.nodeno);
    let progress = arg_value::<bool>(args, "progress", "boolean value")
        .or(seed_cfg.progress)
        .unwrap_or(false);

    let stdout = io::stdout();
    let mut writer = PathWriter::new(BufWriter::new(stdout.lock()));
    match seeder.seed(tileset, minzoom, maxzoom, nodes, nodeno, progress, &mut writer) {
        Ok(stats) => {
            if let Err(err) = writer.finish() {
                exit_with_error(&format!("Error writing tile list: {}", err));
            }
            if stats.failed > 0 {
                process::exit(2);
            }
        }
        Err(err) => exit_with_error(&err),
    }
}

fn count(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let seeder = seeder_from_config(&config);
    let tileset = args.value_of("tileset");
    let minzoom = arg_value::<u8>(args, "minzoom", "integer value");
    let maxzoom = arg_value::<u8>(args, "maxzoom", "integer value");
    let plans = seeder
        .plan(tileset, minzoom, maxzoom)
        .unwrap_or_else(|err| exit_with_error(&err));
    println!("tileset,zoom,minx,miny,maxx,maxy,tiles");
    let mut total = 0;
    for plan in plans {
        for limit in &plan.limits {
            println!(
                "{},{},{},{},{},{},{}",
                plan.tileset.name,
                limit.zoom(),
                limit.minx(),
                limit.miny(),
                limit.maxx(),
                limit.maxy(),
                limit.count()
            );
        }
        total += plan.count();
    }
    println!("total,,,,,,{}", total);
}

fn main() {
    dotenv().ok();
    let mut app = App::new("tile_seed")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("enumerates map tiles for bulk tile cache operations")
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("seed")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --grid=[web_mercator|wgs84] 'Predefined grid without config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --tileset=[NAME] 'Tileset name'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --nodes=[NUM] 'Number of seeding nodes'
                                              --nodeno=[NUM] 'Number of this nodes (0 <= n < nodes)'
                                              --progress=[true|false] 'Show progress bar'")
                        .about("Write cache paths of all tiles to visit"))
        .subcommand(SubCommand::with_name("count")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --grid=[web_mercator|wgs84] 'Predefined grid without config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --tileset=[NAME] 'Tileset name'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'")
                        .about("Tile counts per zoom level"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", Seeder::gen_config());
            }
            ("seed", Some(sub_m)) => {
                init_logger(sub_m);
                seed(sub_m);
            }
            ("count", Some(sub_m)) => {
                init_logger(sub_m);
                count(sub_m);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
