//! Room Arranger CLI
//!
//! Usage:
//!   room-arranger [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --catalog <FILE>   Furniture catalog (TOML format)
//!   --fallback             Ignore proposed placements, run the planner
//!   --json                 Emit the outcome as JSON
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use room_arranger::{
    arrange_with_config, Catalog, LayoutConfig, LayoutOutcome, Placement, Room,
};

#[derive(Parser)]
#[command(name = "room-arranger")]
#[command(about = "Deterministic furniture layout correction and render ordering")]
struct Cli {
    /// Room description file in TOML (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Furniture catalog file (TOML format); built-in starter catalog otherwise
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Ignore any placements in the input and run the fallback planner
    #[arg(long)]
    fallback: bool,

    /// Report mirrored pair targets without rewriting coordinates
    #[arg(long)]
    no_pair_overrides: bool,

    /// Move the bed to its preferred flush-wall position
    #[arg(long)]
    bed_correction: bool,

    /// Emit the outcome as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

/// Input file shape: a room plus optional proposer placements
#[derive(Deserialize)]
struct RoomFile {
    room: Room,
    #[serde(default)]
    placements: Vec<Placement>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load catalog
    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Catalog::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let room_file: RoomFile = match toml::from_str(&source) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error parsing room file: {}", e);
            std::process::exit(1);
        }
    };

    let placements = if cli.fallback {
        vec![]
    } else {
        room_file.placements
    };

    let config = LayoutConfig::default()
        .with_pair_overrides(!cli.no_pair_overrides)
        .with_bed_correction(cli.bed_correction);

    match arrange_with_config(&room_file.room, &catalog, &placements, &config) {
        Ok(outcome) => {
            if cli.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing outcome: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_summary(&room_file.room, &outcome);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(room: &Room, outcome: &LayoutOutcome) {
    println!("Room: {:.1} x {:.1} ft", room.width, room.length);
    println!("Placements (render order):");
    for p in &outcome.placements {
        println!(
            "  layer {}  {:<16} ({:6.2}, {:6.2})  rot {:>3}  {}",
            p.layer_order,
            p.furniture_id,
            p.x,
            p.y,
            p.rotation.degrees(),
            p.placement_text,
        );
    }

    let u = &outcome.utilization;
    println!(
        "Space utilization: {:.1}% of {:.0} sq ft ({})",
        u.ratio * 100.0,
        u.room_area,
        if u.is_optimal {
            "comfortable"
        } else {
            "outside the comfortable band"
        },
    );

    if !outcome.diagnostics.is_empty() {
        println!("Diagnostics:");
        for d in &outcome.diagnostics {
            println!("  {}", d);
        }
    }
}

fn print_intro() {
    println!(
        r#"Room Arranger - deterministic furniture layout correction

USAGE:
    room-arranger [OPTIONS] [FILE]
    cat room.toml | room-arranger

OPTIONS:
    -c, --catalog <FILE>   Furniture catalog (TOML)
    --fallback             Ignore proposed placements, run the planner
    --no-pair-overrides    Report mirrored pair targets without moving items
    --bed-correction       Move the bed to its preferred flush-wall position
    --json                 Emit JSON instead of a text summary
    -h, --help             Print help

QUICK START:
    room-arranger room.toml

Where room.toml looks like:

    [room]
    width = 12.0
    length = 10.0
    height = 8.0
    kind = "bedroom"

    [[placements]]
    furniture_id = "queen-bed"
    x = 6.0
    y = 6.75
    rotation = 0

Omit [[placements]] (or pass --fallback) to let the planner furnish the
room from the catalog. The built-in catalog covers a starter bedroom."#
    );
}
