// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: reconstruct walls and openings from extracted CAD curves
//!
//! Reads a JSON document with the curves of one drawing and writes the
//! floor plan report as JSON.
//!
//! Usage:
//!   cadplan-reconstruct <input.json> [options]

use anyhow::{bail, Context};
use cadplan_reconstruct::{
    reconstruct_floor_plan, FloorPlanReport, RawCurve, ReconstructionConfig,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Accepted input shapes: `{curves, config?}` or a bare curve array
#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Full {
        curves: Vec<RawCurve>,
        #[serde(default)]
        config: Option<ReconstructionConfig>,
    },
    Curves(Vec<RawCurve>),
}

struct Options {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    pretty: bool,
    stats: bool,
}

fn print_usage() {
    println!("Usage: cadplan-reconstruct <input.json> [options]");
    println!();
    println!("Options:");
    println!("  --output <path>   Write the report to a file instead of stdout");
    println!("  --config <path>   Reconstruction config JSON (overrides the input's config)");
    println!("  --pretty          Pretty-print the report");
    println!("  --stats           Print pipeline statistics to stderr");
    println!();
    println!("Logging is controlled with RUST_LOG (default: info).");
}

fn parse_args(args: &[String]) -> anyhow::Result<Option<Options>> {
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return Ok(None);
    }

    let mut options = Options {
        input: PathBuf::from(&args[1]),
        output: None,
        config: None,
        pretty: false,
        stats: false,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                let path = args.get(i).context("--output needs a path")?;
                options.output = Some(PathBuf::from(path));
            }
            "--config" => {
                i += 1;
                let path = args.get(i).context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--pretty" => options.pretty = true,
            "--stats" => options.stats = true,
            other => bail!("unknown option: {}", other),
        }
        i += 1;
    }

    Ok(Some(options))
}

fn run(options: Options) -> anyhow::Result<()> {
    let text = fs::read_to_string(&options.input)
        .with_context(|| format!("cannot read '{}'", options.input.display()))?;
    let document: InputDocument = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a curve document", options.input.display()))?;

    let (curves, embedded_config) = match document {
        InputDocument::Full { curves, config } => (curves, config),
        InputDocument::Curves(curves) => (curves, None),
    };

    let config = match options.config {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("cannot read config '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config '{}'", path.display()))?
        }
        None => embedded_config.unwrap_or_default(),
    };

    tracing::info!(
        input = %options.input.display(),
        curves = curves.len(),
        "reconstructing floor plan"
    );

    let result = reconstruct_floor_plan(&curves, &config).context("configuration rejected")?;

    if options.stats {
        let s = &result.stats;
        eprintln!("Pipeline statistics:");
        eprintln!("  Input curves:          {}", s.input_curves);
        eprintln!("  Skipped (degenerate):  {}", s.skipped_degenerate);
        eprintln!("  Skipped (short):       {}", s.skipped_short);
        eprintln!("  Diagonal lines:        {}", s.diagonal_lines);
        eprintln!("  Wall candidates:       {}", s.wall_candidates);
        eprintln!("  Merged walls:          {}", s.merged_walls);
        eprintln!("  Discarded short walls: {}", s.discarded_short_walls);
        eprintln!("  Swing arcs:            {}", s.swing_arcs);
        eprintln!("  Arc-confirmed doors:   {}", s.confirmed_doors);
    }

    let report = FloorPlanReport::from_result(&result, config.unit);
    let json = if options.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match options.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("cannot write '{}'", path.display()))?;
            tracing::info!(output = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
