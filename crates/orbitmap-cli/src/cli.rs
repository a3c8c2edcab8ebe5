//! Argument definitions and the single `run` entry point.
//!
//! Everything here writes to a caller-supplied sink so it can be driven
//! in-process from tests.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use orbitmap_logic::{parse_map, MapSummary, DEFAULT_ROOT};

pub const DEFAULT_FROM: &str = "YOU";
pub const DEFAULT_TO: &str = "SAN";

/// Printed when no orbit lines were supplied at all.
pub const NO_INPUT_MESSAGE: &str = "At least one orbit required.";

/// Universal orbit map: count orbits and plan orbital transfers.
#[derive(Debug, Parser)]
#[command(name = "orbitmap", version)]
pub struct Args {
    /// Orbit relations of the form PARENT)CHILD
    #[arg(value_name = "ORBIT")]
    pub orbits: Vec<String>,

    /// Read more orbit relations from FILE, one per line ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Body that depths are measured from
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: String,

    /// Starting body for transfers
    #[arg(long, default_value = DEFAULT_FROM)]
    pub from: String,

    /// Destination body for transfers
    #[arg(long, default_value = DEFAULT_TO)]
    pub to: String,

    /// Which answer to print
    #[arg(short, long, value_enum, default_value_t = Mode::Transfers)]
    pub mode: Mode,

    /// Print a JSON summary instead of a bare number
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Sum of direct and indirect orbits
    Total,
    /// Orbital transfers between --from and --to
    Transfers,
}

/// Load the map described by `args` and write the requested answer to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let lines = collect_lines(args)?;
    if lines.iter().all(|line| line.trim().is_empty()) {
        writeln!(out, "{}", NO_INPUT_MESSAGE)?;
        return Ok(());
    }

    let map = parse_map(&lines).context("invalid orbit map")?;
    log::info!(
        "loaded {} orbits over {} bodies",
        map.edge_count(),
        map.node_count()
    );
    if !map.contains(&args.root) {
        log::warn!(
            "root `{}` is not in the map (roots: {})",
            args.root,
            map.roots().join(", ")
        );
    }

    if args.json {
        let transfer = match args.mode {
            Mode::Total => None,
            Mode::Transfers => Some((args.from.as_str(), args.to.as_str())),
        };
        let summary = MapSummary::build(&map, &args.root, transfer)
            .context("could not summarize orbit map")?;
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    match args.mode {
        Mode::Total => writeln!(out, "{}", map.total_orbit_count(&args.root))?,
        Mode::Transfers => {
            let transfers = map
                .orbital_transfers(&args.from, &args.to)
                .with_context(|| format!("no transfer from `{}` to `{}`", args.from, args.to))?;
            writeln!(out, "{}", transfers)?;
        }
    }
    Ok(())
}

fn collect_lines(args: &Args) -> Result<Vec<String>> {
    let mut lines = args.orbits.clone();
    if let Some(path) = &args.input {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read orbits from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        };
        lines.extend(text.lines().map(str::to_string));
    }
    Ok(lines)
}
