//! Command line generator for static decay dispatch modules
//!
//! Reads a persisted decay data library, solves every chain rooted at the
//! requested nuclides, and writes the dispatch module to file.

use std::path::PathBuf;

// bateman crates
use bateman_codegen::{build_dispatch, write_module, Result};
use bateman_data::{Corrected, Library, Nuclide, Zam};

// external crates
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(
    name = "decay-gen",
    about = "Generate a static decay dispatch module from a decay data library",
    arg_required_else_help(true),
    version
)]
struct Cli {
    /// Path to the decay data library (JSON)
    #[arg(short, long)]
    library: PathBuf,

    /// Output file for the generated module
    #[arg(short, long, default_value = "decay.rs")]
    output: PathBuf,

    /// Explicit nuclides to generate for, e.g. "co60 sr90 cs137m1"
    ///
    /// Defaults to every stable and metastable nuclide in the library.
    #[arg(short, long, num_args(1..))]
    nuclides: Option<Vec<String>>,

    /// Verbose output (-v line diagnostics, -vv dropped chain detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .modules([
            "decay_gen",
            "bateman_codegen",
            "bateman_solver",
            "bateman_data",
        ])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .init()?;

    let library = Library::from_json_file(&cli.library)?;
    info!("library of {} nuclide records", library.len());

    let nucs: Vec<Zam> = match &cli.nuclides {
        Some(names) => names
            .iter()
            .map(|name| name.parse::<Nuclide>().and_then(|n| n.zam()))
            .collect::<bateman_data::Result<_>>()?,
        None => library.seed_nuclides(),
    };
    info!("{} tracked nuclides", nucs.len());

    let dispatch = build_dispatch(&nucs, &Corrected::new(&library));
    write_module(&dispatch, &cli.output)?;

    info!(
        "wrote {} ({} element units)",
        cli.output.display(),
        dispatch.elements.len()
    );
    Ok(())
}
