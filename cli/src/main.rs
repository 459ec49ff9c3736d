#![deny(missing_docs)]

//! # Pagepatch CLI
//!
//! Command Line Interface for wiring the help popup into page components.
//!
//! Supported Commands:
//! - `run`: Injects imports, hook call and component into every catalog page.
//! - `dedupe`: Removes repeated help-popup import lines.
//!
//! Per-file problems never change the exit code; only an unusable catalog does.

use clap::{Parser, Subcommand, ValueEnum};
use pagepatch_core::{
    run_batch, run_dedupe, BatchConfig, BatchReport, Catalog, FragmentKind, FragmentSet,
    DEFAULT_ROOT,
};
use std::path::PathBuf;

use crate::error::CliResult;
use crate::report::{render_text, Mode};

mod error;
mod report;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Help popup page patcher")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inject the help popup into every page in the catalog.
    Run(RunArgs),
    /// Remove duplicated help popup imports from every page in the catalog.
    Dedupe(CommonArgs),
}

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone)]
struct CommonArgs {
    /// Directory containing the page files.
    #[clap(long, env = "PAGEPATCH_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// YAML mapping of `PageFile.tsx: page-key`. Defaults to the built-in table.
    #[clap(long)]
    catalog: Option<PathBuf>,

    /// Print the report as JSON instead of status lines.
    #[clap(long)]
    json: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct RunArgs {
    #[clap(flatten)]
    common: CommonArgs,

    /// Only apply these fragments (comma separated). Order is always imports, hook, component.
    #[clap(long, value_enum, value_delimiter = ',')]
    only: Vec<FragmentArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FragmentArg {
    Imports,
    Hook,
    Component,
}

impl From<FragmentArg> for FragmentKind {
    fn from(arg: FragmentArg) -> Self {
        match arg {
            FragmentArg::Imports => FragmentKind::Imports,
            FragmentArg::Hook => FragmentKind::Hook,
            FragmentArg::Component => FragmentKind::Component,
        }
    }
}

impl CommonArgs {
    fn config(&self) -> CliResult<BatchConfig> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(),
        };
        Ok(BatchConfig::new(self.root.clone(), catalog))
    }
}

fn emit(report: &BatchReport, mode: Mode, json: bool) -> CliResult<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_text(report, mode));
    }
    Ok(())
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(args) => {
            let mut config = args.common.config()?;
            if !args.only.is_empty() {
                config = config
                    .with_fragments(FragmentSet::from_kinds(args.only.iter().map(|&a| a.into())));
            }
            if !args.common.json {
                println!(
                    "Updating {} page files with help popup integration...\n",
                    config.catalog.len()
                );
            }
            let report = run_batch(&config);
            emit(&report, Mode::Patch, args.common.json)?;
        }
        Commands::Dedupe(args) => {
            let config = args.config()?;
            if !args.json {
                println!(
                    "Removing duplicate imports from {} pages...\n",
                    config.catalog.len()
                );
            }
            let report = run_dedupe(&config);
            emit(&report, Mode::Dedupe, args.json)?;
        }
    }

    Ok(())
}
