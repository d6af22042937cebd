//! `fob-routes` - print the build context the routing plugin derives for a project.

use clap::Parser;
use fob_routes_cli::{cli, inspect, logger};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Inspect(inspect_args) => inspect::execute(inspect_args),
    }
}
