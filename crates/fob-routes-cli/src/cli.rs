//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fob_routes::BuildTarget;

#[derive(Parser, Debug)]
#[command(
    name = "fob-routes",
    version,
    about = "Inspect the routing build context for a project"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load routing options and print the resulting build context as JSON
    ///
    /// Options are read from `fob.toml` (`[routes]`) or `package.json`
    /// (`fob.routes`), then `FOB_ROUTES_*` environment variables.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Project root directory
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Bundle the build produces
    #[arg(short = 't', long, value_enum)]
    pub target: Option<Target>,

    /// Mark the context as belonging to a dev server
    #[arg(long)]
    pub dev_server: bool,

    /// Dev server renders on the client only (implies --dev-server)
    #[arg(long)]
    pub client_only: bool,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Ssr,
    Client,
}

impl From<Target> for BuildTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Ssr => BuildTarget::Ssr,
            Target::Client => BuildTarget::Client,
        }
    }
}
