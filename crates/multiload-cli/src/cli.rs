use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "multiload",
    about = "Inspect saved bulk-load responses (results plus included documents)",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize result slots and included documents
    Inspect(InspectArgs),
    /// Pair requested ids with their result slots
    Correlate(CorrelateArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// JSON response body: {"Results": [...], "Includes": [...]}
    pub path: PathBuf,
}

#[derive(Args)]
pub struct CorrelateArgs {
    pub path: PathBuf,
    /// Requested ids, in request order
    #[arg(long = "id", required = true)]
    pub ids: Vec<String>,
}
