//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "relink")]
#[command(about = "Replace every copy of an image inside an article", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "RELINK_CONFIG", default_value = "relink.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the input form description as JSON
    Form,
    /// Replace the reference image in an article
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Article identifier in the content store
    #[arg(long)]
    pub article_id: String,
    /// URL of the image to look for
    #[arg(long)]
    pub old_image: String,
    /// URL to put in place of every match
    #[arg(long)]
    pub new_image: String,
    /// Print the response as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
