//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};

/// kbump - Keep kustomization image tags up to date
#[derive(Parser, Debug)]
#[command(name = "kbump")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a kbump.yaml config file
    #[arg(short, long, global = true, env = "KBUMP_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bump image tags and rewrite the manifest
    Bump(BumpArgs),

    /// Report images that would be bumped, failing if there are any
    Check(CheckArgs),

    /// Show version information
    Version(VersionArgs),
}

/// Overrides for where tags come from and which ones qualify
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Kustomization file to update
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,

    /// Comma-separated words that disqualify a tag
    #[arg(long, value_name = "LIST")]
    pub forbidden_words: Option<String>,

    /// Only consider tags containing a digit
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub require_digit: Option<bool>,

    /// Base URL of the tag feed service
    #[arg(long, value_name = "URL")]
    pub feed_url: Option<String>,
}

// Bump command
#[derive(Args, Debug)]
pub struct BumpArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show what would change without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

// Check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
