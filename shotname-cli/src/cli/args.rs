use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename auto-generated screenshot files in docs/guide to clean names
#[derive(Parser, Debug)]
#[command(name = "shotname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Resolve docs/guide under <PATH> instead of the executable's directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Exit with status 1 when any file could not be renamed
    #[arg(long, env = "SHOTNAME_STRICT", value_parser = FalseyValueParser::new())]
    pub strict: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,
}
