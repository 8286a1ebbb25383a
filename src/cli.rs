use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the bookmark store (a SQLite database owned by the
    /// bookmarking application)
    #[clap(short = 'b', long)]
    pub database: PathBuf,

    /// Output format
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// The search query, passed as a single argument. Field flags
    /// (-n/-u/-d/-t/-un/-p) are part of the query string itself, not of
    /// this command line. An empty query lists everything, newest first.
    #[clap(default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub query: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Tab-separated title and url, one bookmark per line
    Plain,
    /// Pretty-printed JSON array
    Json,
    /// Launcher-integration XML item list
    Alfred,
}
