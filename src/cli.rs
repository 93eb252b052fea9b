//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `glifswap`.
#[derive(Debug, Parser)]
#[command(name = "glifswap", version, about = "Toggle UFO glyphs against a git revision")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Toggle a glyph between its working copy and the revision.
    Toggle {
        /// Name of the glyph.
        glyph: String,
        /// Path to the UFO font directory.
        #[arg(long)]
        font: PathBuf,
        /// Revision to fetch the historical glyph from.
        #[arg(long, default_value = "HEAD")]
        revision: String,
    },
    /// Report whether a glyph differs from its committed state.
    Status {
        /// Name of the glyph.
        glyph: String,
        /// Path to the UFO font directory.
        #[arg(long)]
        font: PathBuf,
    },
    /// Print the glif content of a glyph at a revision.
    Show {
        /// Name of the glyph.
        glyph: String,
        /// Path to the UFO font directory.
        #[arg(long)]
        font: PathBuf,
        /// Revision to read the glyph from.
        #[arg(long, default_value = "HEAD")]
        revision: String,
    },
}
