//! Core library for the `glifswap` CLI.
//!
//! Toggles a UFO glyph between its working copy and the version
//! recorded at a git revision. Git is an opaque command-line oracle
//! behind the [`ports::GitClient`] trait; the toggle itself is a small
//! state machine driven by the presence of a backup slot inside the
//! font.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod font;
pub mod ports;
pub mod revision;
pub mod toggle;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests surface as clap "errors" but
            // are successful exits with output on stdout.
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                print!("{err}");
                return Ok(());
            }
            return Err(err.to_string());
        }
    };
    commands::dispatch(&cli.command)
}
