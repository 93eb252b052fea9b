//! Command dispatch and handlers.

pub mod show;
pub mod status;
pub mod toggle;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `GLIFSWAP_RECORD` is set to a directory path, all port
/// interactions are recorded to per-port cassette files in that
/// directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = if let Ok(path) = env::var("GLIFSWAP_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after the command completes (even on error).
    if let Some(session) = session {
        // Drop the context first to release Arc references.
        drop(ctx);
        if let Err(finish_err) = finish_recording(session) {
            // The command's own error is the one the user needs to see;
            // a cassette bookkeeping failure must not replace it.
            if result.is_ok() {
                return Err(finish_err);
            }
            eprintln!("Warning: {finish_err}");
        }
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Toggle { glyph, font, revision } => toggle::run(ctx, font, glyph, revision),
        Command::Status { glyph, font } => status::run(ctx, font, glyph),
        Command::Show { glyph, font, revision } => show::run(ctx, font, glyph, revision),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
