//! `glifswap show` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::font::glif_path;
use crate::revision::RevisionOracle;

/// Execute the `show` command.
///
/// Prints the glif content of the glyph as it existed at the revision.
///
/// # Errors
///
/// Returns an error string if the glyph is untracked or the revision
/// does not contain it.
pub fn run(ctx: &ServiceContext, font_path: &Path, glyph: &str, revision: &str) -> Result<(), String> {
    let path = glif_path(font_path, glyph);
    let oracle = RevisionOracle::new(ctx.git.as_ref());

    let content = oracle.historical_content(&path, revision).map_err(|e| e.to_string())?;
    print!("{content}");
    Ok(())
}
