//! `glifswap status` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::font::glif_path;
use crate::revision::RevisionOracle;

/// Execute the `status` command.
///
/// Prints whether the glyph's glif file differs from its committed
/// state. Read-only; nothing is mutated.
///
/// # Errors
///
/// Returns an error string if the path cannot be resolved or the diff
/// query cannot be run.
pub fn run(ctx: &ServiceContext, font_path: &Path, glyph: &str) -> Result<(), String> {
    let path = glif_path(font_path, glyph);
    let oracle = RevisionOracle::new(ctx.git.as_ref());

    if oracle.differs_from_revision(&path).map_err(|e| e.to_string())? {
        println!("Glyph '{glyph}' is modified");
    } else {
        println!("Glyph '{glyph}' is same as in HEAD");
    }
    Ok(())
}
