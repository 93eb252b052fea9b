//! The glyph toggle state machine.
//!
//! A glyph is in one of two states, signalled solely by whether its
//! backup slot (`<name>.bak`) exists in the font:
//!
//! - slot absent: the glyph shows the working copy;
//! - slot present: the glyph shows a historical version, and the slot
//!   holds the working copy.
//!
//! [`toggle_glyph`] flips between the two. Restoring always wins when a
//! slot exists, even if the live glyph no longer differs from history.
//! The slot holds exactly one generation; there is no deeper undo.

use std::fmt;

use crate::font::{backup_name, glif_path, Font, Glyph};
use crate::ports::EditorRefresh;
use crate::revision::RevisionOracle;

/// Which branch of the toggle ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The backup slot existed; its value is back under the glyph's
    /// name and the slot is gone.
    Restored,
    /// The glyph differed from the revision; the historical version is
    /// in place and the working copy sits in the backup slot.
    Swapped,
    /// The glyph already matched the revision; nothing changed.
    Unchanged,
}

/// Failures the toggle distinguishes.
///
/// "No glyph selected" is its own variant so callers can keep the
/// editor-friendly notice for exactly that case instead of blanketing
/// every failure with it.
#[derive(Debug)]
pub enum ToggleError {
    /// The named glyph is not present in the font.
    NoGlyphSelected(String),
    /// A git query failed.
    Oracle(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGlyphSelected(name) => write!(f, "no glyph named '{name}' in the font"),
            Self::Oracle(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ToggleError {}

impl From<Box<dyn std::error::Error + Send + Sync>> for ToggleError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Oracle(err)
    }
}

/// Toggles one glyph between its working copy and the version at
/// `revision`, mutating the font in place.
///
/// The editor refresh callback fires after every successful branch,
/// including the no-op one.
///
/// # Errors
///
/// Returns [`ToggleError::NoGlyphSelected`] if the glyph is absent from
/// the font, or [`ToggleError::Oracle`] if a git query fails.
pub fn toggle_glyph(
    font: &mut Font,
    name: &str,
    revision: &str,
    oracle: &RevisionOracle<'_>,
    editor: &dyn EditorRefresh,
) -> Result<ToggleOutcome, ToggleError> {
    if !font.contains(name) {
        return Err(ToggleError::NoGlyphSelected(name.to_string()));
    }

    let backup = backup_name(name);
    let outcome = if let Some(saved) = font.remove(&backup) {
        font.insert(name, saved);
        ToggleOutcome::Restored
    } else {
        let path = glif_path(font.path(), name);
        if oracle.differs_from_revision(&path)? {
            let historical = oracle.historical_content(&path, revision)?;
            // Stash the working copy first, then overwrite.
            if let Some(current) = font.glyph(name).cloned() {
                font.insert(&backup, current);
            }
            font.insert(name, Glyph::new(name, historical));
            ToggleOutcome::Swapped
        } else {
            ToggleOutcome::Unchanged
        }
    };

    editor.refresh();
    Ok(outcome)
}
