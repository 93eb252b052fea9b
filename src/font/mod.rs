//! In-memory font document model.
//!
//! A [`Font`] is the open document: a collection of named glyphs plus
//! the path of the UFO directory it came from. The toggle machinery
//! only ever mutates the glyph collection; creating and destroying the
//! document belongs to whoever drives the CLI.

pub mod glyph;

pub use glyph::Glyph;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::ports::FileSystem;

/// Suffix naming a glyph's backup slot inside the font.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Returns the backup-slot name for a glyph (`A` -> `A.bak`).
#[must_use]
pub fn backup_name(name: &str) -> String {
    format!("{name}{BACKUP_SUFFIX}")
}

/// Returns the on-disk path of a glyph's glif file:
/// `<font_root>/glyphs/<name>.glif`.
#[must_use]
pub fn glif_path(font_root: &Path, name: &str) -> PathBuf {
    font_root.join("glyphs").join(format!("{name}.glif"))
}

/// An open UFO font: named glyphs addressable by name.
#[derive(Debug, Clone)]
pub struct Font {
    path: PathBuf,
    glyphs: BTreeMap<String, Glyph>,
}

impl Font {
    /// Creates an empty font rooted at the given UFO directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), glyphs: BTreeMap::new() }
    }

    /// Loads every `*.glif` file under `<path>/glyphs/` through the
    /// filesystem port. The glyph name is the file stem, so a persisted
    /// backup slot (`A.bak.glif`) loads back as the glyph `A.bak`.
    ///
    /// # Errors
    ///
    /// Returns an error if the glyphs directory is missing or any glif
    /// file cannot be read.
    pub fn load(
        path: impl Into<PathBuf>,
        fs: &dyn FileSystem,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.into();
        let glyphs_dir = path.join("glyphs");
        if !fs.exists(&glyphs_dir) {
            return Err(format!("no glyphs directory in {}", path.display()).into());
        }

        let mut font = Self::new(path);
        for entry in fs.list_dir(&glyphs_dir)? {
            let Some(name) = entry.strip_suffix(".glif") else {
                continue;
            };
            let source = fs.read_to_string(&glyphs_dir.join(&entry))?;
            font.insert(name, Glyph::new(name, source));
        }
        Ok(font)
    }

    /// The UFO directory this font was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if a glyph with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Looks up a glyph by name.
    #[must_use]
    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    /// Assigns a glyph under the given name, returning the previous
    /// occupant of that name if there was one. The stored glyph takes
    /// on the assigned name.
    pub fn insert(&mut self, name: &str, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(name.to_string(), glyph.renamed(name))
    }

    /// Removes and returns the glyph with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Glyph> {
        self.glyphs.remove(name)
    }

    /// Number of glyphs currently in the font.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the font has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
