//! A single named glyph.

/// A named glyph holding its serialized glif source verbatim.
///
/// The content is opaque to this crate; it is whatever git or the disk
/// handed over, byte for byte, so a restore reproduces the original
/// file exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: String,
    source: String,
}

impl Glyph {
    /// Creates a glyph from its serialized glif source.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }

    /// The glyph's name within the font.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The serialized glif content.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns this glyph stored under a different name, content
    /// untouched.
    #[must_use]
    pub fn renamed(self, name: &str) -> Self {
        Self { name: name.to_string(), source: self.source }
    }
}
