//! Cassette data structures for recording and replaying interactions.
//!
//! One cassette captures the external traffic of a CLI invocation in
//! order: every git query, every glif read or write, every editor
//! refresh. Replaying it reproduces a toggle without a repository or a
//! font on disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port, e.g. a
/// `git show HEAD:Font.ufo/glyphs/A.glif` and the glif it returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name ("git", "fs", or "editor").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Commit hash of the recorded repository at recording time, so a
    /// replay can be traced back to the font state it captured.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}
