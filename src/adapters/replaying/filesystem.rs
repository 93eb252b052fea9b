//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("fs", method).output.clone()
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("read_to_string"), "fs::read_to_string")
    }

    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("write"), "fs::write")
    }

    fn remove_file(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("remove_file"), "fs::remove_file")
    }

    fn exists(&self, _path: &Path) -> bool {
        let output = self.next_output("exists");
        output.as_bool().unwrap_or(false)
    }

    fn list_dir(
        &self,
        _path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        extract_result(&self.next_output("list_dir"), "fs::list_dir")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replays_read_and_exists() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "fs".into(),
                method: "read_to_string".into(),
                input: json!({"path": "/f/glyphs/A.glif"}),
                output: json!({"Ok": "<glyph name=\"A\"/>"}),
            },
            Interaction {
                seq: 1,
                port: "fs".into(),
                method: "exists".into(),
                input: json!({"path": "/f/glyphs/A.bak.glif"}),
                output: json!(false),
            },
        ]);
        let fs = ReplayingFileSystem::new(replayer);
        assert_eq!(fs.read_to_string(Path::new("/f/glyphs/A.glif")).unwrap(), "<glyph name=\"A\"/>");
        assert!(!fs.exists(Path::new("/f/glyphs/A.bak.glif")));
    }

    #[test]
    fn replays_list_dir() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "list_dir".into(),
            input: json!({"path": "/f/glyphs"}),
            output: json!({"Ok": ["A.glif", "B.glif"]}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        assert_eq!(
            fs.list_dir(Path::new("/f/glyphs")).unwrap(),
            vec!["A.glif".to_string(), "B.glif".to_string()]
        );
    }
}
