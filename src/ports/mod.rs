//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (the `git` CLI, the filesystem, the host editor).
//! Implementations live in `src/adapters/`.

pub mod editor;
pub mod filesystem;
pub mod git;

pub use editor::EditorRefresh;
pub use filesystem::FileSystem;
pub use git::GitClient;
