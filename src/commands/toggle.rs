//! `glifswap toggle` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::font::{backup_name, glif_path, Font};
use crate::revision::RevisionOracle;
use crate::toggle::{toggle_glyph, ToggleError, ToggleOutcome};

/// Execute the `toggle` command.
///
/// Loads the font, runs the toggle state machine, and persists the
/// outcome back to the glyphs directory so the backup slot survives
/// between invocations.
///
/// # Errors
///
/// Returns an error string if the font cannot be loaded, the glyph is
/// missing ("No glyph selected!"), a git query fails, or the result
/// cannot be written back.
pub fn run(ctx: &ServiceContext, font_path: &Path, glyph: &str, revision: &str) -> Result<(), String> {
    let mut font = Font::load(font_path, ctx.fs.as_ref()).map_err(|e| e.to_string())?;
    let oracle = RevisionOracle::new(ctx.git.as_ref());

    let outcome = match toggle_glyph(&mut font, glyph, revision, &oracle, ctx.editor.as_ref()) {
        Ok(outcome) => outcome,
        Err(ToggleError::NoGlyphSelected(_)) => return Err("No glyph selected!".to_string()),
        Err(err) => return Err(err.to_string()),
    };

    persist(ctx, &font, glyph, outcome)?;

    match outcome {
        ToggleOutcome::Unchanged => println!("Glyph is same as in {revision}"),
        ToggleOutcome::Swapped => {
            println!("Swapped '{glyph}' to {revision}; working copy saved as '{}'", backup_name(glyph));
        }
        ToggleOutcome::Restored => println!("Restored working copy of '{glyph}'"),
    }
    Ok(())
}

/// Write the mutated glyph family back to disk.
fn persist(
    ctx: &ServiceContext,
    font: &Font,
    glyph: &str,
    outcome: ToggleOutcome,
) -> Result<(), String> {
    let backup = backup_name(glyph);
    let glyph_file = glif_path(font.path(), glyph);
    let backup_file = glif_path(font.path(), &backup);

    let write = |path: &Path, name: &str| -> Result<(), String> {
        let source = font
            .glyph(name)
            .map(crate::font::Glyph::source)
            .ok_or_else(|| format!("glyph '{name}' vanished from the font"))?;
        ctx.fs.write(path, source).map_err(|e| e.to_string())
    };

    match outcome {
        ToggleOutcome::Unchanged => Ok(()),
        ToggleOutcome::Swapped => {
            // Stash the working copy before overwriting it; if the
            // backup write fails the glif on disk is still the only
            // copy of the user's work.
            write(&backup_file, &backup)?;
            write(&glyph_file, glyph)
        }
        ToggleOutcome::Restored => {
            write(&glyph_file, glyph)?;
            if ctx.fs.exists(&backup_file) {
                ctx.fs.remove_file(&backup_file).map_err(|e| e.to_string())?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::ports::GitClient;

    struct StubGit {
        root: PathBuf,
        relative: String,
        diff_code: i32,
        head_content: String,
    }

    impl GitClient for StubGit {
        fn ls_file_name(
            &self,
            _path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.relative.clone())
        }
        fn toplevel(
            &self,
            _path: &Path,
        ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.root.clone())
        }
        fn show(
            &self,
            _root: &Path,
            _object: &str,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.head_content.clone())
        }
        fn diff_status(
            &self,
            _root: &Path,
            _relative: &str,
        ) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.diff_code)
        }
    }

    fn test_ctx(diff_code: i32, head_content: &str) -> ServiceContext {
        let mut ctx = ServiceContext::live();
        ctx.git = Box::new(StubGit {
            root: PathBuf::from("/repo"),
            relative: "Font.ufo/glyphs/A.glif".into(),
            diff_code,
            head_content: head_content.into(),
        });
        ctx
    }

    fn make_font_dir(tag: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glifswap_cmd_toggle_{tag}"));
        let _ = std::fs::remove_dir_all(&dir);
        let ufo = dir.join("Font.ufo");
        std::fs::create_dir_all(ufo.join("glyphs")).unwrap();
        std::fs::write(ufo.join("glyphs").join("A.glif"), content).unwrap();
        ufo
    }

    #[test]
    fn swap_then_restore_round_trips_the_glyphs_dir() {
        let working = "<glyph name=\"A\" modified=\"yes\"/>";
        let historical = "<glyph name=\"A\"/>";
        let ufo = make_font_dir("roundtrip", working);

        let ctx = test_ctx(1, historical);
        run(&ctx, &ufo, "A", "HEAD").unwrap();

        let glyphs = ufo.join("glyphs");
        assert_eq!(std::fs::read_to_string(glyphs.join("A.glif")).unwrap(), historical);
        assert_eq!(std::fs::read_to_string(glyphs.join("A.bak.glif")).unwrap(), working);

        run(&ctx, &ufo, "A", "HEAD").unwrap();
        assert_eq!(std::fs::read_to_string(glyphs.join("A.glif")).unwrap(), working);
        assert!(!glyphs.join("A.bak.glif").exists());

        let _ = std::fs::remove_dir_all(ufo.parent().unwrap());
    }

    #[test]
    fn unchanged_glyph_leaves_the_directory_alone() {
        let working = "<glyph name=\"A\"/>";
        let ufo = make_font_dir("unchanged", working);

        let ctx = test_ctx(0, working);
        run(&ctx, &ufo, "A", "HEAD").unwrap();

        let glyphs = ufo.join("glyphs");
        assert_eq!(std::fs::read_to_string(glyphs.join("A.glif")).unwrap(), working);
        assert!(!glyphs.join("A.bak.glif").exists());

        let _ = std::fs::remove_dir_all(ufo.parent().unwrap());
    }

    #[test]
    fn failed_backup_write_leaves_working_copy_on_disk() {
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::ports::FileSystem;

        /// Delegates to the real disk but refuses to write backup files.
        struct BackupRejectingFs;

        impl FileSystem for BackupRejectingFs {
            fn read_to_string(
                &self,
                path: &Path,
            ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
                LiveFileSystem.read_to_string(path)
            }
            fn write(
                &self,
                path: &Path,
                contents: &str,
            ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
                if path.to_string_lossy().ends_with(".bak.glif") {
                    return Err("disk full".into());
                }
                LiveFileSystem.write(path, contents)
            }
            fn remove_file(
                &self,
                path: &Path,
            ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
                LiveFileSystem.remove_file(path)
            }
            fn exists(&self, path: &Path) -> bool {
                LiveFileSystem.exists(path)
            }
            fn list_dir(
                &self,
                path: &Path,
            ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
                LiveFileSystem.list_dir(path)
            }
        }

        let working = "<glyph name=\"A\" modified=\"yes\"/>";
        let historical = "<glyph name=\"A\"/>";
        let ufo = make_font_dir("bakfail", working);

        let mut ctx = test_ctx(1, historical);
        ctx.fs = Box::new(BackupRejectingFs);

        let err = run(&ctx, &ufo, "A", "HEAD").unwrap_err();
        assert!(err.contains("disk full"));

        // The stash failed before the glif was overwritten, so the
        // working copy is still on disk and the toggle can be retried.
        let glyphs = ufo.join("glyphs");
        assert_eq!(std::fs::read_to_string(glyphs.join("A.glif")).unwrap(), working);
        assert!(!glyphs.join("A.bak.glif").exists());

        let _ = std::fs::remove_dir_all(ufo.parent().unwrap());
    }

    #[test]
    fn missing_glyph_reports_no_selection() {
        let ufo = make_font_dir("missing", "<glyph name=\"A\"/>");

        let ctx = test_ctx(1, "<glyph/>");
        let err = run(&ctx, &ufo, "B", "HEAD").unwrap_err();
        assert_eq!(err, "No glyph selected!");

        let _ = std::fs::remove_dir_all(ufo.parent().unwrap());
    }
}
