use std::path::{Path, PathBuf};

use eyre::{Result, bail};

use crate::fs::{ensure_dir, exists, read_text, remove_file, write_text};

/// A file produced by the generator.
pub trait GeneratedFile {
    /// Location of the file below `base` (the module directory).
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file below `base`, honoring its rules.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_text(&path, &self.render())?;
                Ok(WriteResult::Written(path))
            }
            Overwrite::IfMissing => {
                if exists(&path) {
                    Ok(WriteResult::Skipped(path))
                } else {
                    write_text(&path, &self.render())?;
                    Ok(WriteResult::Written(path))
                }
            }
        }
    }

    /// Render without touching the disk.
    fn preview(&self, base: &Path) -> PreviewFile {
        PreviewFile {
            path: self.path(base),
            content: self.render(),
        }
    }
}

/// Write a set of files below `base` as one unit.
///
/// Every target is checked and its parent directory created before the
/// first write. When a write still fails, the files written so far are put
/// back to their previous content (or removed when they are new), so the
/// set ends up either fully written or untouched.
pub fn write_all(files: &[Box<dyn GeneratedFile>], base: &Path) -> Result<Vec<WriteResult>> {
    for file in files {
        let path = file.path(base);
        if path.is_dir() {
            bail!("cannot write '{}': a directory is in the way", path.display());
        }
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
    }

    let mut written: Vec<(PathBuf, Option<String>)> = Vec::new();
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        match write_tracked(file.as_ref(), base) {
            Ok((result, previous)) => {
                if result.is_written() {
                    written.push((result.path().to_path_buf(), previous));
                }
                results.push(result);
            }
            Err(error) => {
                roll_back(&written);
                return Err(error);
            }
        }
    }

    Ok(results)
}

/// Write one file and return the content it replaced.
fn write_tracked(file: &dyn GeneratedFile, base: &Path) -> Result<(WriteResult, Option<String>)> {
    let path = file.path(base);
    let previous = match file.rules().overwrite {
        Overwrite::Always if exists(&path) => Some(read_text(&path)?),
        _ => None,
    };
    Ok((file.write(base)?, previous))
}

fn roll_back(written: &[(PathBuf, Option<String>)]) {
    for (path, previous) in written.iter().rev() {
        let restored = match previous {
            Some(content) => write_text(path, content),
            None => remove_file(path),
        };
        if let Err(error) = restored {
            tracing::warn!(path = %path.display(), error = %format!("{error:#}"), "rollback failed");
        }
    }
}

/// Outcome of writing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// The file was written.
    Written(PathBuf),
    /// The file already existed and its rules forbid overwriting it.
    Skipped(PathBuf),
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written(p) | WriteResult::Skipped(p) => p,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteResult::Written(_))
    }
}

/// A rendered file shown by `--dry-run`.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Rules that determine how a file is written.
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Generated output, replaced on every run.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// A stub the user owns after the first run.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}

/// How to handle a file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        name: &'static str,
        body: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.body.to_string()
        }
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.js"), "old").unwrap();

        let note = Note {
            name: "a.js",
            body: "new",
            rules: FileRules::always_overwrite(),
        };
        let result = note.write(temp.path()).unwrap();

        assert!(result.is_written());
        assert_eq!(fs::read_to_string(temp.path().join("a.js")).unwrap(), "new");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "api.js",
            body: "stub",
            rules: FileRules::create_once(),
        };

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written(temp.path().join("api.js")));
        assert_eq!(
            fs::read_to_string(temp.path().join("api.js")).unwrap(),
            "stub"
        );
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("api.js"), "user code").unwrap();

        let note = Note {
            name: "api.js",
            body: "stub",
            rules: FileRules::create_once(),
        };
        let result = note.write(temp.path()).unwrap();

        assert!(!result.is_written());
        assert_eq!(
            fs::read_to_string(temp.path().join("api.js")).unwrap(),
            "user code"
        );
    }

    fn boxed(notes: Vec<Note>) -> Vec<Box<dyn GeneratedFile>> {
        notes
            .into_iter()
            .map(|note| Box::new(note) as Box<dyn GeneratedFile>)
            .collect()
    }

    #[test]
    fn test_write_all_writes_every_file() {
        let temp = TempDir::new().unwrap();
        let files = boxed(vec![
            Note {
                name: ".config.js",
                body: "config",
                rules: FileRules::always_overwrite(),
            },
            Note {
                name: "utils/request.js",
                body: "request",
                rules: FileRules::always_overwrite(),
            },
        ]);

        let results = write_all(&files, temp.path()).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(WriteResult::is_written));
        assert_eq!(
            fs::read_to_string(temp.path().join("utils/request.js")).unwrap(),
            "request"
        );
    }

    #[test]
    fn test_write_all_blocked_directory_writes_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("utils"), "not a directory").unwrap();
        let files = boxed(vec![
            Note {
                name: ".config.js",
                body: "config",
                rules: FileRules::always_overwrite(),
            },
            Note {
                name: "utils/request.js",
                body: "request",
                rules: FileRules::always_overwrite(),
            },
        ]);

        assert!(write_all(&files, temp.path()).is_err());
        assert!(!temp.path().join(".config.js").exists());
    }

    #[test]
    fn test_write_all_failure_restores_earlier_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.js"), "old").unwrap();
        // "x/y.js" turns "x" into a directory before "x" itself is written.
        let files = boxed(vec![
            Note {
                name: "a.js",
                body: "new",
                rules: FileRules::always_overwrite(),
            },
            Note {
                name: "b.js",
                body: "fresh",
                rules: FileRules::always_overwrite(),
            },
            Note {
                name: "x",
                body: "fails",
                rules: FileRules::always_overwrite(),
            },
            Note {
                name: "x/y.js",
                body: "never",
                rules: FileRules::always_overwrite(),
            },
        ]);

        assert!(write_all(&files, temp.path()).is_err());
        assert_eq!(fs::read_to_string(temp.path().join("a.js")).unwrap(), "old");
        assert!(!temp.path().join("b.js").exists());
        assert!(!temp.path().join("x/y.js").exists());
    }

    #[test]
    fn test_preview_does_not_write() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "b.js",
            body: "preview",
            rules: FileRules::default(),
        };

        let preview = note.preview(temp.path());

        assert_eq!(preview.content, "preview");
        assert!(!preview.path.exists());
    }
}
