use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Location of the guide screenshots relative to the anchor directory
pub const GUIDE_SUBDIR: [&str; 2] = ["docs", "guide"];

/// The directory all renames happen in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDirectory {
    pub path: PathBuf,
    pub exists: bool,
}

impl TargetDirectory {
    /// Snapshot the directory's existence. The directory is never created.
    pub fn new(path: PathBuf) -> Self {
        let exists = path.is_dir();
        Self { path, exists }
    }
}

/// `<anchor>/docs/guide`
pub fn guide_dir(anchor: &Path) -> PathBuf {
    GUIDE_SUBDIR
        .iter()
        .fold(anchor.to_path_buf(), |path, part| path.join(part))
}

/// Resolve the target directory.
///
/// With no explicit anchor the directory holding the running executable is used,
/// so the result does not depend on the working directory the tool was started from.
pub fn resolve_target(anchor: Option<&Path>) -> Result<TargetDirectory> {
    let anchor = match anchor {
        Some(path) => path.to_path_buf(),
        None => executable_dir()?,
    };
    Ok(TargetDirectory::new(guide_dir(&anchor)))
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable path has no parent: {}", exe.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_guide_dir_joins_docs_guide() {
        let dir = guide_dir(Path::new("/opt/site"));
        assert_eq!(dir, Path::new("/opt/site").join("docs").join("guide"));
    }

    #[test]
    fn test_resolve_with_anchor_reports_existence() {
        let temp_dir = TempDir::new().unwrap();

        let missing = resolve_target(Some(temp_dir.path())).unwrap();
        assert!(!missing.exists);
        assert!(!missing.path.exists(), "resolution must not create the directory");

        std::fs::create_dir_all(temp_dir.path().join("docs").join("guide")).unwrap();
        let present = resolve_target(Some(temp_dir.path())).unwrap();
        assert!(present.exists);
        assert_eq!(present.path, temp_dir.path().join("docs").join("guide"));
    }

    #[test]
    fn test_resolve_without_anchor_uses_executable_dir() {
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();
        let target = resolve_target(None).unwrap();
        assert_eq!(target.path, exe_dir.join("docs").join("guide"));
    }

    #[test]
    fn test_plain_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("guide");
        std::fs::write(&file, "not a dir").unwrap();
        assert!(!TargetDirectory::new(file).exists);
    }
}
