use crate::error::RenameError;
use crate::mapping::RenameEntry;
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Renames entries inside one directory.
///
/// The case-sensitivity probe runs at most once, and only when an entry changes
/// nothing but letter case.
pub struct Renamer<'a> {
    dir: &'a Path,
    case_insensitive: OnceCell<bool>,
}

impl<'a> Renamer<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            case_insensitive: OnceCell::new(),
        }
    }

    pub fn rename(&self, entry: &RenameEntry) -> Result<(), RenameError> {
        rename_entry_with(self.dir, entry, || {
            *self
                .case_insensitive
                .get_or_init(|| detect_case_insensitive_fs(self.dir))
        })
    }
}

/// Rename a single entry inside `dir`.
pub fn rename_entry(dir: &Path, entry: &RenameEntry) -> Result<(), RenameError> {
    Renamer::new(dir).rename(entry)
}

/// Checks run in order: the source must exist, then the destination must be free.
/// A failed check leaves the filesystem untouched and an existing destination is
/// never overwritten. `case_insensitive_fs` is only asked for case-only changes.
fn rename_entry_with<F>(
    dir: &Path,
    entry: &RenameEntry,
    case_insensitive_fs: F,
) -> Result<(), RenameError>
where
    F: FnOnce() -> bool,
{
    let source = dir.join(&entry.old_name);
    let destination = dir.join(&entry.new_name);

    if !source.exists() {
        return Err(RenameError::SourceMissing(source));
    }

    let same_file =
        is_case_only_change(&entry.old_name, &entry.new_name) && case_insensitive_fs();

    // On a case-insensitive filesystem the destination "exists" because it is the source.
    if destination.exists() && !same_file {
        return Err(RenameError::DestinationExists(destination));
    }

    if same_file {
        let temp = dir.join(format!(
            ".{}.{}.shotname.tmp",
            entry.old_name,
            std::process::id()
        ));
        fs::rename(&source, &temp).map_err(|e| RenameError::Io {
            from: source.clone(),
            to: temp.clone(),
            source: e,
        })?;
        finish_via_temp(&temp, &source, &destination)
    } else {
        fs::rename(&source, &destination).map_err(|e| RenameError::Io {
            from: source.clone(),
            to: destination.clone(),
            source: e,
        })
    }
}

fn is_case_only_change(old: &str, new: &str) -> bool {
    old != new && old.to_lowercase() == new.to_lowercase()
}

/// Second half of a case-only rename: move the parked file from `temp` to
/// `destination`, putting it back at `source` if that fails.
fn finish_via_temp(temp: &Path, source: &Path, destination: &Path) -> Result<(), RenameError> {
    let Err(err) = fs::rename(temp, destination) else {
        return Ok(());
    };

    match fs::rename(temp, source) {
        Ok(()) => Err(RenameError::Io {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: err,
        }),
        Err(_) => Err(RenameError::Stranded {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            temp: temp.to_path_buf(),
            source: err,
        }),
    }
}

/// Probe whether `dir` lives on a case-insensitive filesystem by creating a
/// lowercase marker file and looking it up under its uppercase name.
///
/// Assumes case-sensitive when the marker cannot be created.
pub fn detect_case_insensitive_fs(dir: &Path) -> bool {
    let Ok(marker) = tempfile::Builder::new()
        .prefix(".shotname-case-")
        .tempfile_in(dir)
    else {
        return false;
    };

    let upper: Option<PathBuf> = marker.path().file_name().and_then(|name| {
        let name = name.to_str()?;
        let upper = name.to_uppercase();
        (upper != name).then(|| dir.join(upper))
    });

    upper.is_some_and(|path| path.exists())
}
