use crate::error::MappingError;
use serde::Serialize;
use std::path::{Component, Path};

/// Screenshots in the guide that still carry capture timestamps or tool markers,
/// paired with the names the docs link to.
pub const BUILTIN_RENAMES: &[(&str, &str)] = &[
    ("截图主界面_PixWit_20251214_221948.webp", "截图主界面.webp"),
    ("视频裁剪_PixWit_20251214_230804.webp", "视频剪辑.webp"),
    ("一键复制到EXCEL.webp", "表格提取.webp"),
];

/// One file to rename inside the target directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub old_name: String,
    pub new_name: String,
}

impl RenameEntry {
    pub fn new(
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Result<Self, MappingError> {
        let old_name = old_name.into();
        let new_name = new_name.into();
        validate_name(&old_name)?;
        validate_name(&new_name)?;
        Ok(Self { old_name, new_name })
    }
}

/// Ordered, immutable list of renames. Processing follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenameMap {
    entries: Vec<RenameEntry>,
}

impl RenameMap {
    pub fn new(entries: Vec<RenameEntry>) -> Self {
        Self { entries }
    }

    /// Build a map from `(old, new)` pairs, rejecting names that are not bare file names.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(old, new)| RenameEntry::new(old, new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }

    /// The hardcoded guide renames
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RENAMES
                .iter()
                .map(|(old, new)| RenameEntry {
                    old_name: (*old).to_string(),
                    new_name: (*new).to_string(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RenameMap {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Names must stay inside the target directory: exactly one normal path component.
fn validate_name(name: &str) -> Result<(), MappingError> {
    let invalid = |reason| MappingError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name contains a path separator"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("name is not a plain file name")),
    }
}
