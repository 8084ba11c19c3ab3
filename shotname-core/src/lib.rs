#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod mapping;
pub mod operations;
pub mod output;
pub mod renamer;
pub mod target;

pub use error::{MappingError, RenameError};
pub use mapping::{RenameEntry, RenameMap, BUILTIN_RENAMES};
pub use operations::{run_operation, RunEvent};
pub use output::{
    EntryOutcome, EntryStatus, OutputFormat, OutputFormatter, RunResult, RunSummary, Verdict,
};
pub use renamer::{detect_case_insensitive_fs, rename_entry, Renamer};
pub use target::{guide_dir, resolve_target, TargetDirectory, GUIDE_SUBDIR};
