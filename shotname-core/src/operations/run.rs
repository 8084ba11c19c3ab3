use crate::mapping::{RenameEntry, RenameMap};
use crate::output::{EntryOutcome, EntryStatus, RunResult, RunSummary};
use crate::renamer::Renamer;
use crate::target::TargetDirectory;

/// Progress notifications emitted while a run is in flight
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    /// About to attempt this entry
    Started(&'a RenameEntry),
    /// The entry has been handled
    Finished(&'a EntryOutcome),
}

/// Rename every entry of `map` inside `directory`, in map order.
///
/// `on_event` sees each entry before and after it is attempted so callers can
/// stream progress. Per-entry failures are recorded and never stop the run.
pub fn run_operation<F>(directory: TargetDirectory, map: &RenameMap, mut on_event: F) -> RunResult
where
    F: FnMut(RunEvent<'_>),
{
    let renamer = Renamer::new(&directory.path);
    let mut summary = RunSummary::default();
    let mut entries = Vec::with_capacity(map.len());

    for entry in map {
        on_event(RunEvent::Started(entry));

        let status = match renamer.rename(entry) {
            Ok(()) => EntryStatus::Renamed,
            Err(err) => EntryStatus::from(&err),
        };

        summary.record(&status);
        let outcome = EntryOutcome::new(&directory.path, entry, status);
        on_event(RunEvent::Finished(&outcome));
        entries.push(outcome);
    }

    RunResult {
        directory,
        entries,
        summary,
    }
}
