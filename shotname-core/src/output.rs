use crate::error::RenameError;
use crate::mapping::RenameEntry;
use crate::target::TargetDirectory;
use nu_ansi_term::{Color, Style};
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

const RULE_WIDTH: usize = 50;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Renamed,
    SourceMissing,
    DestinationExists,
    RenameFailed { error: String },
}

impl EntryStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Renamed)
    }
}

impl From<&RenameError> for EntryStatus {
    fn from(err: &RenameError) -> Self {
        match err {
            RenameError::SourceMissing(_) => Self::SourceMissing,
            RenameError::DestinationExists(_) => Self::DestinationExists,
            RenameError::Io { source, .. } => Self::RenameFailed {
                error: source.to_string(),
            },
            RenameError::Stranded { source, temp, .. } => Self::RenameFailed {
                error: format!("{}; file left at {}", source, temp.display()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub old_name: String,
    pub new_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn new(dir: &std::path::Path, entry: &RenameEntry, status: EntryStatus) -> Self {
        Self {
            old_name: entry.old_name.clone(),
            new_name: entry.new_name.clone(),
            source: dir.join(&entry.old_name),
            destination: dir.join(&entry.new_name),
            status,
        }
    }
}

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AllSucceeded,
    PartiallySucceeded,
    NoneSucceeded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: &EntryStatus) {
        self.total += 1;
        if status.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// An empty run counts as all succeeded: every entry there was got renamed.
    pub fn verdict(&self) -> Verdict {
        if self.succeeded == self.total {
            Verdict::AllSucceeded
        } else if self.succeeded > 0 {
            Verdict::PartiallySucceeded
        } else {
            Verdict::NoneSucceeded
        }
    }
}

/// Result of a rename run
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub directory: TargetDirectory,
    pub entries: Vec<EntryOutcome>,
    pub summary: RunSummary,
}

impl RunResult {
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": !self.has_failures(),
            "operation": "rename",
            "directory": self.directory.path,
            "directory_exists": self.directory.exists,
            "entries": self.entries,
            "summary": {
                "total": self.summary.total,
                "succeeded": self.summary.succeeded,
                "failed": self.summary.failed,
                "verdict": self.summary.verdict(),
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = render_header(&self.directory, false);
        for entry in &self.entries {
            output.push_str(&render_entry(entry, false));
        }
        output.push_str(&render_footer(&self.summary, false));
        output
    }
}

fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Lines printed before any entry is processed
pub fn render_header(directory: &TargetDirectory, use_color: bool) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{} {}",
        paint("Working directory:", Color::Cyan.bold(), use_color),
        directory.path.display()
    )
    .unwrap();
    writeln!(output, "Directory exists: {}", directory.exists).unwrap();
    writeln!(output).unwrap();
    output
}

/// Announcement printed before an entry is attempted
pub fn render_entry_start(old_name: &str, new_name: &str, use_color: bool) -> String {
    format!(
        "{} {} -> {}\n",
        paint("Processing:", Style::new().bold(), use_color),
        old_name,
        new_name
    )
}

/// Result line for a processed entry. A blank line follows only when a rename
/// was actually attempted.
pub fn render_entry_result(outcome: &EntryOutcome, use_color: bool) -> String {
    let line = match &outcome.status {
        EntryStatus::Renamed => paint("  ✅ Renamed", Color::Green.normal(), use_color),
        EntryStatus::SourceMissing => paint(
            &format!("  ⚠️  Source file not found: {}", outcome.source.display()),
            Color::Yellow.normal(),
            use_color,
        ),
        EntryStatus::DestinationExists => paint(
            &format!(
                "  ⚠️  Destination already exists: {}",
                outcome.destination.display()
            ),
            Color::Yellow.normal(),
            use_color,
        ),
        EntryStatus::RenameFailed { error } => paint(
            &format!("  ❌ Rename failed: {}", error),
            Color::Red.normal(),
            use_color,
        ),
    };

    let mut output = String::new();
    writeln!(output, "{}", line).unwrap();
    if matches!(
        outcome.status,
        EntryStatus::Renamed | EntryStatus::RenameFailed { .. }
    ) {
        writeln!(output).unwrap();
    }
    output
}

/// Announcement and result for one entry
pub fn render_entry(outcome: &EntryOutcome, use_color: bool) -> String {
    let mut output = render_entry_start(&outcome.old_name, &outcome.new_name, use_color);
    output.push_str(&render_entry_result(outcome, use_color));
    output
}

/// Counts and the overall verdict
pub fn render_footer(summary: &RunSummary, use_color: bool) -> String {
    let mut output = String::new();
    writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
    writeln!(
        output,
        "Done! Succeeded: {}, Failed: {}",
        summary.succeeded, summary.failed
    )
    .unwrap();

    let verdict = match summary.verdict() {
        Verdict::AllSucceeded => paint(
            "✅ All files renamed successfully!",
            Color::Green.bold(),
            use_color,
        ),
        Verdict::PartiallySucceeded => paint(
            "⚠️  Some files were renamed",
            Color::Yellow.bold(),
            use_color,
        ),
        Verdict::NoneSucceeded => paint("❌ No files were renamed", Color::Red.bold(), use_color),
    };
    writeln!(output, "{}", verdict).unwrap();
    output
}
