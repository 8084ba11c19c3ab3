use anyhow::Result;
use shotname_core::output::{
    render_entry_result, render_entry_start, render_footer, render_header,
};
use shotname_core::{
    resolve_target, run_operation, OutputFormatter, RenameMap, RunEvent, RunResult,
};
use std::path::Path;

use crate::cli::OutputFormat;

/// Rename the built-in map under the resolved guide directory and print the report.
pub fn handle_run(
    anchor: Option<&Path>,
    output: OutputFormat,
    use_color: bool,
) -> Result<RunResult> {
    let target = resolve_target(anchor)?;

    if !target.exists {
        eprintln!(
            "Warning: target directory does not exist: {}",
            target.path.display()
        );
    }

    let map = RenameMap::builtin();

    let result = match output {
        OutputFormat::Summary => {
            print!("{}", render_header(&target, use_color));
            let result = run_operation(target, &map, |event| match event {
                RunEvent::Started(entry) => {
                    print!(
                        "{}",
                        render_entry_start(&entry.old_name, &entry.new_name, use_color)
                    );
                },
                RunEvent::Finished(outcome) => {
                    print!("{}", render_entry_result(outcome, use_color));
                },
            });
            print!("{}", render_footer(&result.summary, use_color));
            result
        },
        OutputFormat::Json => {
            let result = run_operation(target, &map, |_| {});
            println!("{}", result.format(output.into()));
            result
        },
    };

    Ok(result)
}
