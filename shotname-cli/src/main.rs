use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process;

mod cli;
mod run;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    match run::handle_run(cli.directory.as_deref(), cli.output, use_color) {
        Ok(result) => {
            let _ = io::stdout().flush();
            if cli.strict && result.has_failures() {
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}
