//! Command-line entry: argument parsing and the interactive shell loop.
//!
//! The binary parses a [`Cli`], initializes logging, builds the console
//! (interactive, or scripted from `--script`), and runs the shell until `exit`
//! or end of input. Aborted commands are reported and the shell keeps going.

use crate::collection::VehicleCollection;
use crate::commands::{Invoker, ShellSignal};
use crate::console::{Console, ScriptedConsole, TerminalConsole};
use crate::error::FleetError;
use crate::logging;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Fleet - interactive console for a keyed vehicle collection
#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Interactive console for managing a keyed vehicle collection")]
pub struct Cli {
    /// Script file with commands to run instead of interactive input
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Parse flags, set up logging and the console, and run the shell.
pub fn run(cli: &Cli) -> Result<(), FleetError> {
    logging::init(cli.log_level.as_deref())?;

    let mut console: Box<dyn Console> = match &cli.script {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                FleetError::Config(format!("failed to read script {}: {}", path.display(), e))
            })?;
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            Box::new(ScriptedConsole::new(lines).with_echo())
        }
        None => Box::new(TerminalConsole::new()),
    };

    let mut collection = VehicleCollection::new();
    let invoker = Invoker::new();
    console.write_line(&format!(
        "{} Type 'help' for the command list.",
        "Fleet console.".bold()
    ));
    run_shell(&invoker, &mut collection, console.as_mut())
}

/// Drive the shell loop over any console until `exit` or end of input.
pub fn run_shell(
    invoker: &Invoker,
    collection: &mut VehicleCollection,
    console: &mut dyn Console,
) -> Result<(), FleetError> {
    loop {
        let line = match console.read_line("fleet>") {
            Ok(line) => line,
            // Stop token at the top level is not inside a command; ignore it.
            Err(FleetError::Aborted) => continue,
            // End of scripted input or closed terminal stream.
            Err(FleetError::Input(_)) => return Ok(()),
            Err(e) => return Err(e),
        };

        match invoker.dispatch(&line, collection, console) {
            Ok(ShellSignal::Exit) => return Ok(()),
            Ok(ShellSignal::Continue) => {}
            Err(FleetError::Aborted) => {
                console.write_line(&format!("{}", "Command aborted.".yellow()));
            }
            Err(FleetError::Input(_)) => {
                console.write_line("Input ended before the command completed.");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}
