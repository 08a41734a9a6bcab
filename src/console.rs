//! Console abstraction: line input and diagnostic output.
//!
//! Prompt loops and commands talk to a `Console` rather than to process-wide
//! stdin/stdout, so a scripted line source with captured output can drive every
//! test (and `--script` execution) through the exact interactive code path.

use crate::error::FleetError;
use std::collections::VecDeque;

/// Typing this on its own line aborts the in-flight command.
pub const STOP_TOKEN: &str = "\\stop_running_command";

/// One line of text in, one line of text out.
///
/// `read_line` returns the raw, untrimmed line; callers decide how much to
/// trim. The only errors it surfaces are the stop-token abort and input-stream
/// failure — there is no per-line error protocol beyond that.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<String, FleetError>;
    fn write_line(&mut self, text: &str);
}

/// Interactive console backed by dialoguer, reading from the terminal.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, FleetError> {
        // allow_empty so optional-field prompts can accept a blank line.
        let line: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| FleetError::Input(format!("failed to read input: {}", e)))?;
        if line.trim() == STOP_TOKEN {
            return Err(FleetError::Aborted);
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Console fed from a fixed sequence of lines, capturing all output.
///
/// Used by tests and by `--script` execution. When `echo` is set, captured
/// output is mirrored to stdout so script runs stay visible.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    /// Every prompt and message written, in order.
    pub output: Vec<String>,
    echo: bool,
}

impl ScriptedConsole {
    /// Build from pre-supplied input lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            echo: false,
        }
    }

    /// Mirror captured output to stdout (script execution mode).
    pub fn with_echo(mut self) -> Self {
        self.echo = true;
        self
    }

    /// True if some captured line contains the given fragment.
    pub fn output_contains(&self, fragment: &str) -> bool {
        self.output.iter().any(|line| line.contains(fragment))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, FleetError> {
        self.write_line(prompt);
        let line = self
            .lines
            .pop_front()
            .ok_or_else(|| FleetError::Input("input stream exhausted".to_string()))?;
        if line.trim() == STOP_TOKEN {
            return Err(FleetError::Aborted);
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) {
        if self.echo {
            println!("{}", text);
        }
        self.output.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_returns_raw_lines() {
        let mut console = ScriptedConsole::new(["  spaced  ", ""]);
        assert_eq!(console.read_line("p1").unwrap(), "  spaced  ");
        assert_eq!(console.read_line("p2").unwrap(), "");
        assert!(console.output_contains("p1"));
        assert!(console.output_contains("p2"));
    }

    #[test]
    fn test_scripted_console_exhaustion_is_input_error() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        match console.read_line("p") {
            Err(FleetError::Input(_)) => {}
            other => panic!("expected input error, got {:?}", other),
        }
    }

    #[test]
    fn test_stop_token_aborts() {
        let mut console = ScriptedConsole::new(["  \\stop_running_command  "]);
        match console.read_line("p") {
            Err(FleetError::Aborted) => {}
            other => panic!("expected abort, got {:?}", other),
        }
    }
}
