//! Command surface: single entry point per shell command.
//!
//! The shell parses one line into a command name plus argument tokens and hands
//! them to the [`Invoker`]; each command owns its whole workflow and writes its
//! own diagnostics to the console.

pub mod insert;
pub mod remove;
pub mod show;
pub mod update;

pub use insert::InsertCommand;
pub use remove::RemoveCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;

use crate::collection::VehicleCollection;
use crate::console::Console;
use crate::error::FleetError;
use crate::model::{self, Coordinates, FuelType, Vehicle, VehicleType};
use crate::prompt;
use std::collections::BTreeMap;

/// A named shell command.
pub trait Command {
    /// Run the command. Fatal problems (bad key, absent key) are reported on
    /// the console and end the command with `Ok(())`; `Err` is reserved for
    /// console-level aborts.
    fn execute(
        &self,
        args: &[&str],
        collection: &mut VehicleCollection,
        console: &mut dyn Console,
    ) -> Result<(), FleetError>;

    /// One-line self-description for the help listing.
    fn description(&self) -> String;
}

/// What the shell should do after a dispatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    Continue,
    Exit,
}

/// Command registry and dispatcher.
///
/// `help` and `exit` are intrinsic; everything else is looked up by name.
/// A `BTreeMap` keeps the help listing alphabetical.
pub struct Invoker {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl Invoker {
    /// Build an invoker with the standard command set registered.
    pub fn new() -> Self {
        let mut invoker = Self {
            commands: BTreeMap::new(),
        };
        invoker.register("insert", Box::new(InsertCommand));
        invoker.register("remove", Box::new(RemoveCommand));
        invoker.register("show", Box::new(ShowCommand));
        invoker.register("update", Box::new(UpdateCommand));
        invoker
    }

    /// Register a command under a name.
    pub fn register(&mut self, name: &str, command: Box<dyn Command>) {
        self.commands.insert(name.to_string(), command);
    }

    /// Dispatch one input line. Blank lines are ignored; an unknown command
    /// name gets a diagnostic, not an error.
    pub fn dispatch(
        &self,
        line: &str,
        collection: &mut VehicleCollection,
        console: &mut dyn Console,
    ) -> Result<ShellSignal, FleetError> {
        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => return Ok(ShellSignal::Continue),
        };
        let args: Vec<&str> = tokens.collect();

        match name {
            "exit" => return Ok(ShellSignal::Exit),
            "help" => {
                self.write_help(console);
                return Ok(ShellSignal::Continue);
            }
            _ => {}
        }

        match self.commands.get(name) {
            Some(command) => command.execute(&args, collection, console)?,
            None => {
                console.write_line(&format!(
                    "Unknown command: {}. Type 'help' for the command list.",
                    name
                ));
            }
        }
        Ok(ShellSignal::Continue)
    }

    fn write_help(&self, console: &mut dyn Console) {
        for command in self.commands.values() {
            console.write_line(&command.description());
        }
        console.write_line("help - list available commands");
        console.write_line("exit - leave the shell");
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new()
    }
}

/// True for tokens shaped like an integer: optional leading minus, then one or
/// more ASCII digits.
pub(crate) fn integer_shaped(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve the target key for a key-scoped command.
///
/// Argument tokens are scanned in order and the first integer-shaped one wins;
/// other tokens are ignored. With no matching argument, a prompt loop runs
/// until an integer-shaped line is read (form errors retry). Parse overflow and
/// non-positive keys are fatal: a diagnostic is written and `None` is returned,
/// without retrying.
pub(crate) fn resolve_key(
    args: &[&str],
    console: &mut dyn Console,
) -> Result<Option<i32>, FleetError> {
    let mut candidate = args
        .iter()
        .map(|token| token.trim())
        .find(|token| integer_shaped(token))
        .map(str::to_string);

    if candidate.is_none() {
        loop {
            let line = console.read_line("Error: a key is required. Enter the key:")?;
            let token = line.trim();
            if integer_shaped(token) {
                candidate = Some(token.to_string());
                break;
            }
            console.write_line("Error: invalid number entered. An integer is expected.");
        }
    }

    // Only reachable on i32 overflow; the shape check guarantees digits.
    let key = match candidate.as_deref().unwrap_or_default().parse::<i32>() {
        Ok(key) => key,
        Err(_) => {
            console.write_line("Error: the entered value could not be converted to a number.");
            return Ok(None);
        }
    };

    if key <= 0 {
        console.write_line("Error: the key must be a positive number.");
        return Ok(None);
    }
    Ok(Some(key))
}

/// Prompt for every value field of a vehicle, in fixed order, and build the
/// transient record. Each field is asked exactly once per successful pass;
/// there is no going back to re-edit an earlier field.
pub(crate) fn collect_vehicle(console: &mut dyn Console) -> Result<Vehicle, FleetError> {
    let name = prompt::prompt_nonempty(console, "Enter the vehicle name (non-empty string):")?;
    let x = prompt::prompt_i64_in(
        console,
        "Enter the X coordinate (0..225):",
        model::X_MIN,
        model::X_MAX,
    )?;
    let y = prompt::prompt_i32_in(
        console,
        "Enter the Y coordinate (0..493):",
        model::Y_MIN,
        model::Y_MAX,
    )?;
    let engine_power =
        prompt::prompt_f32_above(console, "Enter the engine power (> 0):", 0.0, f32::MAX)?;
    let vehicle_type: Option<VehicleType> = prompt::prompt_categorical(
        console,
        "Enter the vehicle type (BOAT, CHOPPER, HOVERBOARD, SPACESHIP) or an empty line for none:",
    )?;
    let fuel_type: Option<FuelType> = prompt::prompt_categorical(
        console,
        "Enter the fuel type (GASOLINE, KEROSENE, NUCLEAR, PLASMA) or an empty line for none:",
    )?;
    Ok(Vehicle::new(
        name,
        Coordinates::new(x, y),
        engine_power,
        vehicle_type,
        fuel_type,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_integer_shaped() {
        assert!(integer_shaped("5"));
        assert!(integer_shaped("-17"));
        assert!(integer_shaped("0042"));
        assert!(!integer_shaped(""));
        assert!(!integer_shaped("-"));
        assert!(!integer_shaped("+5"));
        assert!(!integer_shaped("5.0"));
        assert!(!integer_shaped("abc"));
    }

    #[test]
    fn test_resolve_key_takes_first_integer_argument() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let key = resolve_key(&["truck", "5", "9"], &mut console).unwrap();
        assert_eq!(key, Some(5));
        assert!(console.output.is_empty());
    }

    #[test]
    fn test_resolve_key_prompts_when_no_argument_matches() {
        let mut console = ScriptedConsole::new(["what", "7"]);
        let key = resolve_key(&[], &mut console).unwrap();
        assert_eq!(key, Some(7));
        assert!(console.output_contains("invalid number"));
    }

    #[test]
    fn test_resolve_key_rejects_non_positive_without_retry() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(resolve_key(&["0"], &mut console).unwrap(), None);
        assert!(console.output_contains("must be a positive number"));

        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(resolve_key(&["-3"], &mut console).unwrap(), None);
        assert!(console.output_contains("must be a positive number"));
    }

    #[test]
    fn test_resolve_key_overflow_is_fatal() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(resolve_key(&["99999999999"], &mut console).unwrap(), None);
        assert!(console.output_contains("could not be converted"));
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let invoker = Invoker::new();
        let mut collection = crate::collection::VehicleCollection::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let signal = invoker
            .dispatch("frobnicate", &mut collection, &mut console)
            .unwrap();
        assert_eq!(signal, ShellSignal::Continue);
        assert!(console.output_contains("Unknown command: frobnicate"));
    }

    #[test]
    fn test_dispatch_exit_and_blank() {
        let invoker = Invoker::new();
        let mut collection = crate::collection::VehicleCollection::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(
            invoker.dispatch("exit", &mut collection, &mut console).unwrap(),
            ShellSignal::Exit
        );
        assert_eq!(
            invoker.dispatch("   ", &mut collection, &mut console).unwrap(),
            ShellSignal::Continue
        );
    }

    #[test]
    fn test_help_lists_every_registered_command() {
        let invoker = Invoker::new();
        let mut collection = crate::collection::VehicleCollection::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        invoker.dispatch("help", &mut collection, &mut console).unwrap();
        for name in ["insert", "remove", "show", "update", "help", "exit"] {
            assert!(
                console.output.iter().any(|l| l.starts_with(name)),
                "help output missing {}",
                name
            );
        }
    }
}
