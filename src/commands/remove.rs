//! `remove <key>`: delete the record stored at a key.

use crate::collection::VehicleCollection;
use crate::commands::{resolve_key, Command};
use crate::console::Console;
use crate::error::FleetError;
use tracing::info;

pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn execute(
        &self,
        args: &[&str],
        collection: &mut VehicleCollection,
        console: &mut dyn Console,
    ) -> Result<(), FleetError> {
        let key = match resolve_key(args, console)? {
            Some(key) => key,
            None => return Ok(()),
        };

        match collection.remove(key) {
            Some(_) => {
                console.write_line(&format!("Element with key {} successfully removed.", key));
                info!(key, "record removed");
            }
            None => {
                console.write_line(&format!("Error: element with key {} not found.", key));
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        "remove <key> - delete the element stored at the given key".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::model::{Coordinates, Vehicle};

    #[test]
    fn test_remove_deletes_record() {
        let mut collection = VehicleCollection::new();
        collection.insert(
            4,
            Vehicle::new("x".to_string(), Coordinates::new(0, 0), 1.0, None, None).with_id(4),
        );

        let mut console = ScriptedConsole::new(Vec::<String>::new());
        RemoveCommand
            .execute(&["4"], &mut collection, &mut console)
            .unwrap();

        assert!(collection.is_empty());
        assert!(console.output_contains("successfully removed"));
    }

    #[test]
    fn test_remove_absent_key_reports_not_found() {
        let mut collection = VehicleCollection::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        RemoveCommand
            .execute(&["4"], &mut collection, &mut console)
            .unwrap();
        assert!(console.output_contains("element with key 4 not found"));
    }
}
