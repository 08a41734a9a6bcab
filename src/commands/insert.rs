//! `insert <key>`: add a new record at a key that is not yet taken.
//!
//! Mirror image of update's existence check: insert refuses a key that is
//! already present instead of a key that is absent.

use crate::collection::VehicleCollection;
use crate::commands::{collect_vehicle, resolve_key, Command};
use crate::console::Console;
use crate::error::FleetError;
use tracing::info;

pub struct InsertCommand;

impl Command for InsertCommand {
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

        if collection.contains_key(key) {
            console.write_line(&format!(
                "Error: element with key {} already exists. Use 'update' to replace it.",
                key
            ));
            return Ok(());
        }

        let vehicle = collect_vehicle(console)?.with_id(key);
        collection.insert(key, vehicle);
        console.write_line(&format!("Element with key {} successfully added.", key));
        info!(key, "record inserted");
        Ok(())
    }

    fn description(&self) -> String {
        "insert <key> - add a new element under a key that is not in use".to_string()
    }
}
