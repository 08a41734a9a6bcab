//! `update <key>`: replace the record stored at a key.
//!
//! Resolves the target key, checks that it exists, prompts for every field of
//! the replacement, then overwrites the stored record while preserving the key
//! as the record's identity. Never inserts a new key.

use crate::collection::VehicleCollection;
use crate::commands::{collect_vehicle, resolve_key, Command};
use crate::console::Console;
use crate::console::STOP_TOKEN;
use crate::error::FleetError;
use tracing::{info, warn};

pub struct UpdateCommand;

impl Command for UpdateCommand {
    fn execute(
        &self,
        args: &[&str],
        collection: &mut VehicleCollection,
        console: &mut dyn Console,
    ) -> Result<(), FleetError> {
        let key = match resolve_key(args, console)? {
            Some(key) => key,
            // Diagnostic already written; abort with zero mutation.
            None => return Ok(()),
        };

        if !collection.contains_key(key) {
            console.write_line(&format!("Error: element with key {} not found.", key));
            warn!(key, "update aborted: key not present");
            return Ok(());
        }

        // Key confirmed present: from here the command always completes.
        let replacement = collect_vehicle(console)?.with_id(key);
        collection.insert(key, replacement);
        console.write_line(&format!("Element with key {} successfully updated.", key));
        info!(key, "record replaced");
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "update <key> - replace the element stored at the given key \
             (use {} to abort the command mid-entry)",
            STOP_TOKEN
        )
    }
}
