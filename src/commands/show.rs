//! `show [json]`: render the collection, sorted by key.

use crate::collection::VehicleCollection;
use crate::commands::Command;
use crate::console::Console;
use crate::error::FleetError;
use crate::model::{Categorical, Vehicle};
use comfy_table::Table;

pub struct ShowCommand;

fn optional_name<C: Categorical>(value: Option<C>) -> &'static str {
    value.map(|v| v.as_str()).unwrap_or("-")
}

fn render_table(vehicles: &[&Vehicle]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["key", "name", "x", "y", "power", "type", "fuel"]);
    for vehicle in vehicles {
        table.add_row(vec![
            vehicle.id.to_string(),
            vehicle.name.clone(),
            vehicle.coordinates.x.to_string(),
            vehicle.coordinates.y.to_string(),
            vehicle.engine_power.to_string(),
            optional_name(vehicle.vehicle_type).to_string(),
            optional_name(vehicle.fuel_type).to_string(),
        ]);
    }
    table.to_string()
}

impl Command for ShowCommand {
    fn execute(
        &self,
        args: &[&str],
        collection: &mut VehicleCollection,
        console: &mut dyn Console,
    ) -> Result<(), FleetError> {
        if collection.is_empty() {
            console.write_line("The collection is empty.");
            return Ok(());
        }
        let vehicles = collection.sorted_by_key();
        if args.first().map(|a| a.trim()) == Some("json") {
            let rendered = serde_json::to_string_pretty(&vehicles)
                .map_err(|e| FleetError::Config(format!("failed to render JSON: {}", e)))?;
            console.write_line(&rendered);
        } else {
            console.write_line(&render_table(&vehicles));
        }
        Ok(())
    }

    fn description(&self) -> String {
        "show [json] - list every element, as a table or as JSON".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::model::{Coordinates, FuelType, Vehicle, VehicleType};

    fn seeded() -> VehicleCollection {
        let mut collection = VehicleCollection::new();
        collection.insert(
            2,
            Vehicle::new(
                "Ferry".to_string(),
                Coordinates::new(100, 200),
                7.5,
                Some(VehicleType::Boat),
                Some(FuelType::Nuclear),
            )
            .with_id(2),
        );
        collection.insert(
            1,
            Vehicle::new("Pod".to_string(), Coordinates::new(0, 0), 0.5, None, None).with_id(1),
        );
        collection
    }

    #[test]
    fn test_show_empty_collection() {
        let mut collection = VehicleCollection::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        ShowCommand.execute(&[], &mut collection, &mut console).unwrap();
        assert!(console.output_contains("collection is empty"));
    }

    #[test]
    fn test_show_table_contains_all_records() {
        let mut collection = seeded();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        ShowCommand.execute(&[], &mut collection, &mut console).unwrap();
        assert!(console.output_contains("Ferry"));
        assert!(console.output_contains("Pod"));
        assert!(console.output_contains("NUCLEAR"));
    }

    #[test]
    fn test_show_json_is_parseable_and_sorted() {
        let mut collection = seeded();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        ShowCommand
            .execute(&["json"], &mut collection, &mut console)
            .unwrap();

        let rendered = console.output.last().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(rendered).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("id").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(items[1].get("id").and_then(|v| v.as_i64()), Some(2));
        assert_eq!(
            items[1].get("name").and_then(|v| v.as_str()),
            Some("Ferry")
        );
    }
}
