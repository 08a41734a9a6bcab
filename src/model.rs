//! Vehicle record types.
//!
//! A `Vehicle` is identified by a positive integer key and carries a name,
//! a bounded coordinate pair, an engine power, and two independently optional
//! categorical attributes. Construction is two-phase: value fields first,
//! identity applied afterwards with [`Vehicle::with_id`].

use serde::{Deserialize, Serialize};

/// Inclusive bounds for the coordinate axes.
pub const X_MIN: i64 = 0;
pub const X_MAX: i64 = 225;
pub const Y_MIN: i32 = 0;
pub const Y_MAX: i32 = 493;

/// 2-D position of a vehicle. Both axes are bounded inclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i64, y: i32) -> Self {
        Self { x, y }
    }
}

/// An enumerated attribute whose members can be listed and matched by name.
///
/// Prompt primitives use this to accept case-insensitive member names and to
/// print the full member list on a mismatch.
pub trait Categorical: Copy + Sized + 'static {
    /// All members, in declaration order.
    fn variants() -> &'static [Self];

    /// Canonical (upper-case) member name.
    fn as_str(&self) -> &'static str;

    /// Case-insensitive match of a trimmed token against the member set.
    fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(token))
    }
}

/// Kind of vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleType {
    Boat,
    Chopper,
    Hoverboard,
    Spaceship,
}

impl Categorical for VehicleType {
    fn variants() -> &'static [Self] {
        &[Self::Boat, Self::Chopper, Self::Hoverboard, Self::Spaceship]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Boat => "BOAT",
            Self::Chopper => "CHOPPER",
            Self::Hoverboard => "HOVERBOARD",
            Self::Spaceship => "SPACESHIP",
        }
    }
}

/// Fuel the vehicle runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Gasoline,
    Kerosene,
    Nuclear,
    Plasma,
}

impl Categorical for FuelType {
    fn variants() -> &'static [Self] {
        &[Self::Gasoline, Self::Kerosene, Self::Nuclear, Self::Plasma]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "GASOLINE",
            Self::Kerosene => "KEROSENE",
            Self::Nuclear => "NUCLEAR",
            Self::Plasma => "PLASMA",
        }
    }
}

/// A vehicle record stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Identity within the collection. Positive once stored; 0 while the
    /// record is still transient.
    pub id: i32,
    /// Non-empty display name.
    pub name: String,
    pub coordinates: Coordinates,
    /// Strictly positive, at most `f32::MAX`.
    pub engine_power: f32,
    pub vehicle_type: Option<VehicleType>,
    pub fuel_type: Option<FuelType>,
}

impl Vehicle {
    /// Build a transient record from its value fields. The id is a placeholder;
    /// identity is applied separately with [`Vehicle::with_id`].
    pub fn new(
        name: String,
        coordinates: Coordinates,
        engine_power: f32,
        vehicle_type: Option<VehicleType>,
        fuel_type: Option<FuelType>,
    ) -> Self {
        Self {
            id: 0,
            name,
            coordinates,
            engine_power,
            vehicle_type,
            fuel_type,
        }
    }

    /// Apply identity to a transient record.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_case_insensitive() {
        assert_eq!(VehicleType::from_token("boat"), Some(VehicleType::Boat));
        assert_eq!(VehicleType::from_token("BOAT"), Some(VehicleType::Boat));
        assert_eq!(VehicleType::from_token(" Chopper "), Some(VehicleType::Chopper));
        assert_eq!(FuelType::from_token("plasma"), Some(FuelType::Plasma));
        assert_eq!(VehicleType::from_token("submarine"), None);
        assert_eq!(FuelType::from_token(""), None);
    }

    #[test]
    fn test_variant_names_are_canonical() {
        let names: Vec<&str> = VehicleType::variants().iter().map(|v| v.as_str()).collect();
        assert_eq!(names, vec!["BOAT", "CHOPPER", "HOVERBOARD", "SPACESHIP"]);

        let names: Vec<&str> = FuelType::variants().iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["GASOLINE", "KEROSENE", "NUCLEAR", "PLASMA"]);
    }

    #[test]
    fn test_two_phase_construction() {
        let vehicle = Vehicle::new(
            "Truck".to_string(),
            Coordinates::new(10, 20),
            3.5,
            Some(VehicleType::Boat),
            None,
        );
        assert_eq!(vehicle.id, 0);

        let vehicle = vehicle.with_id(5);
        assert_eq!(vehicle.id, 5);
        assert_eq!(vehicle.name, "Truck");
        assert_eq!(vehicle.coordinates, Coordinates::new(10, 20));
    }
}
