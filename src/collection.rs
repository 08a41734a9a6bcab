//! In-memory vehicle collection.
//!
//! A thin wrapper over a key-to-record map. Keys are unique positive integers;
//! iteration order is unspecified, so listing commands sort before rendering.

use crate::model::Vehicle;
use std::collections::HashMap;

/// The key-to-record mapping owned by the shell for the lifetime of a session.
#[derive(Debug, Default)]
pub struct VehicleCollection {
    vehicles: HashMap<i32, Vehicle>,
}

impl VehicleCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            vehicles: HashMap::new(),
        }
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.vehicles.contains_key(&key)
    }

    pub fn get(&self, key: i32) -> Option<&Vehicle> {
        self.vehicles.get(&key)
    }

    /// Store a record at a key, returning the previous record if one existed.
    pub fn insert(&mut self, key: i32, vehicle: Vehicle) -> Option<Vehicle> {
        self.vehicles.insert(key, vehicle)
    }

    pub fn remove(&mut self, key: i32) -> Option<Vehicle> {
        self.vehicles.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&i32, &Vehicle)> {
        self.vehicles.iter()
    }

    /// Records sorted by key, for stable listing output.
    pub fn sorted_by_key(&self) -> Vec<&Vehicle> {
        let mut keys: Vec<i32> = self.vehicles.keys().copied().collect();
        keys.sort_unstable();
        keys.iter().filter_map(|k| self.vehicles.get(k)).collect()
    }
}
