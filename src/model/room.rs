use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::hvac::IdealAirSystem;
use super::people::People;
use crate::name::HasName;

/// A single thermal room.
///
/// Carries the loads and conditioning assignments that a simulation engine
/// consumes; whether the room is conditioned is derived from the presence of
/// an HVAC assignment, never stored separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    identifier: String,
    display_name: Option<String>,
    /// Floor area in m^2.
    floor_area: f64,
    /// Air volume in m^3.
    volume: f64,
    people: Option<People>,
    hvac: Option<IdealAirSystem>,
}

impl Room {
    /// Creates an unconditioned room with no loads.
    ///
    /// Floor area and volume must be finite and positive.
    pub fn new(identifier: &str, floor_area: f64, volume: f64) -> Result<Self> {
        ensure!(
            floor_area.is_finite() && floor_area > 0.0,
            "room floor area must be positive, got {floor_area}"
        );
        ensure!(
            volume.is_finite() && volume > 0.0,
            "room volume must be positive, got {volume}"
        );
        Ok(Self {
            identifier: identifier.to_string(),
            display_name: None,
            floor_area,
            volume,
            people: None,
            hvac: None,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    pub fn set_display_name(&mut self, display_name: &str) {
        self.display_name = Some(display_name.to_string());
    }

    pub fn floor_area(&self) -> f64 {
        self.floor_area
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn people(&self) -> Option<&People> {
        self.people.as_ref()
    }

    pub fn set_people(&mut self, people: People) {
        self.people = Some(people);
    }

    pub fn remove_people(&mut self) -> Option<People> {
        self.people.take()
    }

    /// True when an HVAC system is assigned.
    pub fn is_conditioned(&self) -> bool {
        self.hvac.is_some()
    }

    pub fn hvac(&self) -> Option<&IdealAirSystem> {
        self.hvac.as_ref()
    }

    pub fn set_hvac(&mut self, hvac: IdealAirSystem) {
        self.hvac = Some(hvac);
    }

    pub fn remove_hvac(&mut self) -> Option<IdealAirSystem> {
        self.hvac.take()
    }

    /// Assigns a default ideal-air system named `<identifier>_IdealAir`.
    ///
    /// Returns true when a system was newly assigned, false when the room
    /// was already conditioned (the existing system is kept).
    pub fn add_default_ideal_air(&mut self) -> bool {
        if self.hvac.is_some() {
            return false;
        }
        let identifier = format!("{}_IdealAir", self.identifier);
        self.hvac = Some(IdealAirSystem::new(&identifier));
        true
    }

    /// Occupant heat gain in W at a given hour, zero without a people load.
    pub fn people_load_at(&self, hour_of_year: usize) -> f64 {
        match &self.people {
            Some(people) => people.heat_gain_at(hour_of_year, self.floor_area),
            None => 0.0,
        }
    }
}

impl HasName for Room {
    fn name(&self) -> &str {
        self.display_name()
    }
}
