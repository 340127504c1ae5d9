use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::schedule::Schedule;
use crate::name::HasName;

/// An area-normalized occupant load.
///
/// Couples a people density with an occupancy schedule (fractional
/// multipliers) and an activity schedule (metabolic rate in W/person).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct People {
    identifier: String,
    display_name: Option<String>,
    /// Occupant density in people/m^2 of floor area.
    people_per_area: f64,
    occupancy_schedule: Schedule,
    activity_schedule: Schedule,
}

impl People {
    /// Creates a people load.
    ///
    /// `people_per_area` must be finite and non-negative; the occupancy
    /// schedule must be fractional (all values in [0, 1]). The activity
    /// schedule defaults to a constant 120 W/person.
    pub fn new(identifier: &str, people_per_area: f64, occupancy_schedule: Schedule) -> Result<Self> {
        validate_people_per_area(people_per_area)?;
        validate_occupancy(&occupancy_schedule)?;
        Ok(Self {
            identifier: identifier.to_string(),
            display_name: None,
            people_per_area,
            occupancy_schedule,
            activity_schedule: Schedule::seated_activity(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The display name, falling back to the identifier when unset.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    pub fn set_display_name(&mut self, display_name: &str) {
        self.display_name = Some(display_name.to_string());
    }

    pub fn people_per_area(&self) -> f64 {
        self.people_per_area
    }

    pub fn set_people_per_area(&mut self, people_per_area: f64) -> Result<()> {
        validate_people_per_area(people_per_area)?;
        self.people_per_area = people_per_area;
        Ok(())
    }

    pub fn occupancy_schedule(&self) -> &Schedule {
        &self.occupancy_schedule
    }

    pub fn set_occupancy_schedule(&mut self, schedule: Schedule) -> Result<()> {
        validate_occupancy(&schedule)?;
        self.occupancy_schedule = schedule;
        Ok(())
    }

    pub fn activity_schedule(&self) -> &Schedule {
        &self.activity_schedule
    }

    /// Sets the activity schedule (W/person). Values must be non-negative.
    pub fn set_activity_schedule(&mut self, schedule: Schedule) -> Result<()> {
        ensure!(
            schedule.is_non_negative(),
            "activity schedule '{}' has negative or non-finite values",
            schedule.name
        );
        self.activity_schedule = schedule;
        Ok(())
    }

    /// Occupancy fraction at a given hour of the year.
    pub fn occupancy_at(&self, hour_of_year: usize) -> f64 {
        self.occupancy_schedule.value_at(hour_of_year)
    }

    /// Occupant heat gain in W for a floor area at a given hour.
    ///
    /// `gain = people_per_area * area * occupancy * activity`
    pub fn heat_gain_at(&self, hour_of_year: usize, floor_area: f64) -> f64 {
        self.people_per_area
            * floor_area
            * self.occupancy_schedule.value_at(hour_of_year)
            * self.activity_schedule.value_at(hour_of_year)
    }
}

impl HasName for People {
    fn name(&self) -> &str {
        self.display_name()
    }
}

fn validate_people_per_area(people_per_area: f64) -> Result<()> {
    ensure!(
        people_per_area.is_finite() && people_per_area >= 0.0,
        "people_per_area must be finite and non-negative, got {people_per_area}"
    );
    Ok(())
}

fn validate_occupancy(schedule: &Schedule) -> Result<()> {
    ensure!(
        schedule.is_fractional(),
        "occupancy schedule '{}' must be fractional (values in [0, 1])",
        schedule.name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_people() -> People {
        People::new(
            "Generic Office People",
            0.1,
            Schedule::generic_office_occupancy(),
        )
        .unwrap()
    }

    #[test]
    fn test_display_name_falls_back_to_identifier() {
        let mut people = office_people();
        assert_eq!(people.display_name(), "Generic Office People");
        people.set_display_name("Open Office");
        assert_eq!(people.display_name(), "Open Office");
        assert_eq!(people.identifier(), "Generic Office People");
    }

    #[test]
    fn test_rejects_negative_density() {
        let result = People::new("bad", -0.1, Schedule::constant("occ", 1.0));
        assert!(result.is_err());

        let mut people = office_people();
        assert!(people.set_people_per_area(f64::NAN).is_err());
        assert!(people.set_people_per_area(0.05).is_ok());
        assert!((people.people_per_area() - 0.05).abs() < 1e-10);
    }

    #[test]
    fn test_rejects_non_fractional_occupancy() {
        let result = People::new("bad", 0.1, Schedule::constant("occ", 2.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_activity_is_seated_work() {
        let people = office_people();
        assert!((people.activity_schedule().value_at(0) - 120.0).abs() < 1e-10);
    }

    #[test]
    fn test_heat_gain() {
        let people = office_people();
        // Monday 10am, 100 m^2: 0.1 p/m^2 * 100 m^2 * 1.0 * 120 W = 1200 W
        let gain = people.heat_gain_at(10, 100.0);
        assert!((gain - 1200.0).abs() < 1e-10, "Expected 1200 W, got {gain}");
        // Monday 2am: unoccupied
        assert!((people.heat_gain_at(2, 100.0) - 0.0).abs() < 1e-10);
    }
}
