use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::name::HasName;

/// Outdoor-air economizer mode of an ideal-air system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EconomizerMode {
    NoEconomizer,
    DifferentialDryBulb,
    DifferentialEnthalpy,
}

/// An ideal-air conditioning system.
///
/// Maintains a room between heating and cooling setpoints with optional
/// capacity limits. `None` capacity means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealAirSystem {
    identifier: String,
    /// Heating setpoint in °C.
    heating_setpoint: f64,
    /// Cooling setpoint in °C.
    cooling_setpoint: f64,
    /// Maximum heating capacity in W.
    max_heating_capacity: Option<f64>,
    /// Maximum cooling capacity in W.
    max_cooling_capacity: Option<f64>,
    economizer: EconomizerMode,
}

impl IdealAirSystem {
    /// Creates a default system (21°C heating, 24°C cooling, unlimited).
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            heating_setpoint: 21.0,
            cooling_setpoint: 24.0,
            max_heating_capacity: None,
            max_cooling_capacity: None,
            economizer: EconomizerMode::NoEconomizer,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn heating_setpoint(&self) -> f64 {
        self.heating_setpoint
    }

    pub fn cooling_setpoint(&self) -> f64 {
        self.cooling_setpoint
    }

    /// Sets both setpoints. Heating must stay strictly below cooling.
    pub fn set_setpoints(&mut self, heating: f64, cooling: f64) -> Result<()> {
        ensure!(
            heating.is_finite() && cooling.is_finite() && heating < cooling,
            "heating setpoint ({heating}°C) must be below cooling setpoint ({cooling}°C)"
        );
        self.heating_setpoint = heating;
        self.cooling_setpoint = cooling;
        Ok(())
    }

    pub fn max_heating_capacity(&self) -> Option<f64> {
        self.max_heating_capacity
    }

    pub fn max_cooling_capacity(&self) -> Option<f64> {
        self.max_cooling_capacity
    }

    /// Limits heating capacity in W. `None` restores unlimited capacity.
    pub fn set_max_heating_capacity(&mut self, capacity: Option<f64>) -> Result<()> {
        validate_capacity(capacity)?;
        self.max_heating_capacity = capacity;
        Ok(())
    }

    /// Limits cooling capacity in W. `None` restores unlimited capacity.
    pub fn set_max_cooling_capacity(&mut self, capacity: Option<f64>) -> Result<()> {
        validate_capacity(capacity)?;
        self.max_cooling_capacity = capacity;
        Ok(())
    }

    pub fn economizer(&self) -> EconomizerMode {
        self.economizer
    }

    pub fn set_economizer(&mut self, mode: EconomizerMode) {
        self.economizer = mode;
    }

    /// Returns the setpoint this system would drive toward at a given
    /// free-floating temperature, or `None` inside the deadband.
    pub fn active_setpoint(&self, free_floating_temp: f64) -> Option<f64> {
        if free_floating_temp < self.heating_setpoint {
            Some(self.heating_setpoint)
        } else if free_floating_temp > self.cooling_setpoint {
            Some(self.cooling_setpoint)
        } else {
            None
        }
    }
}

impl HasName for IdealAirSystem {
    fn name(&self) -> &str {
        &self.identifier
    }
}

fn validate_capacity(capacity: Option<f64>) -> Result<()> {
    if let Some(value) = capacity {
        ensure!(
            value.is_finite() && value > 0.0,
            "capacity limit must be a positive number of watts, got {value}"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let hvac = IdealAirSystem::new("Office_IdealAir");
        assert_eq!(hvac.identifier(), "Office_IdealAir");
        assert!((hvac.heating_setpoint() - 21.0).abs() < 1e-10);
        assert!((hvac.cooling_setpoint() - 24.0).abs() < 1e-10);
        assert!(hvac.max_heating_capacity().is_none());
        assert_eq!(hvac.economizer(), EconomizerMode::NoEconomizer);
    }

    #[test]
    fn test_setpoint_ordering_enforced() {
        let mut hvac = IdealAirSystem::new("test");
        assert!(hvac.set_setpoints(25.0, 20.0).is_err());
        assert!(hvac.set_setpoints(20.0, 20.0).is_err());
        assert!(hvac.set_setpoints(19.0, 26.0).is_ok());
        assert!((hvac.heating_setpoint() - 19.0).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_validation() {
        let mut hvac = IdealAirSystem::new("test");
        assert!(hvac.set_max_heating_capacity(Some(-100.0)).is_err());
        assert!(hvac.set_max_heating_capacity(Some(0.0)).is_err());
        assert!(hvac.set_max_heating_capacity(Some(5000.0)).is_ok());
        assert!(hvac.set_max_heating_capacity(None).is_ok());
        assert!(hvac.max_heating_capacity().is_none());
    }

    #[test]
    fn test_active_setpoint() {
        let hvac = IdealAirSystem::new("test");
        assert_eq!(hvac.active_setpoint(15.0), Some(21.0));
        assert_eq!(hvac.active_setpoint(30.0), Some(24.0));
        assert_eq!(hvac.active_setpoint(22.0), None);
    }
}
