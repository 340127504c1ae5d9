use serde::{Deserialize, Serialize};

/// A time-varying schedule for occupancy, activity levels, setpoints, etc.
///
/// Provides hourly values that repeat on a daily or weekly basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub name: String,
    /// Hourly values for the schedule period.
    /// If 1 value: constant.
    /// If 24 values: repeats daily.
    /// If 168 values: repeats weekly (Mon-Sun, 24h each).
    /// If 8760 values: annual (no repeat).
    values: Vec<f64>,
}

impl Schedule {
    /// Creates a schedule from a list of hourly values.
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    /// Creates a constant schedule.
    pub fn constant(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            values: vec![value],
        }
    }

    /// Creates a typical office occupancy schedule (8am-6pm weekdays).
    pub fn generic_office_occupancy() -> Self {
        let mut values = Vec::with_capacity(168);
        for day in 0..7 {
            for hour in 0..24 {
                let is_weekday = day < 5;
                let is_working_hour = (8..18).contains(&hour);
                let val = if is_weekday && is_working_hour {
                    1.0
                } else {
                    0.0
                };
                values.push(val);
            }
        }
        Self::new("Generic Office Occupancy", values)
    }

    /// Creates a residential occupancy schedule.
    pub fn generic_residential_occupancy() -> Self {
        let mut values = Vec::with_capacity(24);
        for hour in 0..24 {
            let val = match hour {
                0..=6 => 1.0,   // sleeping
                7..=8 => 0.5,   // morning
                9..=16 => 0.2,  // away
                17..=21 => 0.8, // evening
                22..=23 => 1.0, // night
                _ => 0.0,
            };
            values.push(val);
        }
        Self::new("Generic Residential Occupancy", values)
    }

    /// Constant metabolic rate for seated, light office work in W/person.
    pub fn seated_activity() -> Self {
        Self::constant("Seated Activity", 120.0)
    }

    /// Gets the schedule value for a given hour of the year (0-8759).
    pub fn value_at(&self, hour_of_year: usize) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        if self.values.len() == 1 {
            return self.values[0];
        }
        let idx = hour_of_year % self.values.len();
        self.values[idx]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// True when every value lies in [0, 1].
    ///
    /// Occupancy and other multiplier schedules are fractional; activity
    /// schedules (W/person) are not.
    pub fn is_fractional(&self) -> bool {
        self.values.iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// True when every value is finite and non-negative.
    pub fn is_non_negative(&self) -> bool {
        self.values.iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}
