//! Construction and deconstruction of people loads.

use super::NodeError;
use crate::model::people::People;
use crate::model::schedule::Schedule;
use crate::uid::Uid;

/// The plain fields of a people load, for downstream consumption.
#[derive(Debug, Clone)]
pub struct PeopleFields {
    pub identifier: String,
    pub display_name: String,
    pub people_per_area: f64,
    pub occupancy_schedule: Schedule,
    pub activity_schedule: Schedule,
}

/// Builds a people load from loose inputs.
///
/// `people_per_area` is required. The occupancy schedule defaults to the
/// generic office profile, the activity schedule to seated work; a display
/// name, when given, also seeds the generated identifier.
pub fn construct(
    display_name: Option<&str>,
    people_per_area: Option<f64>,
    occupancy_schedule: Option<Schedule>,
    activity_schedule: Option<Schedule>,
) -> Result<People, NodeError> {
    let people_per_area =
        people_per_area.ok_or(NodeError::MissingInput("people_per_area"))?;
    let occupancy =
        occupancy_schedule.unwrap_or_else(Schedule::generic_office_occupancy);

    let identifier = match display_name {
        Some(name) => format!("{}_{}", name.replace(' ', "_"), short_suffix()),
        None => Uid::with_prefix("People").to_string(),
    };

    let mut people = People::new(&identifier, people_per_area, occupancy)
        .map_err(|e| NodeError::invalid("people_per_area", e))?;
    if let Some(name) = display_name {
        people.set_display_name(name);
    }
    if let Some(activity) = activity_schedule {
        people
            .set_activity_schedule(activity)
            .map_err(|e| NodeError::invalid("activity_schedule", e))?;
    }
    Ok(people)
}

/// Splits a people load into its plain fields.
pub fn deconstruct(people: Option<&People>) -> Result<PeopleFields, NodeError> {
    let people = people.ok_or(NodeError::MissingInput("people"))?;
    Ok(PeopleFields {
        identifier: people.identifier().to_string(),
        display_name: people.display_name().to_string(),
        people_per_area: people.people_per_area(),
        occupancy_schedule: people.occupancy_schedule().clone(),
        activity_schedule: people.activity_schedule().clone(),
    })
}

fn short_suffix() -> String {
    Uid::with_prefix("x").to_string().split_off(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_requires_density() {
        let result = construct(Some("Open Office"), None, None, None);
        assert!(matches!(
            result,
            Err(NodeError::MissingInput("people_per_area"))
        ));
    }

    #[test]
    fn test_construct_defaults() {
        let people = construct(None, Some(0.0565), None, None).unwrap();
        assert!((people.people_per_area() - 0.0565).abs() < 1e-12);
        assert_eq!(
            people.occupancy_schedule().name,
            "Generic Office Occupancy"
        );
        assert!((people.activity_schedule().value_at(0) - 120.0).abs() < 1e-10);
        assert!(people.identifier().starts_with("People_"));
    }

    #[test]
    fn test_construct_with_display_name() {
        let people = construct(Some("Open Office"), Some(0.05), None, None).unwrap();
        assert_eq!(people.display_name(), "Open Office");
        assert!(people.identifier().starts_with("Open_Office_"));
    }

    #[test]
    fn test_construct_rejects_bad_density() {
        let result = construct(None, Some(-1.0), None, None);
        assert!(matches!(
            result,
            Err(NodeError::InvalidInput { input: "people_per_area", .. })
        ));
    }

    #[test]
    fn test_construct_rejects_bad_activity() {
        let activity = Schedule::constant("negative", -5.0);
        let result = construct(None, Some(0.05), None, Some(activity));
        assert!(matches!(
            result,
            Err(NodeError::InvalidInput { input: "activity_schedule", .. })
        ));
    }

    #[test]
    fn test_deconstruct_roundtrip() {
        let people = construct(Some("Lab"), Some(0.1), None, None).unwrap();
        let fields = deconstruct(Some(&people)).unwrap();
        assert_eq!(fields.display_name, "Lab");
        assert_eq!(fields.identifier, people.identifier());
        assert!((fields.people_per_area - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_deconstruct_missing_input() {
        let result = deconstruct(None);
        assert!(matches!(result, Err(NodeError::MissingInput("people"))));
    }
}
