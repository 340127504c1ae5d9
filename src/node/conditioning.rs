//! Room conditioning queries and assignment.

use super::NodeError;
use crate::model::room::Room;

/// Whether a room carries an HVAC assignment.
pub fn is_conditioned(room: Option<&Room>) -> Result<bool, NodeError> {
    let room = room.ok_or(NodeError::MissingInput("room"))?;
    Ok(room.is_conditioned())
}

/// Assigns a default ideal-air system to an unconditioned room.
///
/// Returns true when a system was newly assigned; an already conditioned
/// room keeps its system and returns false.
pub fn add_default_ideal_air(room: Option<&mut Room>) -> Result<bool, NodeError> {
    let room = room.ok_or(NodeError::MissingInput("room"))?;
    Ok(room.add_default_ideal_air())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_room() {
        assert!(matches!(
            is_conditioned(None),
            Err(NodeError::MissingInput("room"))
        ));
        assert!(matches!(
            add_default_ideal_air(None),
            Err(NodeError::MissingInput("room"))
        ));
    }

    #[test]
    fn test_conditioning_transition() {
        let mut room = Room::new("Office_101", 50.0, 150.0).unwrap();
        assert!(!is_conditioned(Some(&room)).unwrap());

        assert!(add_default_ideal_air(Some(&mut room)).unwrap());
        assert!(is_conditioned(Some(&room)).unwrap());

        // Re-running does not replace the system.
        assert!(!add_default_ideal_air(Some(&mut room)).unwrap());
        assert_eq!(room.hvac().unwrap().identifier(), "Office_101_IdealAir");
    }
}
