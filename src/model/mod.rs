//! Domain objects for building-energy model authoring.
//!
//! These types carry the data that simulation engines consume: schedules,
//! area-normalized occupant loads, layered constructions grouped into sets,
//! and ideal-air conditioning systems attached to rooms.

pub mod construction;
pub mod construction_set;
pub mod hvac;
pub mod people;
pub mod room;
pub mod schedule;

pub use construction::{Layer, OpaqueConstruction};
pub use construction_set::ConstructionSet;
pub use hvac::IdealAirSystem;
pub use people::People;
pub use room::Room;
pub use schedule::Schedule;
