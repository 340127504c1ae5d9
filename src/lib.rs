pub mod catalog;
pub mod config;
pub mod io;
pub mod model;
mod name;
pub mod node;
pub mod results;
pub mod search;
mod uid;

// Prelude
pub use catalog::ConstructionSetCatalog;
pub use config::Folders;
pub use model::construction::{Layer, OpaqueConstruction};
pub use model::construction_set::ConstructionSet;
pub use model::hvac::IdealAirSystem;
pub use model::people::People;
pub use model::room::Room;
pub use model::schedule::Schedule;
pub use name::{HasName, SortByName};
pub use node::NodeError;
pub use results::rdd::Rdd;
pub use results::zsz::{ZoneLoadSeries, Zsz};
pub use search::filter_identifiers;
pub use uid::Uid;
