use serde::{Deserialize, Serialize};

use super::construction::{generic_floor, generic_roof, generic_wall, OpaqueConstruction};
use crate::name::HasName;

/// A set of constructions grouped by the surface type they apply to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionSet {
    identifier: String,
    display_name: Option<String>,
    wall_construction: OpaqueConstruction,
    floor_construction: OpaqueConstruction,
    roof_ceiling_construction: OpaqueConstruction,
}

/// Per-surface-type U-values of a construction set in W/(m^2*K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetUValues {
    pub wall: f64,
    pub floor: f64,
    pub roof_ceiling: f64,
}

impl ConstructionSet {
    pub fn new(
        identifier: &str,
        wall_construction: OpaqueConstruction,
        floor_construction: OpaqueConstruction,
        roof_ceiling_construction: OpaqueConstruction,
    ) -> Self {
        Self {
            identifier: identifier.to_string(),
            display_name: None,
            wall_construction,
            floor_construction,
            roof_ceiling_construction,
        }
    }

    /// The default set assigned when nothing more specific applies.
    pub fn generic() -> Self {
        Self::new(
            crate::catalog::GENERIC_CONSTRUCTION_SET,
            generic_wall(),
            generic_floor(),
            generic_roof(),
        )
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

    pub fn wall_construction(&self) -> &OpaqueConstruction {
        &self.wall_construction
    }

    pub fn floor_construction(&self) -> &OpaqueConstruction {
        &self.floor_construction
    }

    pub fn roof_ceiling_construction(&self) -> &OpaqueConstruction {
        &self.roof_ceiling_construction
    }

    pub fn u_values(&self) -> SetUValues {
        SetUValues {
            wall: self.wall_construction.u_value(),
            floor: self.floor_construction.u_value(),
            roof_ceiling: self.roof_ceiling_construction.u_value(),
        }
    }
}

impl HasName for ConstructionSet {
    fn name(&self) -> &str {
        self.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_set_identifier() {
        let set = ConstructionSet::generic();
        assert_eq!(set.identifier(), "Default Generic Construction Set");
        assert_eq!(set.display_name(), set.identifier());
    }

    #[test]
    fn test_u_values_match_constructions() {
        let set = ConstructionSet::generic();
        let u = set.u_values();
        assert!((u.wall - set.wall_construction().u_value()).abs() < 1e-12);
        assert!((u.floor - set.floor_construction().u_value()).abs() < 1e-12);
        assert!(
            (u.roof_ceiling - set.roof_ceiling_construction().u_value()).abs() < 1e-12
        );
    }

    #[test]
    fn test_display_name_override() {
        let mut set = ConstructionSet::generic();
        set.set_display_name("Baseline Envelope");
        assert_eq!(set.display_name(), "Baseline Envelope");
        use crate::name::HasName;
        assert_eq!(set.name(), "Baseline Envelope");
    }
}
