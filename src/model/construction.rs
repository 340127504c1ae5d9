use serde::{Deserialize, Serialize};

/// A single homogeneous material layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    /// Thickness in m.
    pub thickness: f64,
    /// Thermal conductivity in W/(m*K).
    pub conductivity: f64,
    /// Density in kg/m^3.
    pub density: f64,
    /// Specific heat in J/(kg*K).
    pub specific_heat: f64,
}

/// An opaque construction defined by material layers (outside to inside).
///
/// Computes steady-state thermal resistance and U-value following
/// ISO 6946 simplified method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpaqueConstruction {
    pub identifier: String,
    pub layers: Vec<Layer>,
    /// External surface resistance in m^2*K/W (default: 0.04 for walls).
    pub r_se: f64,
    /// Internal surface resistance in m^2*K/W (default: 0.13 for walls).
    pub r_si: f64,
}

impl OpaqueConstruction {
    pub fn new(identifier: &str, layers: Vec<Layer>) -> Self {
        Self {
            identifier: identifier.to_string(),
            layers,
            r_se: 0.04,
            r_si: 0.13,
        }
    }

    /// Creates a construction for a floor (different surface resistances).
    pub fn floor(identifier: &str, layers: Vec<Layer>) -> Self {
        Self {
            identifier: identifier.to_string(),
            layers,
            r_se: 0.04,
            r_si: 0.17, // ISO 6946 for downward heat flow
        }
    }

    /// Creates a construction for a roof/ceiling.
    pub fn roof(identifier: &str, layers: Vec<Layer>) -> Self {
        Self {
            identifier: identifier.to_string(),
            layers,
            r_se: 0.04,
            r_si: 0.10, // ISO 6946 for upward heat flow
        }
    }

    /// Total thermal resistance in m^2*K/W (including surface resistances).
    pub fn total_resistance(&self) -> f64 {
        let r_layers: f64 = self
            .layers
            .iter()
            .map(|l| {
                if l.conductivity > 0.0 {
                    l.thickness / l.conductivity
                } else {
                    0.0
                }
            })
            .sum();
        self.r_se + r_layers + self.r_si
    }

    /// U-value in W/(m^2*K).
    pub fn u_value(&self) -> f64 {
        let r = self.total_resistance();
        if r > 0.0 { 1.0 / r } else { 0.0 }
    }

    /// Total thermal capacity per unit area in J/(m^2*K).
    pub fn thermal_capacity(&self) -> f64 {
        self.layers
            .iter()
            .map(|l| l.density * l.specific_heat * l.thickness)
            .sum()
    }
}

/// Default exterior wall: brick, insulation, gypsum.
pub fn generic_wall() -> OpaqueConstruction {
    OpaqueConstruction::new(
        "Generic Exterior Wall",
        vec![
            Layer {
                name: "Generic Brick".to_string(),
                thickness: 0.10,
                conductivity: 0.90,
                density: 1920.0,
                specific_heat: 790.0,
            },
            Layer {
                name: "Generic Wall Insulation".to_string(),
                thickness: 0.05,
                conductivity: 0.049,
                density: 43.0,
                specific_heat: 1210.0,
            },
            Layer {
                name: "Generic Gypsum Board".to_string(),
                thickness: 0.0127,
                conductivity: 0.16,
                density: 800.0,
                specific_heat: 1090.0,
            },
        ],
    )
}

/// Default ground floor: concrete slab over insulation.
pub fn generic_floor() -> OpaqueConstruction {
    OpaqueConstruction::floor(
        "Generic Ground Slab",
        vec![
            Layer {
                name: "Generic Slab Insulation".to_string(),
                thickness: 0.05,
                conductivity: 0.03,
                density: 43.0,
                specific_heat: 1210.0,
            },
            Layer {
                name: "Generic Heavy Concrete".to_string(),
                thickness: 0.10,
                conductivity: 1.95,
                density: 2240.0,
                specific_heat: 900.0,
            },
        ],
    )
}

/// Default roof: membrane, insulation, acoustic tile.
pub fn generic_roof() -> OpaqueConstruction {
    OpaqueConstruction::roof(
        "Generic Roof",
        vec![
            Layer {
                name: "Generic Roof Membrane".to_string(),
                thickness: 0.01,
                conductivity: 0.16,
                density: 1120.0,
                specific_heat: 1460.0,
            },
            Layer {
                name: "Generic Roof Insulation".to_string(),
                thickness: 0.15,
                conductivity: 0.049,
                density: 43.0,
                specific_heat: 1210.0,
            },
            Layer {
                name: "Generic Acoustic Tile".to_string(),
                thickness: 0.02,
                conductivity: 0.06,
                density: 368.0,
                specific_heat: 590.0,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_wall_u_value() {
        let wall = generic_wall();
        let u = wall.u_value();
        // R = 0.04 + 0.10/0.90 + 0.05/0.049 + 0.0127/0.16 + 0.13 ≈ 1.38
        // U ≈ 0.72
        assert!(
            u > 0.5 && u < 1.0,
            "Insulated wall U-value should be realistic, got {u}"
        );
    }

    #[test]
    fn test_roof_beats_wall_insulation() {
        assert!(generic_roof().u_value() < generic_wall().u_value());
    }

    #[test]
    fn test_thermal_capacity() {
        let wall = OpaqueConstruction::new(
            "concrete",
            vec![Layer {
                name: "concrete".to_string(),
                thickness: 0.20,
                conductivity: 1.4,
                density: 2300.0,
                specific_heat: 880.0,
            }],
        );
        let cap = wall.thermal_capacity();
        // 2300 * 880 * 0.20 = 404,800 J/(m^2*K)
        assert!(
            (cap - 404800.0).abs() < 1.0,
            "Capacity should be ~404800, got {cap}"
        );
    }

    #[test]
    fn test_surface_resistances() {
        let wall = OpaqueConstruction::new("test", vec![]);
        let floor = OpaqueConstruction::floor("test", vec![]);
        let roof = OpaqueConstruction::roof("test", vec![]);
        assert!((wall.r_si - 0.13).abs() < 1e-10);
        assert!((floor.r_si - 0.17).abs() < 1e-10);
        assert!((roof.r_si - 0.10).abs() < 1e-10);
    }

    #[test]
    fn test_zero_conductivity_layer_is_ignored() {
        let wall = OpaqueConstruction::new(
            "degenerate",
            vec![Layer {
                name: "void".to_string(),
                thickness: 1.0,
                conductivity: 0.0,
                density: 0.0,
                specific_heat: 0.0,
            }],
        );
        assert!((wall.total_resistance() - 0.17).abs() < 1e-10);
    }
}
