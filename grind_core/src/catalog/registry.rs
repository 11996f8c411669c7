//! # Built-in Calculator Catalog
//!
//! The catalog ships with the application and is loaded once as an immutable
//! set of validated definitions. Lookup is by stable id; category tags drive
//! the home-screen filter chips.
//!
//! ## Usage
//!
//! ```rust
//! use grind_core::catalog::registry;
//!
//! let def = registry::find("wheel-surface-speed").unwrap();
//! assert_eq!(def.short_name, "Surface Speed");
//!
//! let dressing = registry::by_category("dressing");
//! assert!(!dressing.is_empty());
//! ```

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::catalog::definition::{CalculatorDefinition, InputField};
use crate::catalog::formula::Formula;
use crate::units::UnitPair;

/// All built-in calculators, in home-screen order.
pub static CATALOG: Lazy<Vec<CalculatorDefinition>> = Lazy::new(builtin_catalog);

/// Look up a calculator by id.
pub fn find(id: &str) -> Option<&'static CalculatorDefinition> {
    CATALOG.iter().find(|def| def.id == id)
}

/// All calculators carrying a category tag.
pub fn by_category(tag: &str) -> Vec<&'static CalculatorDefinition> {
    CATALOG
        .iter()
        .filter(|def| def.categories.contains(tag))
        .collect()
}

fn tags(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn builtin_catalog() -> Vec<CalculatorDefinition> {
    let catalog = vec![
        CalculatorDefinition {
            id: "wheel-surface-speed".to_string(),
            name: "Wheel Surface Speed".to_string(),
            short_name: "Surface Speed".to_string(),
            categories: tags(&["speed", "wheel"]),
            description: "Peripheral speed of the wheel from its diameter and spindle rpm. \
                          Keep the result inside the bond's rated speed."
                .to_string(),
            inputs: vec![
                InputField::new(
                    "diameter",
                    "Wheel diameter",
                    "Outside diameter of the grinding wheel",
                    UnitPair::new("mm", "in"),
                    UnitPair::new("e.g. 400", "e.g. 16"),
                )
                .with_bounds(1.0, 1500.0, 1.0),
                InputField::new(
                    "rpm",
                    "Spindle speed",
                    "Spindle rotational speed",
                    UnitPair::new("rpm", "rpm"),
                    UnitPair::new("e.g. 1900", "e.g. 1500"),
                )
                .with_bounds(1.0, 30000.0, 10.0),
            ],
            formula: Formula::SurfaceSpeed {
                diameter: "diameter".to_string(),
                spindle_speed: "rpm".to_string(),
            },
            result_unit: UnitPair::new("m/s", "SFPM"),
        },
        CalculatorDefinition {
            id: "wheel-rpm".to_string(),
            name: "Spindle Speed for Target Surface Speed".to_string(),
            short_name: "Wheel RPM".to_string(),
            categories: tags(&["speed", "wheel"]),
            description: "Spindle rpm required to reach a target peripheral speed \
                          for a given wheel diameter."
                .to_string(),
            inputs: vec![
                InputField::new(
                    "diameter",
                    "Wheel diameter",
                    "Outside diameter of the grinding wheel",
                    UnitPair::new("mm", "in"),
                    UnitPair::new("e.g. 400", "e.g. 16"),
                )
                .with_bounds(1.0, 1500.0, 1.0),
                InputField::new(
                    "target_speed",
                    "Target surface speed",
                    "Desired wheel peripheral speed",
                    UnitPair::new("m/s", "SFPM"),
                    UnitPair::new("e.g. 35", "e.g. 6500"),
                ),
            ],
            formula: Formula::WheelRpm {
                diameter: "diameter".to_string(),
                surface_speed: "target_speed".to_string(),
            },
            result_unit: UnitPair::new("rpm", "rpm"),
        },
        CalculatorDefinition {
            id: "wheel-circumference".to_string(),
            name: "Wheel Circumference".to_string(),
            short_name: "Circumference".to_string(),
            categories: tags(&["wheel"]),
            description: "Wheel circumference from its diameter, for belt and \
                          contact-length estimates."
                .to_string(),
            inputs: vec![InputField::new(
                "diameter",
                "Wheel diameter",
                "Outside diameter of the grinding wheel",
                UnitPair::new("mm", "in"),
                UnitPair::new("e.g. 400", "e.g. 16"),
            )],
            formula: Formula::Circumference {
                diameter: "diameter".to_string(),
            },
            result_unit: UnitPair::new("mm", "in"),
        },
        CalculatorDefinition {
            id: "specific-removal-rate".to_string(),
            name: "Specific Material Removal Rate (Q')".to_string(),
            short_name: "Q-prime".to_string(),
            categories: tags(&["process", "removal"]),
            description: "Material removed per unit wheel width and time, from \
                          depth of cut and work speed."
                .to_string(),
            inputs: vec![
                InputField::new(
                    "depth_of_cut",
                    "Depth of cut",
                    "Radial depth of cut per pass",
                    UnitPair::new("mm", "in"),
                    UnitPair::new("e.g. 0.02", "e.g. 0.0008"),
                ),
                InputField::new(
                    "work_speed",
                    "Work speed",
                    "Table/workpiece feed speed",
                    UnitPair::new("m/min", "ft/min"),
                    UnitPair::new("e.g. 18", "e.g. 60"),
                ),
            ],
            formula: Formula::SpecificRemovalRate {
                depth_of_cut: "depth_of_cut".to_string(),
                work_speed: "work_speed".to_string(),
            },
            result_unit: UnitPair::new("mm³/mm/s", "in³/in/min"),
        },
        CalculatorDefinition {
            id: "dress-overlap-ratio".to_string(),
            name: "Dressing Overlap Ratio (Ud)".to_string(),
            short_name: "Overlap Ratio".to_string(),
            categories: tags(&["dressing"]),
            description: "How many times the dresser contact width overlaps per \
                          wheel revolution. Low values leave an open, aggressive \
                          face; high values close it up for finish."
                .to_string(),
            inputs: vec![
                InputField::new(
                    "dresser_width",
                    "Dresser contact width",
                    "Effective contact width of the dressing tool",
                    UnitPair::new("mm", "in"),
                    UnitPair::new("e.g. 1.0", "e.g. 0.04"),
                ),
                InputField::new(
                    "wheel_rpm",
                    "Wheel speed",
                    "Wheel rotational speed during dressing",
                    UnitPair::new("rpm", "rpm"),
                    UnitPair::new("e.g. 1800", "e.g. 1800"),
                ),
                InputField::new(
                    "traverse_rate",
                    "Dresser traverse rate",
                    "Dressing traverse feed across the wheel face",
                    UnitPair::new("mm/min", "in/min"),
                    UnitPair::new("e.g. 300", "e.g. 12"),
                ),
            ],
            formula: Formula::DressOverlap {
                dresser_width: "dresser_width".to_string(),
                wheel_speed: "wheel_rpm".to_string(),
                traverse_rate: "traverse_rate".to_string(),
            },
            result_unit: UnitPair::dimensionless(),
        },
        CalculatorDefinition {
            id: "g-ratio".to_string(),
            name: "Grinding Ratio (G)".to_string(),
            short_name: "G-Ratio".to_string(),
            categories: tags(&["process", "wear"]),
            description: "Volume of material removed per volume of wheel wear. \
                          Higher is a more economical wheel for the job."
                .to_string(),
            inputs: vec![
                InputField::new(
                    "material_removed",
                    "Material removed",
                    "Total stock volume removed",
                    UnitPair::new("mm³", "in³"),
                    UnitPair::new("e.g. 1200", "e.g. 0.075"),
                ),
                InputField::new(
                    "wheel_wear",
                    "Wheel wear",
                    "Wheel volume lost over the same interval",
                    UnitPair::new("mm³", "in³"),
                    UnitPair::new("e.g. 30", "e.g. 0.002"),
                ),
            ],
            formula: Formula::GRatio {
                volume_removed: "material_removed".to_string(),
                wheel_wear: "wheel_wear".to_string(),
            },
            result_unit: UnitPair::dimensionless(),
        },
        CalculatorDefinition {
            id: "coolant-flow".to_string(),
            name: "Coolant Flow Rate".to_string(),
            short_name: "Coolant Flow".to_string(),
            categories: tags(&["process", "coolant"]),
            description: "Recommended coolant delivery for the spindle power in \
                          the cut, per conventional flood-cooling guidelines."
                .to_string(),
            inputs: vec![InputField::new(
                "spindle_power",
                "Spindle power",
                "Power drawn in the cut",
                UnitPair::new("kW", "hp"),
                UnitPair::new("e.g. 15", "e.g. 20"),
            )],
            formula: Formula::CoolantFlow {
                spindle_power: "spindle_power".to_string(),
            },
            result_unit: UnitPair::new("L/min", "gpm"),
        },
    ];

    debug_assert!(
        catalog.iter().all(|def| def.validate().is_ok()),
        "built-in catalog must validate"
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_definitions_validate() {
        for def in CATALOG.iter() {
            def.validate()
                .unwrap_or_else(|e| panic!("{} failed validation: {}", def.id, e));
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: BTreeSet<_> = CATALOG.iter().map(|def| def.id.as_str()).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("wheel-surface-speed").is_some());
        assert!(find("g-ratio").is_some());
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn test_by_category() {
        let speed = by_category("speed");
        assert_eq!(speed.len(), 2);
        assert!(by_category("dressing").iter().any(|d| d.id == "dress-overlap-ratio"));
        assert!(by_category("nope").is_empty());
    }

    #[test]
    fn test_result_units_populated() {
        // Every result, dimensionless ones included, carries displayable
        // unit strings in both systems
        for def in CATALOG.iter() {
            assert!(!def.result_unit.metric.is_empty(), "{}", def.id);
            assert!(!def.result_unit.imperial.is_empty(), "{}", def.id);
        }
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_string_pretty(&*CATALOG).unwrap();
        assert!(json.contains("wheel-surface-speed"));
        assert!(json.contains("\"kind\": \"SurfaceSpeed\""));
    }
}
