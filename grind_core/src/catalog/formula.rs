//! # Formula Variants
//!
//! The closed set of formula kinds a calculator definition can carry. Each
//! variant names the input keys it reads and owns its unit-system-dependent
//! math, so a definition is fully described by plain data — no interpreted
//! expression trees.
//!
//! Formula authors' contract: pure math over the supplied inputs, conversion
//! constants chosen per [`UnitSystem`], and non-finite results (division by
//! zero and friends) mapped to `None` rather than escaping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::abrasives::{AbrasiveType, WheelBond};
use crate::scale::ScaleAnnotation;
use crate::units::{
    UnitSystem, COOLANT_GPM_PER_HP, COOLANT_LPM_PER_KW, INCHES_PER_FOOT, MM_PER_METER,
    MM_RPM_TO_MPS, SECONDS_PER_MINUTE, SFPM_PER_MPS,
};

/// A pure mapping from numeric inputs and a unit system to a result.
///
/// Variants are serde-tagged so stored definitions stay self-describing:
///
/// ```json
/// { "kind": "SurfaceSpeed", "diameter": "diameter", "spindle_speed": "rpm" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Formula {
    /// Wheel peripheral speed: v = pi * d * n
    ///
    /// Metric: d in mm, n in rpm, result in m/s.
    /// Imperial: d in inches, n in rpm, result in SFPM.
    SurfaceSpeed {
        diameter: String,
        spindle_speed: String,
    },

    /// Spindle speed for a target peripheral speed: n = v / (pi * d)
    ///
    /// Metric: v in m/s, d in mm. Imperial: v in SFPM, d in inches.
    /// Result in rpm either way.
    WheelRpm {
        diameter: String,
        surface_speed: String,
    },

    /// Wheel circumference: c = pi * d (same unit as the diameter input)
    Circumference { diameter: String },

    /// Specific material removal rate: Q' = a_e * v_w
    ///
    /// Metric: a_e in mm, v_w in m/min, result in mm^3/(mm*s).
    /// Imperial: a_e in inches, v_w in ft/min, result in in^3/(in*min).
    SpecificRemovalRate {
        depth_of_cut: String,
        work_speed: String,
    },

    /// Dressing overlap ratio: U_d = b_d * n_s / v_d (dimensionless)
    ///
    /// b_d = dresser contact width, n_s = wheel rpm, v_d = traverse rate
    /// per minute in the same length unit as b_d.
    DressOverlap {
        dresser_width: String,
        wheel_speed: String,
        traverse_rate: String,
    },

    /// Grinding ratio: G = volume removed / wheel wear volume (dimensionless)
    GRatio {
        volume_removed: String,
        wheel_wear: String,
    },

    /// Coolant delivery from spindle power.
    ///
    /// Metric: kW in, L/min out. Imperial: hp in, gpm out.
    CoolantFlow { spindle_power: String },
}

impl Formula {
    /// The input keys this formula reads. Definition validation checks each
    /// one against the declared input list.
    pub fn input_keys(&self) -> Vec<&str> {
        match self {
            Formula::SurfaceSpeed {
                diameter,
                spindle_speed,
            } => vec![diameter, spindle_speed],
            Formula::WheelRpm {
                diameter,
                surface_speed,
            } => vec![diameter, surface_speed],
            Formula::Circumference { diameter } => vec![diameter],
            Formula::SpecificRemovalRate {
                depth_of_cut,
                work_speed,
            } => vec![depth_of_cut, work_speed],
            Formula::DressOverlap {
                dresser_width,
                wheel_speed,
                traverse_rate,
            } => vec![dresser_width, wheel_speed, traverse_rate],
            Formula::GRatio {
                volume_removed,
                wheel_wear,
            } => vec![volume_removed, wheel_wear],
            Formula::CoolantFlow { spindle_power } => vec![spindle_power],
        }
    }

    /// Evaluate against a complete-or-empty input map.
    ///
    /// A missing key means "no data" and yields `None`; a zero where the
    /// math divides yields `None` via the finite guard. Returns the value
    /// together with the scale annotation for the active unit system.
    pub fn evaluate(
        &self,
        inputs: &HashMap<String, f64>,
        system: UnitSystem,
    ) -> (Option<f64>, Option<ScaleAnnotation>) {
        match self {
            Formula::SurfaceSpeed {
                diameter,
                spindle_speed,
            } => {
                let value = (|| {
                    let d = get(inputs, diameter)?;
                    let n = get(inputs, spindle_speed)?;
                    let v = match system {
                        UnitSystem::Metric => std::f64::consts::PI * d * n / MM_RPM_TO_MPS,
                        UnitSystem::Imperial => std::f64::consts::PI * d * n / INCHES_PER_FOOT,
                    };
                    finite(v)
                })();
                (value, Some(surface_speed_scale(system)))
            }

            Formula::WheelRpm {
                diameter,
                surface_speed,
            } => {
                let value = (|| {
                    let d = get(inputs, diameter)?;
                    let v = get(inputs, surface_speed)?;
                    let n = match system {
                        UnitSystem::Metric => v * MM_RPM_TO_MPS / (std::f64::consts::PI * d),
                        UnitSystem::Imperial => v * INCHES_PER_FOOT / (std::f64::consts::PI * d),
                    };
                    finite(n)
                })();
                (value, None)
            }

            Formula::Circumference { diameter } => {
                let value = get(inputs, diameter)
                    .map(|d| std::f64::consts::PI * d)
                    .and_then(finite);
                (value, None)
            }

            Formula::SpecificRemovalRate {
                depth_of_cut,
                work_speed,
            } => {
                let value = (|| {
                    let ae = get(inputs, depth_of_cut)?;
                    let vw = get(inputs, work_speed)?;
                    let q = match system {
                        UnitSystem::Metric => ae * vw * MM_PER_METER / SECONDS_PER_MINUTE,
                        UnitSystem::Imperial => ae * vw * INCHES_PER_FOOT,
                    };
                    finite(q)
                })();
                (value, Some(removal_rate_scale(system)))
            }

            Formula::DressOverlap {
                dresser_width,
                wheel_speed,
                traverse_rate,
            } => {
                let value = (|| {
                    let bd = get(inputs, dresser_width)?;
                    let ns = get(inputs, wheel_speed)?;
                    let vd = get(inputs, traverse_rate)?;
                    finite(bd * ns / vd)
                })();
                (value, Some(ScaleAnnotation::new(0.0, 12.0, 3.0, 8.0)))
            }

            Formula::GRatio {
                volume_removed,
                wheel_wear,
            } => {
                let value = (|| {
                    let removed = get(inputs, volume_removed)?;
                    let wear = get(inputs, wheel_wear)?;
                    finite(removed / wear)
                })();
                (value, Some(ScaleAnnotation::new(0.0, 100.0, 20.0, 80.0)))
            }

            Formula::CoolantFlow { spindle_power } => {
                let value = get(inputs, spindle_power)
                    .map(|p| match system {
                        UnitSystem::Metric => p * COOLANT_LPM_PER_KW,
                        UnitSystem::Imperial => p * COOLANT_GPM_PER_HP,
                    })
                    .and_then(finite);
                (value, None)
            }
        }
    }
}

/// Fetch an input; `None` is the "no data" signal for this key.
fn get(inputs: &HashMap<String, f64>, key: &str) -> Option<f64> {
    inputs.get(key).copied()
}

/// Non-finite math never escapes a formula.
fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// Speed gauge anchored to conventional-abrasive practice and the vitrified
/// bond rating (see `abrasives`).
fn surface_speed_scale(system: UnitSystem) -> ScaleAnnotation {
    let (lo, hi) = AbrasiveType::AluminumOxide.operating_band_mps();
    let ceiling = WheelBond::Metal.max_peripheral_speed_mps();
    debug_assert!(hi <= WheelBond::Vitrified.max_peripheral_speed_mps());
    match system {
        UnitSystem::Metric => ScaleAnnotation::new(0.0, ceiling, lo, hi),
        UnitSystem::Imperial => ScaleAnnotation::new(
            0.0,
            ceiling * SFPM_PER_MPS,
            lo * SFPM_PER_MPS,
            hi * SFPM_PER_MPS,
        ),
    }
}

fn removal_rate_scale(system: UnitSystem) -> ScaleAnnotation {
    match system {
        // mm^3/(mm*s): surface grinding runs productively around 1-10
        UnitSystem::Metric => ScaleAnnotation::new(0.0, 20.0, 1.0, 10.0),
        // in^3/(in*min) equivalents of the band above
        UnitSystem::Imperial => ScaleAnnotation::new(0.0, 1.9, 0.1, 0.9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn surface_speed() -> Formula {
        Formula::SurfaceSpeed {
            diameter: "diameter".to_string(),
            spindle_speed: "rpm".to_string(),
        }
    }

    #[test]
    fn test_surface_speed_metric() {
        // 400 mm wheel at 1910 rpm -> ~40 m/s
        let (value, scale) = surface_speed().evaluate(
            &inputs(&[("diameter", 400.0), ("rpm", 1910.0)]),
            UnitSystem::Metric,
        );
        assert!((value.unwrap() - 40.0).abs() < 0.1);
        assert!(scale.is_some());
    }

    #[test]
    fn test_surface_speed_imperial() {
        // 16 in wheel at 1500 rpm -> pi * 16 * 1500 / 12 = 6283 SFPM
        let (value, _) = surface_speed().evaluate(
            &inputs(&[("diameter", 16.0), ("rpm", 1500.0)]),
            UnitSystem::Imperial,
        );
        assert!((value.unwrap() - 6283.2).abs() < 0.5);
    }

    #[test]
    fn test_wheel_rpm_inverts_surface_speed() {
        let rpm_formula = Formula::WheelRpm {
            diameter: "diameter".to_string(),
            surface_speed: "speed".to_string(),
        };
        let (value, _) = rpm_formula.evaluate(
            &inputs(&[("diameter", 400.0), ("speed", 40.0)]),
            UnitSystem::Metric,
        );
        assert!((value.unwrap() - 1909.9).abs() < 0.5);
    }

    #[test]
    fn test_wheel_rpm_zero_diameter_is_none() {
        let rpm_formula = Formula::WheelRpm {
            diameter: "diameter".to_string(),
            surface_speed: "speed".to_string(),
        };
        let (value, _) = rpm_formula.evaluate(
            &inputs(&[("diameter", 0.0), ("speed", 40.0)]),
            UnitSystem::Metric,
        );
        assert_eq!(value, None);
    }

    #[test]
    fn test_missing_key_is_none() {
        let (value, _) = surface_speed().evaluate(
            &inputs(&[("diameter", 400.0)]),
            UnitSystem::Metric,
        );
        assert_eq!(value, None);
    }

    #[test]
    fn test_empty_inputs_are_none_with_scale() {
        // The no-data sentinel still reports a scale for the gauge chrome
        let (value, scale) = surface_speed().evaluate(&HashMap::new(), UnitSystem::Metric);
        assert_eq!(value, None);
        assert!(scale.is_some());
    }

    #[test]
    fn test_removal_rate_metric() {
        // a_e = 0.02 mm, v_w = 18 m/min -> 0.02 * 18 * 1000 / 60 = 6.0
        let formula = Formula::SpecificRemovalRate {
            depth_of_cut: "doc".to_string(),
            work_speed: "feed".to_string(),
        };
        let (value, scale) = formula.evaluate(
            &inputs(&[("doc", 0.02), ("feed", 18.0)]),
            UnitSystem::Metric,
        );
        assert!((value.unwrap() - 6.0).abs() < 1e-9);
        let scale = scale.unwrap();
        assert_eq!(scale.optimal.min, 1.0);
        assert_eq!(scale.optimal.max, 10.0);
    }

    #[test]
    fn test_dress_overlap() {
        // b_d = 1.0 mm, n_s = 1800 rpm, v_d = 300 mm/min -> U_d = 6.0
        let formula = Formula::DressOverlap {
            dresser_width: "width".to_string(),
            wheel_speed: "rpm".to_string(),
            traverse_rate: "traverse".to_string(),
        };
        let (value, _) = formula.evaluate(
            &inputs(&[("width", 1.0), ("rpm", 1800.0), ("traverse", 300.0)]),
            UnitSystem::Metric,
        );
        assert!((value.unwrap() - 6.0).abs() < 1e-9);

        // Zero traverse would divide by zero; guarded to None
        let (value, _) = formula.evaluate(
            &inputs(&[("width", 1.0), ("rpm", 1800.0), ("traverse", 0.0)]),
            UnitSystem::Metric,
        );
        assert_eq!(value, None);
    }

    #[test]
    fn test_g_ratio_zero_wear_is_none() {
        let formula = Formula::GRatio {
            volume_removed: "removed".to_string(),
            wheel_wear: "wear".to_string(),
        };
        let (value, _) = formula.evaluate(
            &inputs(&[("removed", 1200.0), ("wear", 0.0)]),
            UnitSystem::Metric,
        );
        assert_eq!(value, None);

        let (value, _) = formula.evaluate(
            &inputs(&[("removed", 1200.0), ("wear", 30.0)]),
            UnitSystem::Metric,
        );
        assert!((value.unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_coolant_flow_units() {
        let formula = Formula::CoolantFlow {
            spindle_power: "power".to_string(),
        };
        let (metric, _) = formula.evaluate(&inputs(&[("power", 15.0)]), UnitSystem::Metric);
        assert_eq!(metric, Some(150.0));
        let (imperial, _) = formula.evaluate(&inputs(&[("power", 20.0)]), UnitSystem::Imperial);
        assert_eq!(imperial, Some(40.0));
    }

    #[test]
    fn test_serialization_is_tagged() {
        let formula = surface_speed();
        let json = serde_json::to_string(&formula).unwrap();
        assert!(json.contains("\"kind\":\"SurfaceSpeed\""));
        let roundtrip: Formula = serde_json::from_str(&json).unwrap();
        assert_eq!(formula, roundtrip);
    }
}
