//! # Unit System Model
//!
//! Every display string in a calculator definition comes in a metric/imperial
//! pair; the active [`UnitSystem`] selects which half is shown and which
//! conversion constants apply inside a formula.
//!
//! ## Design Philosophy
//!
//! We use plain string pairs rather than a full units library because:
//! - Each calculator's formula owns its unit math (the spec's Formula contract)
//! - We want JSON serialization to be clean (just strings and numbers)
//! - Minimal runtime overhead on the per-keystroke evaluation path
//!
//! ## Example
//!
//! ```rust
//! use grind_core::units::{UnitPair, UnitSystem};
//!
//! let unit = UnitPair::new("m/s", "SFPM");
//! assert_eq!(unit.for_system(UnitSystem::Metric), "m/s");
//! assert_eq!(unit.for_system(UnitSystem::Imperial), "SFPM");
//! ```

use serde::{Deserialize, Serialize};

/// Selects which half of every unit/placeholder pair is shown and which
/// conversion factors apply inside a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// The other system (used by the UI's unit toggle).
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

/// A metric/imperial pair of display strings.
///
/// Used for units ("mm" / "in") and for input placeholders ("e.g. 400" /
/// "e.g. 16"). Both halves must be non-empty for any unit attached to a
/// computable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPair {
    pub metric: String,
    pub imperial: String,
}

impl UnitPair {
    pub fn new(metric: impl Into<String>, imperial: impl Into<String>) -> Self {
        UnitPair {
            metric: metric.into(),
            imperial: imperial.into(),
        }
    }

    /// The half of the pair matching the active unit system.
    pub fn for_system(&self, system: UnitSystem) -> &str {
        match system {
            UnitSystem::Metric => &self.metric,
            UnitSystem::Imperial => &self.imperial,
        }
    }

    /// A dimensionless pair. Labeled "ratio" rather than left empty so a
    /// computed result always carries a displayable unit string.
    pub fn dimensionless() -> Self {
        UnitPair::new("ratio", "ratio")
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================
//
// Named constants used by formulas for unit-system-dependent math.

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters per meter
pub const MM_PER_METER: f64 = 1000.0;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Surface feet per minute per meter per second (196.85 SFPM = 1 m/s)
pub const SFPM_PER_MPS: f64 = 60.0 / 0.3048;

/// Divisor for wheel speed in m/s from diameter (mm) and spindle rpm:
/// v = pi * d * n / MM_RPM_TO_MPS
pub const MM_RPM_TO_MPS: f64 = MM_PER_METER * SECONDS_PER_MINUTE;

/// Coolant delivery guideline, metric: liters per minute per kW of
/// spindle power (conventional-abrasive creep/surface grinding)
pub const COOLANT_LPM_PER_KW: f64 = 10.0;

/// Coolant delivery guideline, imperial: gallons per minute per hp
pub const COOLANT_GPM_PER_HP: f64 = 2.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_system() {
        let unit = UnitPair::new("mm", "in");
        assert_eq!(unit.for_system(UnitSystem::Metric), "mm");
        assert_eq!(unit.for_system(UnitSystem::Imperial), "in");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Metric);
    }

    #[test]
    fn test_unit_system_serialization() {
        assert_eq!(serde_json::to_string(&UnitSystem::Metric).unwrap(), "\"metric\"");
        assert_eq!(
            serde_json::to_string(&UnitSystem::Imperial).unwrap(),
            "\"imperial\""
        );
        let roundtrip: UnitSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(roundtrip, UnitSystem::Imperial);
    }

    #[test]
    fn test_sfpm_per_mps() {
        // 1 m/s = 196.85 ft/min
        assert!((SFPM_PER_MPS - 196.85).abs() < 0.01);
    }

    #[test]
    fn test_wheel_speed_divisor() {
        // 400 mm wheel at 1910 rpm is about 40 m/s
        let v = std::f64::consts::PI * 400.0 * 1910.0 / MM_RPM_TO_MPS;
        assert!((v - 40.0).abs() < 0.1);
    }
}
