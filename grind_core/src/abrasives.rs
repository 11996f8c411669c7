//! # Abrasive and Bond Data
//!
//! Property lookups for grinding-wheel abrasives and bond systems. The
//! catalog's speed gauges are grounded in the bond speed ratings here.
//!
//! ## Example
//!
//! ```rust
//! use grind_core::abrasives::{AbrasiveType, WheelBond};
//!
//! let bond = WheelBond::Vitrified;
//! assert_eq!(bond.max_peripheral_speed_mps(), 35.0);
//!
//! let abrasive = AbrasiveType::Cbn;
//! assert!(abrasive.is_superabrasive());
//! ```

use serde::{Deserialize, Serialize};

/// Abrasive grain families used in grinding wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbrasiveType {
    /// Fused aluminum oxide (general-purpose steels)
    AluminumOxide,
    /// Silicon carbide (cast iron, carbide, non-ferrous)
    SiliconCarbide,
    /// Cubic boron nitride (hardened steels)
    Cbn,
    /// Diamond (carbide, ceramics, glass)
    Diamond,
}

impl AbrasiveType {
    /// Marking-system letter (ANSI B74.13)
    pub fn marking(&self) -> &'static str {
        match self {
            AbrasiveType::AluminumOxide => "A",
            AbrasiveType::SiliconCarbide => "C",
            AbrasiveType::Cbn => "B",
            AbrasiveType::Diamond => "D",
        }
    }

    /// CBN and diamond run at higher speeds and are dressed differently
    pub fn is_superabrasive(&self) -> bool {
        matches!(self, AbrasiveType::Cbn | AbrasiveType::Diamond)
    }

    /// Typical operating surface-speed band in m/s (lower, upper).
    ///
    /// Conventional abrasives run 20-35 m/s in general-purpose work;
    /// superabrasives are productive from 30 m/s up to bond limits.
    pub fn operating_band_mps(&self) -> (f64, f64) {
        match self {
            AbrasiveType::AluminumOxide | AbrasiveType::SiliconCarbide => (20.0, 35.0),
            AbrasiveType::Cbn => (30.0, 80.0),
            AbrasiveType::Diamond => (15.0, 35.0),
        }
    }
}

/// Bond systems holding the abrasive grain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelBond {
    Vitrified,
    Resinoid,
    Rubber,
    Metal,
}

impl WheelBond {
    /// Maximum rated peripheral speed in m/s for standard (non-reinforced)
    /// wheels of this bond, per common wheel-marking limits.
    pub fn max_peripheral_speed_mps(&self) -> f64 {
        match self {
            WheelBond::Vitrified => 35.0,
            WheelBond::Resinoid => 48.0,
            WheelBond::Rubber => 35.0,
            WheelBond::Metal => 80.0,
        }
    }

    /// Same rating expressed in surface feet per minute.
    pub fn max_peripheral_speed_sfpm(&self) -> f64 {
        self.max_peripheral_speed_mps() * crate::units::SFPM_PER_MPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markings() {
        assert_eq!(AbrasiveType::AluminumOxide.marking(), "A");
        assert_eq!(AbrasiveType::Diamond.marking(), "D");
    }

    #[test]
    fn test_superabrasive_flag() {
        assert!(AbrasiveType::Cbn.is_superabrasive());
        assert!(!AbrasiveType::SiliconCarbide.is_superabrasive());
    }

    #[test]
    fn test_bond_speed_ratings() {
        // Vitrified 35 m/s is roughly the familiar 6500 SFPM limit
        let sfpm = WheelBond::Vitrified.max_peripheral_speed_sfpm();
        assert!((sfpm - 6889.76).abs() < 1.0);
        assert!(WheelBond::Metal.max_peripheral_speed_mps() > WheelBond::Resinoid.max_peripheral_speed_mps());
    }

    #[test]
    fn test_operating_bands_ordered() {
        for abrasive in [
            AbrasiveType::AluminumOxide,
            AbrasiveType::SiliconCarbide,
            AbrasiveType::Cbn,
            AbrasiveType::Diamond,
        ] {
            let (lo, hi) = abrasive.operating_band_mps();
            assert!(lo < hi);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AbrasiveType::Cbn).unwrap();
        assert_eq!(json, "\"Cbn\"");
        let bond: WheelBond = serde_json::from_str("\"Vitrified\"").unwrap();
        assert_eq!(bond, WheelBond::Vitrified);
    }
}
