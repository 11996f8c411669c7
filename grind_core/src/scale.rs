//! # Scale Annotations and Gauge Geometry
//!
//! A [`ScaleAnnotation`] marks a result's absolute range and the "optimal"
//! sub-range a process engineer would aim for. It carries no behavior beyond
//! driving the UI gauge; [`gauge_position`] turns an annotated value into
//! normalized [0,1] geometry for that gauge.

use serde::{Deserialize, Serialize};

/// Absolute range and optimal sub-range for a calculation result.
///
/// Purely presentational: the engine never branches on it.
///
/// ## JSON Example
///
/// ```json
/// { "min": 0.0, "max": 100.0, "optimal": { "min": 40.0, "max": 60.0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleAnnotation {
    pub min: f64,
    pub max: f64,
    pub optimal: OptimalRange,
}

/// The "good" sub-range within a scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleAnnotation {
    pub fn new(min: f64, max: f64, optimal_min: f64, optimal_max: f64) -> Self {
        ScaleAnnotation {
            min,
            max,
            optimal: OptimalRange {
                min: optimal_min,
                max: optimal_max,
            },
        }
    }
}

/// Normalized gauge geometry derived from a [`ScaleAnnotation`] and a value.
///
/// All fields are clamped to [0,1]; `optimal_start <= optimal_end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugePosition {
    /// Position of the value within [min, max]
    pub position: f64,
    /// Start of the optimal band
    pub optimal_start: f64,
    /// End of the optimal band
    pub optimal_end: f64,
}

/// Compute the normalized gauge position for a value on a scale.
///
/// A degenerate scale (`max <= min`) collapses to position 0 with an empty
/// optimal band rather than dividing by zero.
///
/// # Example
///
/// ```rust
/// use grind_core::scale::{gauge_position, ScaleAnnotation};
///
/// let scale = ScaleAnnotation::new(0.0, 100.0, 40.0, 60.0);
/// let gauge = gauge_position(&scale, 70.0);
/// assert!((gauge.position - 0.70).abs() < 1e-12);
/// assert!((gauge.optimal_start - 0.40).abs() < 1e-12);
/// assert!((gauge.optimal_end - 0.60).abs() < 1e-12);
/// ```
pub fn gauge_position(scale: &ScaleAnnotation, value: f64) -> GaugePosition {
    let span = scale.max - scale.min;
    if !(span > 0.0) {
        return GaugePosition {
            position: 0.0,
            optimal_start: 0.0,
            optimal_end: 0.0,
        };
    }

    let normalize = |v: f64| ((v - scale.min) / span).clamp(0.0, 1.0);

    GaugePosition {
        position: normalize(value),
        optimal_start: normalize(scale.optimal.min),
        optimal_end: normalize(scale.optimal.max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_position_in_range() {
        let scale = ScaleAnnotation::new(0.0, 100.0, 40.0, 60.0);
        let gauge = gauge_position(&scale, 70.0);
        assert!((gauge.position - 0.70).abs() < 1e-12);
        assert!((gauge.optimal_start - 0.40).abs() < 1e-12);
        assert!((gauge.optimal_end - 0.60).abs() < 1e-12);
    }

    #[test]
    fn test_gauge_position_clamps_below() {
        let scale = ScaleAnnotation::new(10.0, 20.0, 12.0, 18.0);
        let gauge = gauge_position(&scale, 5.0);
        assert_eq!(gauge.position, 0.0);
    }

    #[test]
    fn test_gauge_position_clamps_above() {
        let scale = ScaleAnnotation::new(0.0, 50.0, 20.0, 35.0);
        let gauge = gauge_position(&scale, 500.0);
        assert_eq!(gauge.position, 1.0);
    }

    #[test]
    fn test_optimal_band_clamps() {
        // Optimal range spilling past the absolute range clamps at both ends
        let scale = ScaleAnnotation::new(0.0, 10.0, -5.0, 15.0);
        let gauge = gauge_position(&scale, 5.0);
        assert_eq!(gauge.optimal_start, 0.0);
        assert_eq!(gauge.optimal_end, 1.0);
    }

    #[test]
    fn test_degenerate_scale() {
        let scale = ScaleAnnotation::new(5.0, 5.0, 5.0, 5.0);
        let gauge = gauge_position(&scale, 5.0);
        assert_eq!(gauge.position, 0.0);
        assert_eq!(gauge.optimal_start, 0.0);
        assert_eq!(gauge.optimal_end, 0.0);
    }

    #[test]
    fn test_nonzero_scale_min() {
        let scale = ScaleAnnotation::new(100.0, 200.0, 120.0, 180.0);
        let gauge = gauge_position(&scale, 150.0);
        assert!((gauge.position - 0.5).abs() < 1e-12);
        assert!((gauge.optimal_start - 0.2).abs() < 1e-12);
        assert!((gauge.optimal_end - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let scale = ScaleAnnotation::new(0.0, 12.0, 3.0, 8.0);
        let json = serde_json::to_string(&scale).unwrap();
        let roundtrip: ScaleAnnotation = serde_json::from_str(&json).unwrap();
        assert_eq!(scale, roundtrip);
    }
}
