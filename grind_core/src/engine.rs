//! # Calculator Engine
//!
//! Stateless evaluation of a calculator definition against user input text.
//! Runs on every keystroke, so it is pure, synchronous, and allocation-light.
//!
//! Two operations:
//!
//! - [`parse_inputs`]: forgiving text-to-number normalization. Partial or
//!   garbage input never blocks computation; it degrades to zeros.
//! - [`evaluate`]: applies the definition's formula under the active unit
//!   system, honoring the all-zero "no data" sentinel.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use grind_core::catalog::registry;
//! use grind_core::engine::{evaluate, parse_inputs};
//! use grind_core::units::UnitSystem;
//!
//! let def = registry::find("wheel-surface-speed").unwrap();
//! let raw = HashMap::from([
//!     ("diameter".to_string(), "400".to_string()),
//!     ("rpm".to_string(), "1910".to_string()),
//! ]);
//! let inputs = parse_inputs(&raw, &def.inputs);
//! let result = evaluate(def, &inputs, UnitSystem::Metric);
//! assert!((result.value.unwrap() - 40.0).abs() < 0.1);
//! assert_eq!(result.unit.metric, "m/s");
//! ```

use std::collections::HashMap;

use crate::catalog::definition::{CalculationResult, CalculatorDefinition, InputField};
use crate::units::UnitSystem;

/// Parsed input values, keyed by `InputField.key`.
pub type InputMap = HashMap<String, f64>;

/// Normalize raw field text into a complete numeric map.
///
/// Each raw string is reduced to digits plus a single decimal point before
/// parsing; anything that still fails to parse, and any key absent from
/// `raw`, becomes 0. The returned map always has one entry per field —
/// this never fails.
pub fn parse_inputs(raw: &HashMap<String, String>, fields: &[InputField]) -> InputMap {
    fields
        .iter()
        .map(|field| {
            let value = raw
                .get(&field.key)
                .map(|text| sanitize_numeric(text))
                .unwrap_or(0.0);
            (field.key.clone(), value)
        })
        .collect()
}

/// Strip a raw string down to digits and the first decimal point, then
/// parse. Empty or unparseable text is 0.
pub fn sanitize_numeric(raw: &str) -> f64 {
    let mut seen_point = false;
    let cleaned: String = raw
        .chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_point {
                seen_point = true;
                true
            } else {
                false
            }
        })
        .collect();

    cleaned.parse().unwrap_or(0.0)
}

/// Evaluate a calculator against parsed inputs under a unit system.
///
/// The all-zero sentinel: when every supplied input is exactly 0, the
/// formula is invoked with an empty map — "nothing entered yet" — rather
/// than an all-zero map. The tie-break is deliberately *all* inputs zero,
/// never *any*: a single explicit zero among real values is legitimate data
/// and reaches the formula as such.
///
/// Never panics and never returns a non-finite value; insufficient or
/// invalid input surfaces as `value: None`.
pub fn evaluate(
    definition: &CalculatorDefinition,
    inputs: &InputMap,
    unit_system: UnitSystem,
) -> CalculationResult {
    let no_data = inputs.values().all(|v| *v == 0.0);

    let empty = InputMap::new();
    let effective = if no_data { &empty } else { inputs };

    let (value, scale) = definition.formula.evaluate(effective, unit_system);
    debug_assert!(value.map_or(true, f64::is_finite));

    CalculationResult {
        value,
        unit: definition.result_unit.clone(),
        scale,
    }
}
