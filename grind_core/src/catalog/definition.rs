//! # Calculator Definitions
//!
//! A [`CalculatorDefinition`] is the declarative description of one
//! calculator: its display metadata, its ordered input fields, its
//! [`Formula`], and the unit pair of its result. Definitions are authored
//! centrally (see `catalog::registry`), validated once, and treated as an
//! immutable catalog for the session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::formula::Formula;
use crate::errors::{CalcError, CalcResult};
use crate::scale::ScaleAnnotation;
use crate::units::UnitPair;

/// One calculator: metadata, input schema, formula, result unit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "wheel-surface-speed",
///   "name": "Wheel Surface Speed",
///   "short_name": "Surface Speed",
///   "categories": ["speed", "wheel"],
///   "description": "Peripheral speed from wheel diameter and spindle rpm.",
///   "inputs": [ { "key": "diameter", "label": "Wheel diameter", "...": "..." } ],
///   "formula": { "kind": "SurfaceSpeed", "diameter": "diameter", "spindle_speed": "rpm" },
///   "result_unit": { "metric": "m/s", "imperial": "SFPM" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorDefinition {
    /// Stable identifier (kebab-case)
    pub id: String,

    /// Full display name
    pub name: String,

    /// Short name for list rows and tabs
    pub short_name: String,

    /// Category tags for filtering ("speed", "dressing", ...)
    pub categories: BTreeSet<String>,

    /// Free-text description shown on the calculator screen
    pub description: String,

    /// Ordered input fields; order is the on-screen order
    pub inputs: Vec<InputField>,

    /// The formula evaluated against these inputs
    pub formula: Formula,

    /// Unit pair of the result value
    pub result_unit: UnitPair,
}

impl CalculatorDefinition {
    /// Validate the definition invariants:
    /// - input keys are unique within the definition
    /// - every key the formula reads is a declared input
    pub fn validate(&self) -> CalcResult<()> {
        let mut seen = BTreeSet::new();
        for field in &self.inputs {
            if !seen.insert(field.key.as_str()) {
                return Err(CalcError::invalid_input(
                    "inputs",
                    field.key.clone(),
                    "Duplicate input key in calculator definition",
                ));
            }
        }

        for key in self.formula.input_keys() {
            if !seen.contains(key) {
                return Err(CalcError::undeclared_input_key(self.id.clone(), key));
            }
        }

        Ok(())
    }
}

/// One input field of a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Key referenced by the formula; unique within the definition
    pub key: String,

    /// Field label
    pub label: String,

    /// Tooltip/help text
    pub tooltip: String,

    /// Unit pair shown next to the field
    pub unit: UnitPair,

    /// Placeholder pair shown in the empty field
    pub placeholder: UnitPair,

    /// Lower bound hint for the UI stepper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound hint for the UI stepper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Stepper increment hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,

    /// Default value pre-filled on open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
}

impl InputField {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        tooltip: impl Into<String>,
        unit: UnitPair,
        placeholder: UnitPair,
    ) -> Self {
        InputField {
            key: key.into(),
            label: label.into(),
            tooltip: tooltip.into(),
            unit,
            placeholder,
            min: None,
            max: None,
            step: None,
            default: None,
        }
    }

    /// Attach numeric bounds (UI hints only; the engine never rejects input)
    pub fn with_bounds(mut self, min: f64, max: f64, step: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.step = Some(step);
        self
    }

    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }
}

/// Result of evaluating a calculator.
///
/// `value` is `None` exactly when the inputs were insufficient or the math
/// was invalid (the no-data sentinel and the division-by-zero guard both
/// land here) — it is never NaN or infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub value: Option<f64>,
    pub unit: UnitPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleAnnotation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition_with_keys(declared: &[&str], formula_key: &str) -> CalculatorDefinition {
        CalculatorDefinition {
            id: "test-calc".to_string(),
            name: "Test Calculator".to_string(),
            short_name: "Test".to_string(),
            categories: BTreeSet::from(["test".to_string()]),
            description: "Test".to_string(),
            inputs: declared
                .iter()
                .map(|key| {
                    InputField::new(
                        *key,
                        "Field",
                        "Tooltip",
                        UnitPair::new("mm", "in"),
                        UnitPair::new("0", "0"),
                    )
                })
                .collect(),
            formula: Formula::Circumference {
                diameter: formula_key.to_string(),
            },
            result_unit: UnitPair::new("mm", "in"),
        }
    }

    #[test]
    fn test_validate_accepts_declared_keys() {
        assert!(definition_with_keys(&["diameter"], "diameter").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_undeclared_formula_key() {
        let err = definition_with_keys(&["diameter"], "bore").validate().unwrap_err();
        assert_eq!(err.error_code(), "UNDECLARED_INPUT_KEY");
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let err = definition_with_keys(&["diameter", "diameter"], "diameter")
            .validate()
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_input_field_builder() {
        let field = InputField::new(
            "diameter",
            "Wheel diameter",
            "Outside diameter of the wheel",
            UnitPair::new("mm", "in"),
            UnitPair::new("e.g. 400", "e.g. 16"),
        )
        .with_bounds(1.0, 1200.0, 1.0)
        .with_default(400.0);

        assert_eq!(field.min, Some(1.0));
        assert_eq!(field.max, Some(1200.0));
        assert_eq!(field.default, Some(400.0));
    }

    #[test]
    fn test_definition_serialization_roundtrip() {
        let def = definition_with_keys(&["diameter"], "diameter");
        let json = serde_json::to_string_pretty(&def).unwrap();
        let roundtrip: CalculatorDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, roundtrip);
    }

    #[test]
    fn test_result_omits_absent_scale() {
        let result = CalculationResult {
            value: Some(1.0),
            unit: UnitPair::new("mm", "in"),
            scale: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("scale"));
    }
}
