//! # Calculator Catalog
//!
//! Declarative calculator definitions and the built-in registry.
//!
//! - [`definition`] - `CalculatorDefinition`, `InputField`, `CalculationResult`
//! - [`formula`] - the closed set of formula kinds
//! - [`registry`] - the validated built-in catalog

pub mod definition;
pub mod formula;
pub mod registry;

pub use definition::{CalculationResult, CalculatorDefinition, InputField};
pub use formula::Formula;
