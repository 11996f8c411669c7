//! # grind_core - Grinding Calculator Engine
//!
//! `grind_core` is the computational heart of GrindCalc, providing unit-aware
//! grinding-process calculators with a clean, JSON-first API. All inputs and
//! outputs serialize to JSON, so the same core backs the mobile app, the API
//! layer, and the CLI demo.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: evaluation is a pure function of its arguments, fast
//!   enough to run on every keystroke
//! - **Forgiving input**: malformed text sanitizes to zero; incomplete input
//!   degrades to a "no data" result, never an error
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types for everything that can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use grind_core::catalog::registry;
//! use grind_core::engine::{evaluate, parse_inputs};
//! use grind_core::units::UnitSystem;
//!
//! let def = registry::find("wheel-surface-speed").unwrap();
//!
//! let raw = HashMap::from([
//!     ("diameter".to_string(), "400".to_string()),
//!     ("rpm".to_string(), "1910".to_string()),
//! ]);
//! let inputs = parse_inputs(&raw, &def.inputs);
//! let result = evaluate(def, &inputs, UnitSystem::Metric);
//!
//! println!("{:.1} {}", result.value.unwrap(), result.unit.metric);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Calculator definitions, formulas, and the built-in registry
//! - [`engine`] - Input parsing and evaluation (the per-keystroke hot path)
//! - [`units`] - Unit system model and conversion constants
//! - [`scale`] - Optimal-range annotations and gauge geometry
//! - [`abrasives`] - Abrasive/bond property data behind the speed gauges
//! - [`history`] - Saved-calculation snapshots and user settings
//! - [`file_io`] - History persistence with atomic saves and locking
//! - [`access`] - Access requests, login lockout, guest caps
//! - [`errors`] - Structured error types

pub mod abrasives;
pub mod access;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod file_io;
pub mod history;
pub mod scale;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CalculationResult, CalculatorDefinition, Formula, InputField};
pub use engine::{evaluate, parse_inputs, InputMap};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_history, save_history, FileLock};
pub use history::{History, SavedCalculation, UserSettings};
pub use scale::{gauge_position, GaugePosition, ScaleAnnotation};
pub use units::{UnitPair, UnitSystem};
