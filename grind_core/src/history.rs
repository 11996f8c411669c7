//! # Saved-Calculation History
//!
//! The `History` struct is the root container for a user's saved
//! calculations. Histories serialize to `.gcal` files as human-readable
//! JSON (see `file_io` for atomic saves and locking).
//!
//! ## Structure
//!
//! ```text
//! History
//! ├── meta: HistoryMetadata (version, owner, timestamps)
//! ├── settings: UserSettings (preferred unit system, theme)
//! └── entries: HashMap<Uuid, SavedCalculation>
//! ```
//!
//! A saved calculation is a snapshot: the calculator id, the parsed inputs,
//! the result as displayed, and the unit system it was computed under.
//! Results are never recomputed from a snapshot; they are records.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use grind_core::history::{History, SavedCalculation};
//! use grind_core::catalog::registry;
//! use grind_core::engine::evaluate;
//! use grind_core::units::UnitSystem;
//!
//! let mut history = History::new("jane@acme-abrasives.com");
//!
//! let def = registry::find("wheel-surface-speed").unwrap();
//! let inputs = HashMap::from([
//!     ("diameter".to_string(), 400.0),
//!     ("rpm".to_string(), 1910.0),
//! ]);
//! let result = evaluate(def, &inputs, UnitSystem::Metric);
//!
//! let id = history.add_entry(SavedCalculation::new(
//!     &def.id, "OD wheel check", inputs, result, UnitSystem::Metric,
//! ));
//! assert!(history.get_entry(&id).is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::definition::CalculationResult;
use crate::units::UnitSystem;

/// Current schema version for .gcal files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root history container, serialized to `.gcal` files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    /// File metadata (version, owner, timestamps)
    pub meta: HistoryMetadata,

    /// Per-user settings persisted with the history
    pub settings: UserSettings,

    /// Saved calculations, keyed by UUID for stable references
    pub entries: HashMap<Uuid, SavedCalculation>,
}

impl History {
    /// Create a new empty history for a user.
    pub fn new(owner: impl Into<String>) -> Self {
        let now = Utc::now();
        History {
            meta: HistoryMetadata {
                version: SCHEMA_VERSION.to_string(),
                owner: owner.into(),
                created: now,
                modified: now,
            },
            settings: UserSettings::default(),
            entries: HashMap::new(),
        }
    }

    /// Add a saved calculation. Returns the UUID assigned to it.
    pub fn add_entry(&mut self, entry: SavedCalculation) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.insert(id, entry);
        self.touch();
        id
    }

    /// Remove a saved calculation by UUID, returning it if present.
    pub fn remove_entry(&mut self, id: &Uuid) -> Option<SavedCalculation> {
        let entry = self.entries.remove(id);
        if entry.is_some() {
            self.touch();
        }
        entry
    }

    /// Get a saved calculation by UUID.
    pub fn get_entry(&self, id: &Uuid) -> Option<&SavedCalculation> {
        self.entries.get(id)
    }

    /// All entries for one calculator, newest first.
    pub fn entries_for(&self, calculator_id: &str) -> Vec<(&Uuid, &SavedCalculation)> {
        let mut matched: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, e)| e.calculator_id == calculator_id)
            .collect();
        matched.sort_by(|a, b| b.1.saved_at.cmp(&a.1.saved_at));
        matched
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for History {
    fn default() -> Self {
        History::new("")
    }
}

/// History file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Owning account (email)
    pub owner: String,

    /// When the history was created
    pub created: DateTime<Utc>,

    /// When the history was last modified
    pub modified: DateTime<Utc>,
}

/// Per-user settings carried alongside the history.
///
/// Explicit configuration passed down through the presentation layer; there
/// is no ambient/global settings state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Preferred unit system for new sessions
    pub unit_system: UnitSystem,

    /// Display theme
    pub theme: Theme,
}

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// One saved calculation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    /// Catalog id of the calculator used
    pub calculator_id: String,

    /// User label ("OD wheel check", "Job 4411 dress pass")
    pub label: String,

    /// Parsed inputs at save time
    pub inputs: HashMap<String, f64>,

    /// The result as displayed at save time
    pub result: CalculationResult,

    /// Unit system the calculation was performed under
    pub unit_system: UnitSystem,

    /// When the snapshot was saved
    pub saved_at: DateTime<Utc>,
}

impl SavedCalculation {
    pub fn new(
        calculator_id: impl Into<String>,
        label: impl Into<String>,
        inputs: HashMap<String, f64>,
        result: CalculationResult,
        unit_system: UnitSystem,
    ) -> Self {
        SavedCalculation {
            calculator_id: calculator_id.into(),
            label: label.into(),
            inputs,
            result,
            unit_system,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry;
    use crate::engine::evaluate;

    fn sample_entry() -> SavedCalculation {
        let def = registry::find("wheel-surface-speed").unwrap();
        let inputs = HashMap::from([
            ("diameter".to_string(), 400.0),
            ("rpm".to_string(), 1910.0),
        ]);
        let result = evaluate(def, &inputs, UnitSystem::Metric);
        SavedCalculation::new(&def.id, "Test save", inputs, result, UnitSystem::Metric)
    }

    #[test]
    fn test_history_creation() {
        let history = History::new("jane@acme-abrasives.com");
        assert_eq!(history.meta.owner, "jane@acme-abrasives.com");
        assert_eq!(history.meta.version, SCHEMA_VERSION);
        assert_eq!(history.entry_count(), 0);
        assert_eq!(history.settings.unit_system, UnitSystem::Metric);
        assert_eq!(history.settings.theme, Theme::Light);
    }

    #[test]
    fn test_add_get_remove_entry() {
        let mut history = History::new("user@example.com");
        let id = history.add_entry(sample_entry());
        assert_eq!(history.entry_count(), 1);
        assert_eq!(history.get_entry(&id).unwrap().label, "Test save");

        let removed = history.remove_entry(&id);
        assert!(removed.is_some());
        assert_eq!(history.entry_count(), 0);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut history = History::new("user@example.com");
        let before = history.meta.modified;
        std::thread::sleep(std::time::Duration::from_millis(5));
        history.add_entry(sample_entry());
        assert!(history.meta.modified > before);
    }

    #[test]
    fn test_entries_for_filters_by_calculator() {
        let mut history = History::new("user@example.com");
        history.add_entry(sample_entry());
        history.add_entry(sample_entry());
        assert_eq!(history.entries_for("wheel-surface-speed").len(), 2);
        assert!(history.entries_for("g-ratio").is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut history = History::new("user@example.com");
        history.settings.theme = Theme::Dark;
        let id = history.add_entry(sample_entry());

        let json = serde_json::to_string_pretty(&history).unwrap();
        assert!(json.contains("wheel-surface-speed"));
        assert!(json.contains("\"theme\": \"dark\""));

        let roundtrip: History = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.get_entry(&id).unwrap(), history.get_entry(&id).unwrap());
    }

    #[test]
    fn test_snapshot_preserves_unit_system() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"unit_system\":\"metric\""));
    }
}
