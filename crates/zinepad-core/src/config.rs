//! Editor configuration.

use crate::commands::DEFAULT_HISTORY_LIMIT;
use crate::snap::GRID_SIZE;
use crate::storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Tunables read once when an editor is created.
///
/// Every field has a default, so a partial (or empty) JSON object is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of undoable commands kept.
    pub history_limit: usize,
    /// Key the document is persisted under.
    pub storage_key: String,
    pub grid_size: f64,
    pub snap_to_grid: bool,
    pub show_grid: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            grid_size: GRID_SIZE,
            snap_to_grid: true,
            show_grid: true,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON configuration, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.storage_key, "zine-document");
        assert!((config.grid_size - 10.0).abs() < f64::EPSILON);
        assert!(config.snap_to_grid);
        assert!(config.show_grid);
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{"historyLimit": 5, "snapToGrid": false}"#;
        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.history_limit, 5);
        assert!(!config.snap_to_grid);
        assert_eq!(config.storage_key, "zine-document");
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }
}
