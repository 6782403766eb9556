//! Editor configuration snapshot consumed by the layout generator.
//!
//! The layout builders are pure functions of (form input, config snapshot,
//! id source); everything the editor keeps as preferences — code digit
//! widths, lattice dimensions, display formatting — is passed in through
//! [`LayoutConfig`] rather than read from shared state.

use crate::error::{CodeError, Result};
use crate::lattice::Lattice;
use serde::{Deserialize, Serialize};

/// Widest supported digit width for table ids and branch numbers.
pub const MAX_CODE_DIGITS: usize = 9;

/// How a location code is rendered for display on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// Every digit of table id and branch number.
    Full,
    /// Leading zeros trimmed from both parts.
    Compact,
    /// Per-project pattern with `{t}` (table id) and `{b}` (branch number)
    /// placeholders.
    Custom(String),
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::Full
    }
}

/// Snapshot of the editor preferences the layout generator depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Fixed digit width of table ids.
    pub table_id_len: usize,
    /// Fixed digit width of branch numbers.
    pub branch_num_len: usize,
    /// Pixel dimensions of one grid cell.
    pub lattice: Lattice,
    /// Location-code display rendering.
    pub display_format: DisplayFormat,
}

impl LayoutConfig {
    pub fn new(table_id_len: usize, branch_num_len: usize) -> Self {
        Self {
            table_id_len,
            branch_num_len,
            lattice: Lattice::default(),
            display_format: DisplayFormat::default(),
        }
    }

    /// Total digit width of a full location code string.
    pub fn code_len(&self) -> usize {
        self.table_id_len + self.branch_num_len
    }

    /// Rejects digit widths the code arithmetic cannot represent.
    pub fn validate(&self) -> Result<()> {
        for (field, len) in [
            ("table_id_len", self.table_id_len),
            ("branch_num_len", self.branch_num_len),
        ] {
            if len == 0 || len > MAX_CODE_DIGITS {
                return Err(CodeError::InvalidDigitWidth {
                    field: field.to_string(),
                    got: len,
                    max: MAX_CODE_DIGITS,
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.code_len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_width() {
        let config = LayoutConfig::new(0, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_width() {
        let config = LayoutConfig::new(2, MAX_CODE_DIGITS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_as_json() {
        let config = LayoutConfig {
            display_format: DisplayFormat::Custom("{t}-{b}".to_string()),
            ..LayoutConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
