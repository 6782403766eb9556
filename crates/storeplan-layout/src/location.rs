//! Location codes: fixed-width table id + branch number.
//!
//! A full location code is the concatenation of a zero-padded table id and a
//! zero-padded branch number. Digit widths come from the editor
//! configuration; a code string that disagrees with them is rejected rather
//! than mis-sliced.

use serde::{Deserialize, Serialize};
use storeplan_core::config::MAX_CODE_DIGITS;
use storeplan_core::{CodeError, DisplayFormat, LayoutConfig, Result};

/// Structured location code of a sellable map position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationCode {
    /// Zero-padded table id.
    pub table_id: String,
    /// Zero-padded branch number.
    pub branch_num: String,
}

impl LocationCode {
    pub fn new(table_id: impl Into<String>, branch_num: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            branch_num: branch_num.into(),
        }
    }

    /// Code with the same table id and the given branch number, zero-padded
    /// (wrapping) to `branch_width` digits.
    pub fn with_branch(&self, branch: u64, branch_width: usize) -> LocationCode {
        LocationCode {
            table_id: self.table_id.clone(),
            branch_num: pad_wrapping(branch, branch_width),
        }
    }

    /// Full code string: table id immediately followed by branch number.
    pub fn full_code(&self) -> String {
        format!("{}{}", self.table_id, self.branch_num)
    }

    /// Renders this code per the configured display format.
    pub fn display(&self, format: &DisplayFormat) -> String {
        match format {
            DisplayFormat::Full => self.full_code(),
            DisplayFormat::Compact => {
                format!(
                    "{}-{}",
                    trim_leading_zeros(&self.table_id),
                    trim_leading_zeros(&self.branch_num)
                )
            }
            DisplayFormat::Custom(pattern) => pattern
                .replace("{t}", &self.table_id)
                .replace("{b}", &self.branch_num),
        }
    }
}

/// Splits a raw location-code string into its parts, validating it against
/// the configured digit widths.
pub fn split_location_num(raw: &str, config: &LayoutConfig) -> Result<LocationCode> {
    if raw.len() != config.code_len() {
        return Err(CodeError::LengthMismatch {
            code: raw.to_string(),
            expected: config.code_len(),
            table_id_len: config.table_id_len,
            branch_num_len: config.branch_num_len,
        }
        .into());
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeError::NonNumeric {
            code: raw.to_string(),
        }
        .into());
    }
    let (table_id, branch_num) = raw.split_at(config.table_id_len);
    Ok(LocationCode::new(table_id, branch_num))
}

/// Advances a table id by one, wrapping to zero past the widest value the
/// digit width can represent.
pub fn next_table_id(latest: &str, width: usize) -> Result<String> {
    if latest.len() != width {
        return Err(CodeError::LengthMismatch {
            code: latest.to_string(),
            expected: width,
            table_id_len: width,
            branch_num_len: 0,
        }
        .into());
    }
    let value: u64 = latest.parse().map_err(|_| CodeError::NonNumeric {
        code: latest.to_string(),
    })?;
    Ok(pad_wrapping(value + 1, width))
}

/// Zero-pads `value` to `width` digits, wrapping values that do not fit.
pub fn pad_wrapping(value: u64, width: usize) -> String {
    debug_assert!(
        (1..=MAX_CODE_DIGITS).contains(&width),
        "width must be between 1 and {MAX_CODE_DIGITS}, got {width}"
    );
    let modulus = 10u64.pow(width as u32);
    format!("{:0width$}", value % modulus, width = width)
}

fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}
