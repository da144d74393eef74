// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISPLAY_WIDTH, DEFAULT_SIGNIFICANT_DIGITS, MAX_DISPLAY_WIDTH, MAX_SIGNIFICANT_DIGITS,
};
use crate::error::{MatrixError, MatrixResult};

/// Text rendering parameters for matrix entries.
/// The defaults reproduce the canonical `%8.2g` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Minimum field width; entries are right-aligned.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Significant digits of the general-float format (0 is treated as 1).
    #[serde(default = "default_significant_digits")]
    pub significant_digits: usize,
}

fn default_width() -> usize {
    DEFAULT_DISPLAY_WIDTH
}
fn default_significant_digits() -> usize {
    DEFAULT_SIGNIFICANT_DIGITS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: default_width(),
            significant_digits: default_significant_digits(),
        }
    }
}

impl DisplayConfig {
    pub fn from_file(path: &str) -> MatrixResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MatrixResult<()> {
        if self.significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(MatrixError::ConfigError(format!(
                "significant_digits {} exceeds {MAX_SIGNIFICANT_DIGITS}",
                self.significant_digits
            )));
        }
        if self.width > MAX_DISPLAY_WIDTH {
            return Err(MatrixError::ConfigError(format!(
                "width {} exceeds {MAX_DISPLAY_WIDTH}",
                self.width
            )));
        }
        Ok(())
    }
}

/// Sample points `(x, y)` through which a polynomial is interpolated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    pub points: Vec<[f64; 2]>,
}

impl InterpolationConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> MatrixResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MatrixResult<()> {
        if self.points.is_empty() {
            return Err(MatrixError::ConfigError(
                "interpolation needs at least one point".to_string(),
            ));
        }
        if let Some(i) = self
            .points
            .iter()
            .position(|[x, y]| !x.is_finite() || !y.is_finite())
        {
            return Err(MatrixError::ConfigError(format!(
                "point {i} has a non-finite coordinate"
            )));
        }
        Ok(())
    }

    /// Degree of the interpolating polynomial: one less than the point count.
    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn point_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&[x, y]| (x, y)).collect()
    }
}
