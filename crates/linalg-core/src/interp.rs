// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Interp
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Polynomial interpolation through sample points.
//!
//! Builds the augmented Vandermonde system `[1, x, x^2, ..., x^(n-1) | y]`,
//! row-reduces it and reads the coefficients from the last column.

use std::fmt;

use linalg_types::config::InterpolationConfig;
use linalg_types::constants::basically_zero;
use linalg_types::error::{MatrixError, MatrixResult};
use tracing::debug;

use crate::matrix::Matrix;

/// Polynomial with coefficients in ascending degree order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Highest power with a coefficient that is not basically zero.
    /// The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|&c| !basically_zero(c))
            .unwrap_or(0)
    }

    /// Horner's rule.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_any = false;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if basically_zero(c) {
                continue;
            }
            let magnitude = c.abs();
            if wrote_any {
                f.write_str(if c < 0.0 { " - " } else { " + " })?;
            } else if c < 0.0 {
                f.write_str("-")?;
            }
            let unit = (magnitude - 1.0).abs() < 1e-12;
            if power == 0 || !unit {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
            wrote_any = true;
        }
        if !wrote_any {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Interpolating polynomial of degree `points.len() - 1`.
///
/// Fails with [`MatrixError::NotInvertible`] when two points share an `x`
/// (the Vandermonde system is singular), and with
/// [`MatrixError::InvalidShape`] for an empty point set.
pub fn interpolate(points: &[(f64, f64)]) -> MatrixResult<Polynomial> {
    let n = points.len();
    let mut system = Matrix::zeros(n, n + 1)?;
    for (i, &(x, y)) in points.iter().enumerate() {
        let mut term = 1.0;
        for j in 0..n {
            system.set(i, j, term)?;
            term *= x;
        }
        system.set(i, n, y)?;
    }

    let reduced = system.row_reduce();
    if !reduced.leading_block_is_identity(n) {
        debug!(points = n, "vandermonde system is singular");
        return Err(MatrixError::NotInvertible);
    }
    Ok(Polynomial::new(reduced.column(n)?))
}

pub fn interpolate_config(config: &InterpolationConfig) -> MatrixResult<Polynomial> {
    config.validate()?;
    interpolate(&config.point_pairs())
}
