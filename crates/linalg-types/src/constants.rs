// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numerical tolerance shared by every floating-point comparison in the
//! workspace: matrix equality, pivot selection, display snapping and
//! the inversion identity check.

/// Absolute tolerance below which a value is treated as exactly zero.
pub const TOLERANCE: f64 = 1e-8;

/// Default field width of a rendered matrix entry (`%8.2g`).
pub const DEFAULT_DISPLAY_WIDTH: usize = 8;

/// Default number of significant digits of a rendered matrix entry (`%8.2g`).
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 2;

/// Upper bound on significant digits; an `f64` carries at most 17.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Upper bound on the rendered field width of a single entry.
pub const MAX_DISPLAY_WIDTH: usize = 64;

/// `true` if `value` is within [`TOLERANCE`] of zero.
#[inline]
pub fn basically_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// `true` if `a` and `b` differ by less than [`TOLERANCE`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    basically_zero(a - b)
}
