// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Linalg Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense matrix engine: construction, row algebra, Gauss-Jordan
//! reduction, inversion and polynomial interpolation.

pub mod format;
pub mod interp;
pub mod matrix;
mod reduce;

pub use interp::{interpolate, Polynomial};
pub use matrix::Matrix;
