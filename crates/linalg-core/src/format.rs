// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Format
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Text rendering of matrices in `%W.Pg` style, following the
//! `java.util.Formatter` general conversion.
//!
//! Entries within tolerance of zero render as `0`. Elements are
//! separated by a single space and rows by a newline.

use std::fmt;

use linalg_types::config::DisplayConfig;
use linalg_types::constants::{basically_zero, MAX_DISPLAY_WIDTH, MAX_SIGNIFICANT_DIGITS};
use linalg_types::error::MatrixResult;

use crate::matrix::Matrix;

/// Decimal digits of `|value|` rounded half-up to `precision` places,
/// with the decimal exponent of the leading digit.
///
/// Rounding starts from the shortest representation that round-trips,
/// so `0.125` and `2.675` round up the way they read.
fn round_half_up(value: f64, precision: usize) -> (Vec<u8>, i32) {
    let shortest = format!("{:e}", value.abs());
    let (mantissa, exp) = match shortest.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (shortest.as_str(), 0),
    };
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    if digits.len() <= precision {
        digits.resize(precision, 0);
        return (digits, exp);
    }

    let round_up = digits[precision] >= 5;
    digits.truncate(precision);
    if !round_up {
        return (digits, exp);
    }
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return (digits, exp);
        }
    }
    // carried out of the leading digit: 9.9 -> 10
    digits.insert(0, 1);
    digits.truncate(precision);
    (digits, exp + 1)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| char::from(b'0' + d)));
}

/// Format `value` like `%.Pg` in `java.util.Formatter`: `P` significant
/// digits kept in full, decimal notation when the rounded magnitude lies
/// in `[1e-4, 10^P)`, scientific notation otherwise. Exact zero renders
/// as `0`.
pub fn format_general(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    let (digits, exp) = round_half_up(value, precision);
    let mut out = String::with_capacity(precision + 8);
    if value < 0.0 {
        out.push('-');
    }

    // precision <= 17, so the cast cannot wrap
    if exp < -4 || exp >= precision as i32 {
        push_digits(&mut out, &digits[..1]);
        if precision > 1 {
            out.push('.');
            push_digits(&mut out, &digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("e{}{:02}", sign, exp.abs()));
    } else if exp >= 0 {
        let int_len = exp as usize + 1;
        push_digits(&mut out, &digits[..int_len]);
        if int_len < precision {
            out.push('.');
            push_digits(&mut out, &digits[int_len..]);
        }
    } else {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        push_digits(&mut out, &digits);
    }
    out
}

/// Snap to zero within tolerance, format and right-align.
pub fn format_entry_with(value: f64, config: &DisplayConfig) -> String {
    let value = if basically_zero(value) { 0.0 } else { value };
    let text = format_general(value, config.significant_digits);
    format!("{:>width$}", text, width = config.width.min(MAX_DISPLAY_WIDTH))
}

impl Matrix {
    /// `%8.2g` rendering of a single entry.
    pub fn format_entry(&self, row: usize, col: usize) -> MatrixResult<String> {
        let value = self.get(row, col)?;
        Ok(format_entry_with(value, &DisplayConfig::default()))
    }

    pub fn render(&self, config: &DisplayConfig) -> String {
        self.as_array()
            .outer_iter()
            .map(|row| {
                row.iter()
                    .map(|&v| format_entry_with(v, config))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayConfig::default()))
    }
}
