//! Correct answers and the answer equivalence check.
//!
//! Submitted answers arrive as raw strings typed by a learner. Equivalence
//! is whitespace-trimmed and case-insensitive, with a fixed numeric
//! tolerance for decimal results. Integer answers must match exactly:
//! `"12.0"` matches `12`, `"12.005"` does not.

use serde::{Deserialize, Serialize};

/// Absolute tolerance applied when comparing a submission against a
/// [`Answer::Decimal`] result (or a decimal form of a fraction).
pub const DECIMAL_TOLERANCE: f64 = 0.01;

/// The correct answer to a generated problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Answer {
    /// An exact whole-number result.
    Integer(i64),
    /// A decimal result, compared within [`DECIMAL_TOLERANCE`].
    Decimal(f64),
    /// A fraction result in the normalized form the generator produced.
    Fraction {
        /// Numerator of the expected fraction.
        numerator: i64,
        /// Denominator of the expected fraction (always positive).
        denominator: i64,
    },
    /// A free-text result, compared case-insensitively.
    Text(String),
}

impl Answer {
    /// Check a raw submission against this answer.
    ///
    /// The submission is trimmed first; an empty submission never matches
    /// (the session layer rejects it before scoring anyway).
    pub fn matches(&self, raw: &str) -> bool {
        let submitted = raw.trim();
        if submitted.is_empty() {
            return false;
        }

        match self {
            Self::Integer(n) => match submitted.parse::<i64>() {
                Ok(v) => v == *n,
                // Accept "12.0" style input, but only when it is exactly integral.
                Err(_) => submitted
                    .parse::<f64>()
                    .is_ok_and(|v| v.fract() == 0.0 && v == *n as f64),
            },
            Self::Decimal(d) => submitted
                .parse::<f64>()
                .is_ok_and(|v| (v - d).abs() <= DECIMAL_TOLERANCE),
            Self::Fraction {
                numerator,
                denominator,
            } => {
                if let Some((n, d)) = parse_fraction(submitted) {
                    n == *numerator && d == *denominator
                } else {
                    let expected = *numerator as f64 / *denominator as f64;
                    submitted
                        .parse::<f64>()
                        .is_ok_and(|v| (v - expected).abs() <= DECIMAL_TOLERANCE)
                }
            }
            Self::Text(t) => submitted.eq_ignore_ascii_case(t.trim()),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Parse a `"a/b"` fraction string. Whitespace around the slash is allowed.
fn parse_fraction(s: &str) -> Option<(i64, i64)> {
    let (num, den) = s.split_once('/')?;
    let num = num.trim().parse::<i64>().ok()?;
    let den = den.trim().parse::<i64>().ok()?;
    if den == 0 {
        return None;
    }
    Some((num, den))
}
