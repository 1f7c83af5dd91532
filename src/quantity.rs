//! # Quantity Module
//!
//! Recipe lines carry a quantity that is either a number, free text such as
//! "a pinch", or nothing at all. This module decides which of those a raw
//! quantity is and formats summed totals for display.
//!
//! Free text that reads as a plain decimal number ("2", " 1.5 ", "2e1") counts
//! as numeric. Fractions such as "1/2" are text: quantities are never parsed
//! as natural language.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal literal accepted as a numeric quantity once surrounding whitespace is trimmed
pub const NUMERIC_QUANTITY_PATTERN: &str = r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$";

/// Decimal places kept when a total is not a whole number
pub const FRACTION_DIGITS: usize = 2;

lazy_static! {
    static ref NUMERIC_QUANTITY_REGEX: Regex = Regex::new(NUMERIC_QUANTITY_PATTERN)
        .expect("Numeric quantity pattern should be valid");
}

/// Raw quantity as stored on a recipe line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Stored as a number
    Number(f64),
    /// Stored as text, which may still hold a number
    Text(String),
}

/// How a quantity contributes to a consolidated item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityValue<'a> {
    /// A finite number to add to the running total
    Numeric(f64),
    /// Verbatim text kept alongside the total
    Text(&'a str),
    /// Nothing to record
    Empty,
}

impl Quantity {
    /// Create a numeric quantity
    pub fn number(value: f64) -> Self {
        Quantity::Number(value)
    }

    /// Create a text quantity
    pub fn text(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }

    /// Classify this quantity for accumulation
    pub fn value(&self) -> QuantityValue<'_> {
        match self {
            Quantity::Number(n) if n.is_finite() => QuantityValue::Numeric(*n),
            Quantity::Number(_) => QuantityValue::Empty,
            Quantity::Text(raw) => classify_text(raw),
        }
    }

    /// Whether this quantity carries no information
    pub fn is_empty(&self) -> bool {
        matches!(self.value(), QuantityValue::Empty)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", format_number(*n)),
            Quantity::Text(raw) => write!(f, "{raw}"),
        }
    }
}

fn classify_text(raw: &str) -> QuantityValue<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return QuantityValue::Empty;
    }
    if let Some(value) = parse_numeric(trimmed) {
        return QuantityValue::Numeric(value);
    }
    trace!("Quantity '{}' kept as text", raw);
    QuantityValue::Text(raw)
}

/// Parse text as a finite decimal number
///
/// Returns `None` for anything that is not a plain decimal literal, including
/// values that overflow to infinity.
///
/// # Examples
///
/// ```rust
/// use meal_planner::quantity::parse_numeric;
///
/// assert_eq!(parse_numeric("250"), Some(250.0));
/// assert_eq!(parse_numeric(" 0.5 "), Some(0.5));
/// assert_eq!(parse_numeric("a pinch"), None);
/// assert_eq!(parse_numeric("1/2"), None);
/// ```
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !NUMERIC_QUANTITY_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a total for display
///
/// Whole numbers print without a decimal point; anything else is rounded to
/// two decimal places, ties away from zero, with trailing zeros removed.
///
/// # Examples
///
/// ```rust
/// use meal_planner::quantity::format_number;
///
/// assert_eq!(format_number(500.0), "500");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.33");
/// assert_eq!(format_number(0.125), "0.13");
/// ```
pub fn format_number(value: f64) -> String {
    let scale = 10f64.powi(FRACTION_DIGITS as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let fixed = format!("{rounded:.prec$}", prec = FRACTION_DIGITS);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
