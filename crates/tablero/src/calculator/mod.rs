//! Keypad calculator engine: chained arithmetic over a textual input register.
//!
//! The engine consumes discrete [`CalcInput`] events and never renders;
//! front-ends read [`Calculator::display`], [`Calculator::expression`] and
//! the [`Tape`] and draw whatever they like.

mod engine;
mod tape;

pub use engine::Calculator;
pub use tape::{CalculationRecord, Tape};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reportable calculator conditions. Both abort the attempted computation
/// and leave the prior operand on the display; neither is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Result overflowed the f64 range (or was otherwise non-finite)
    #[error("result is out of range")]
    Overflow,
}

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero and non-finite results are reported, never returned
    /// as `inf`/`NaN` values.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One keypad press, the engine's entire input vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcInput {
    /// A digit key, 0 through 9
    Digit(u8),
    /// An operator key
    Operator(Operator),
    /// The decimal point key
    Decimal,
    /// The equals key
    Equals,
    /// Soft clear: wipes the input register, keeps operand/operator/tape
    Clear,
    /// Hard reset: wipes everything including the tape
    Reset,
    /// Drop the last character of the input register
    Backspace,
}

/// Formats a numeric result for display.
///
/// Integral values (below `1e15` in magnitude) render with no fraction;
/// everything else is fixed to 10 decimal digits with trailing zeros, then a
/// trailing point, trimmed away. Negative zero normalizes to `"0"`.
#[must_use]
pub fn format_value(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.10}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
