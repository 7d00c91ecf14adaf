//! The keypad state machine.
//!
//! State is four registers: the last committed operand, the textual input
//! register, the pending operator, and the reset-on-next-digit flag. Digits
//! edit the input register as text; `=` folds the pending operation into a
//! result and a tape record. Pressing an operator while a second number is
//! already typed folds first, so `3 + 4 + 5` evaluates left-to-right as
//! `(3 + 4) + 5`.

use super::{format_value, CalcError, CalcInput, CalcResult, Operator, Tape};

/// A keypad calculator.
///
/// The input register (`display`) always holds a parseable number or an
/// in-progress `"<digits>."` form; it is never empty. Rendering is left to
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    previous_value: f64,
    current_value: String,
    pending_operator: Option<Operator>,
    reset_on_next_digit: bool,
    expression: String,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous_value: 0.0,
            current_value: "0".to_string(),
            pending_operator: None,
            reset_on_next_digit: false,
            expression: String::new(),
            tape: Tape::new(),
        }
    }

    /// Dispatches one keypad press
    pub fn press(&mut self, input: CalcInput) -> CalcResult<()> {
        match input {
            CalcInput::Digit(digit) => self.input_digit(digit),
            CalcInput::Decimal => self.input_decimal(),
            CalcInput::Operator(op) => return self.input_operator(op),
            CalcInput::Equals => return self.equals(),
            CalcInput::Clear => self.clear(),
            CalcInput::Reset => self.reset(),
            CalcInput::Backspace => self.backspace(),
        }
        Ok(())
    }

    /// Enters a digit (0..=9; anything else is ignored)
    pub fn input_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.reset_on_next_digit || self.current_value == "0" {
            self.current_value = c.to_string();
            self.reset_on_next_digit = false;
        } else {
            self.current_value.push(c);
        }
    }

    /// Enters the decimal point; at most one per number
    pub fn input_decimal(&mut self) {
        if self.reset_on_next_digit {
            self.current_value = "0.".to_string();
            self.reset_on_next_digit = false;
        } else if !self.current_value.contains('.') {
            self.current_value.push('.');
        }
    }

    /// Selects an operator.
    ///
    /// If an operator is already pending and a second number has been typed,
    /// the pending computation folds first (left-to-right chaining); a fold
    /// failure is reported after the new operator is installed. Pressing two
    /// operators in a row silently replaces the pending one.
    pub fn input_operator(&mut self, op: Operator) -> CalcResult<()> {
        let folded = if self.pending_operator.is_some() && !self.reset_on_next_digit {
            self.equals()
        } else {
            Ok(())
        };
        self.previous_value = parse_or_zero(&self.current_value);
        self.pending_operator = Some(op);
        self.reset_on_next_digit = true;
        self.expression = format!("{} {}", format_value(self.previous_value), op.symbol());
        folded
    }

    /// Folds the pending operation into a result.
    ///
    /// No-op without a pending operator. On success the result becomes the
    /// display, the operator clears, and a record lands on the tape. On
    /// division by zero or overflow the prior operand returns to the display
    /// instead and the tape is left untouched.
    pub fn equals(&mut self) -> CalcResult<()> {
        let Some(op) = self.pending_operator else {
            return Ok(());
        };
        let second = parse_or_zero(&self.current_value);
        let outcome = op.apply(self.previous_value, second);
        match outcome {
            Ok(result) => {
                self.tape.record(op, self.previous_value, second, result);
                tracing::debug!(
                    op = op.symbol(),
                    first = self.previous_value,
                    second,
                    result,
                    "calculation recorded"
                );
                self.current_value = format_value(result);
            }
            Err(_) => {
                self.current_value = format_value(self.previous_value);
            }
        }
        self.pending_operator = None;
        self.reset_on_next_digit = true;
        self.expression = format!("= {}", self.current_value);
        outcome.map(|_| ())
    }

    /// Soft clear: wipes the input register only, keeping the committed
    /// operand, the pending operator and the tape
    pub fn clear(&mut self) {
        self.current_value = "0".to_string();
        self.reset_on_next_digit = true;
        self.expression.clear();
    }

    /// Hard reset: returns every register to its initial state and empties
    /// the tape. Idempotent.
    pub fn reset(&mut self) {
        self.previous_value = 0.0;
        self.current_value = "0".to_string();
        self.pending_operator = None;
        self.reset_on_next_digit = false;
        self.expression.clear();
        self.tape.clear();
        tracing::debug!("calculator reset");
    }

    /// Drops the last character of the input register, falling back to `"0"`
    /// when nothing displayable remains
    pub fn backspace(&mut self) {
        self.current_value.pop();
        if self.current_value.is_empty() || self.current_value == "-" {
            self.current_value = "0".to_string();
        }
    }

    /// The display text (the input register)
    #[must_use]
    pub fn display(&self) -> &str {
        &self.current_value
    }

    /// The expression line above the display, e.g. `"5 +"` or `"= 7"`
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The operator waiting for its second operand, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// The calculation tape
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}

/// Parses the input register, coalescing anything malformed (or `NaN`) to 0
fn parse_or_zero(text: &str) -> f64 {
    let value: f64 = text.parse().unwrap_or(0.0);
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(calc: &mut Calculator, inputs: &[CalcInput]) {
        for &input in inputs {
            let _ = calc.press(input);
        }
    }

    use CalcInput::{Backspace, Clear, Decimal, Digit, Equals, Reset};

    const ADD: CalcInput = CalcInput::Operator(Operator::Add);
    const SUB: CalcInput = CalcInput::Operator(Operator::Subtract);
    const MUL: CalcInput = CalcInput::Operator(Operator::Multiply);
    const DIV: CalcInput = CalcInput::Operator(Operator::Divide);

    // ===== Digit entry =====

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
        assert!(calc.tape().is_empty());
        assert!(calc.pending_operator().is_none());
    }

    #[test]
    fn test_digits_append() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), Digit(2), Digit(3)]);
        assert_eq!(calc.display(), "123");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(0), Digit(0), Digit(7)]);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_digit_above_nine_ignored() {
        let mut calc = Calculator::new();
        calc.input_digit(12);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_digit_replaces_display_after_equals() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Digit(4), Equals, Digit(5)]);
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_zero_appends_inside_number() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), Digit(0), Digit(0)]);
        assert_eq!(calc.display(), "100");
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_appends() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), Decimal, Digit(5)]);
        assert_eq!(calc.display(), "1.5");
    }

    #[test]
    fn test_second_decimal_ignored() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), Decimal, Decimal]);
        assert_eq!(calc.display(), "1.");
    }

    #[test]
    fn test_decimal_on_fresh_display() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Decimal]);
        assert_eq!(calc.display(), "0.");
    }

    #[test]
    fn test_decimal_starts_new_number_after_operator() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Decimal, Digit(5)]);
        assert_eq!(calc.display(), "0.5");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_sets_expression_keeps_display() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(5), ADD]);
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.expression(), "5 +");
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_operator_folds_pending_computation() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Digit(4), ADD]);
        assert_eq!(calc.display(), "7");
        assert_eq!(calc.expression(), "7 +");
        assert_eq!(calc.tape().len(), 1);
    }

    #[test]
    fn test_operator_twice_overwrites_silently() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(5), ADD, MUL]);
        assert_eq!(calc.expression(), "5 *");
        assert!(calc.tape().is_empty());

        feed(&mut calc, &[Digit(3), Equals]);
        assert_eq!(calc.display(), "15");
    }

    #[test]
    fn test_chained_expression_left_to_right() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Digit(4), ADD, Digit(5), Equals]);
        assert_eq!(calc.display(), "12");
        assert_eq!(calc.tape().len(), 2);
        assert_eq!(calc.tape().get(0).unwrap().result, 7.0);
        assert_eq!(calc.tape().get(1).unwrap().result, 12.0);
    }

    #[test]
    fn test_operator_parses_in_progress_decimal() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), Decimal, ADD]);
        assert_eq!(calc.expression(), "3 +");
    }

    // ===== Equals =====

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(7)]);
        assert!(calc.press(Equals).is_ok());
        assert_eq!(calc.display(), "7");
        assert!(calc.tape().is_empty());
    }

    #[test]
    fn test_equals_addition() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Digit(4), Equals]);
        assert_eq!(calc.display(), "7");
        assert_eq!(calc.expression(), "= 7");

        let record = calc.tape().last().unwrap();
        assert_eq!(record.operator, Operator::Add);
        assert_eq!(record.first, 3.0);
        assert_eq!(record.second, 4.0);
        assert_eq!(record.result, 7.0);
    }

    #[test]
    fn test_equals_division() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(8), DIV, Digit(2), Equals]);
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_equals_with_untyped_second_operand_repeats_display() {
        // `3 + =` folds with the display as both operands
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Equals]);
        assert_eq!(calc.display(), "6");
        let record = calc.tape().last().unwrap();
        assert_eq!(record.first, 3.0);
        assert_eq!(record.second, 3.0);
    }

    #[test]
    fn test_equals_twice_second_is_noop() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), ADD, Digit(4), Equals, Equals]);
        assert_eq!(calc.display(), "7");
        assert_eq!(calc.tape().len(), 1);
    }

    #[test]
    fn test_float_noise_is_formatted_away() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Decimal, Digit(1), ADD, Decimal, Digit(2), Equals]);
        assert_eq!(calc.display(), "0.3");
    }

    // ===== Division by zero =====

    #[test]
    fn test_divide_by_zero_reported() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(5), DIV, Digit(0)]);
        assert_eq!(calc.press(Equals), Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), "5");
        assert!(calc.tape().is_empty());
    }

    #[test]
    fn test_divide_by_zero_clears_pending() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(5), DIV, Digit(0), Equals]);
        assert!(calc.pending_operator().is_none());
        assert!(calc.press(Equals).is_ok());
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_divide_by_zero_during_fold_installs_new_operator() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(8), DIV, Digit(0)]);
        assert_eq!(calc.press(ADD), Err(CalcError::DivisionByZero));
        assert_eq!(calc.expression(), "8 +");

        feed(&mut calc, &[Digit(2), Equals]);
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.tape().len(), 1);
    }

    #[test]
    fn test_overflow_reported_and_aborts() {
        let mut calc = Calculator::new();
        for _ in 0..320 {
            calc.input_digit(9);
        }
        feed(&mut calc, &[MUL, Digit(9)]);
        assert_eq!(calc.press(Equals), Err(CalcError::Overflow));
        assert!(calc.tape().is_empty());
    }

    // ===== Clear and reset =====

    #[test]
    fn test_clear_wipes_display_only() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(5), ADD, Digit(3), Clear]);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.pending_operator(), Some(Operator::Add));

        feed(&mut calc, &[Digit(4), Equals]);
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn test_clear_preserves_tape() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), ADD, Digit(1), Equals, Clear]);
        assert_eq!(calc.tape().len(), 1);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_reset_wipes_everything() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(5), ADD, Digit(3), Equals, Reset]);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
        assert!(calc.pending_operator().is_none());
        assert!(calc.tape().is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(9), MUL, Digit(9), Equals, Reset]);
        let once = calc.clone();
        calc.reset();
        assert_eq!(calc, once);
    }

    #[test]
    fn test_reset_matches_fresh_calculator() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(4), SUB, Digit(2), Equals, Reset]);
        assert_eq!(calc, Calculator::new());
    }

    // ===== Backspace =====

    #[test]
    fn test_backspace_drops_last_character() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), Digit(2), Digit(3), Backspace]);
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_backspace_falls_back_to_zero() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(7), Backspace]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace_on_zero_stays_zero() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Backspace]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace_removes_decimal_point() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(3), Decimal, Backspace]);
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_backspace_never_strands_a_sign() {
        let mut calc = Calculator::new();
        feed(&mut calc, &[Digit(1), SUB, Digit(5), Equals, Backspace]);
        assert_eq!(calc.display(), "0");
    }

    // ===== parse_or_zero =====

    #[test]
    fn test_parse_or_zero_plain() {
        assert_eq!(parse_or_zero("42"), 42.0);
    }

    #[test]
    fn test_parse_or_zero_in_progress_decimal() {
        assert_eq!(parse_or_zero("3."), 3.0);
    }

    #[test]
    fn test_parse_or_zero_malformed() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("-"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
    }
}
