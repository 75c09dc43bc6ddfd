use crate::calculator_error::CalculatorError;

/// Parse a menu selection, ignoring any surrounding whitespace.
///
/// Only whole integers are accepted, so e.g. `1.5` is rejected rather than
/// being read as `1`. Integers too large to represent are clamped to the
/// nearest `i64`, which keeps them well off the menu.
pub fn parse_selection<T: AsRef<str>>(value: T) -> Result<i64, CalculatorError> {
    let value = value.as_ref().trim();
    if let Ok(selection) = value.parse::<i64>() {
        return Ok(selection);
    }
    let (is_negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CalculatorError::InvalidSelection);
    }
    Ok(if is_negative { i64::MIN } else { i64::MAX })
}

/// Parse an operand, ignoring any surrounding whitespace.
pub fn parse_operand<T: AsRef<str>>(value: T) -> Result<f64, CalculatorError> {
    value
        .as_ref()
        .trim()
        .parse::<f64>()
        .map_err(|_| CalculatorError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use crate::{
        calculator_error::CalculatorError,
        input_parser::{parse_operand, parse_selection},
    };

    #[test]
    fn it_parses_selections() {
        assert_eq!(parse_selection("1"), Ok(1));
        assert_eq!(parse_selection("  5 "), Ok(5));
        assert_eq!(parse_selection("-3"), Ok(-3));
        assert_eq!(parse_selection("+7"), Ok(7));
    }

    #[test]
    fn it_rejects_malformed_selections() {
        for value in ["", "   ", "abc", "1.5", "1 2", "-", "+", "--1", "1e3"] {
            assert_eq!(
                parse_selection(value),
                Err(CalculatorError::InvalidSelection),
                "parsing '{}'",
                value
            );
        }
    }

    #[test]
    fn it_clamps_huge_selections() {
        assert_eq!(parse_selection("99999999999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_selection(" +99999999999999999999 "), Ok(i64::MAX));
        assert_eq!(parse_selection("-99999999999999999999"), Ok(i64::MIN));
    }

    #[test]
    fn it_parses_operands() {
        assert_eq!(parse_operand("4"), Ok(4.0));
        assert_eq!(parse_operand(" -2.5\t"), Ok(-2.5));
        assert_eq!(parse_operand("1e3"), Ok(1000.0));
        assert_eq!(parse_operand(".5"), Ok(0.5));
    }

    #[test]
    fn it_rejects_malformed_operands() {
        for value in ["", "four", "4,5", "1..2", "$3"] {
            assert_eq!(
                parse_operand(value),
                Err(CalculatorError::InvalidNumber),
                "parsing '{}'",
                value
            );
        }
    }
}
