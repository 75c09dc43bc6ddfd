use std::{error::Error, fmt::Display};

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum CalculatorError {
    DivisionByZero,
    /// The text entered at the menu prompt wasn't an integer.
    InvalidSelection,
    /// The text entered at an operand prompt wasn't a number.
    InvalidNumber,
}

impl Error for CalculatorError {}

impl Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorError::DivisionByZero => write!(f, "Error: Division by zero!"),
            CalculatorError::InvalidSelection => write!(f, "Invalid selection."),
            CalculatorError::InvalidNumber => write!(f, "Invalid number."),
        }
    }
}
