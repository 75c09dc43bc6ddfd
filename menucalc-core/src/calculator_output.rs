use std::fmt::Display;

use crate::calculator_error::CalculatorError;

const MENU: &'static str = "\n--- Calculator Menu ---\n\
                            1. Addition\n\
                            2. Subtraction\n\
                            3. Multiplication\n\
                            4. Division\n\
                            5. Exit\n";

#[derive(Debug, PartialEq, Clone)]
pub enum CalculatorOutput {
    Menu,
    Result(f64),
    /// An arithmetic error, e.g. division by zero.
    Error(CalculatorError),
    InvalidChoice,
    Goodbye,
    Reenter,
}

impl Display for CalculatorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorOutput::Menu => write!(f, "{}", MENU),
            CalculatorOutput::Result(value) => writeln!(f, "Result: {:.2}", value),
            CalculatorOutput::Error(err) => writeln!(f, "{}", err),
            CalculatorOutput::InvalidChoice => writeln!(f, "Invalid choice. Please try again."),
            CalculatorOutput::Goodbye => writeln!(f, "Exiting calculator. Goodbye!"),
            CalculatorOutput::Reenter => writeln!(f, "Invalid input. Please re-enter."),
        }
    }
}
