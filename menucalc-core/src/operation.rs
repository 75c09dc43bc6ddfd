use crate::calculator_error::CalculatorError;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn apply(&self, first: f64, second: f64) -> Result<f64, CalculatorError> {
        match self {
            Operation::Add => Ok(first + second),
            Operation::Subtract => Ok(first - second),
            Operation::Multiply => Ok(first * second),
            Operation::Divide => {
                // Note that this is also true for negative zero.
                if second == 0.0 {
                    Err(CalculatorError::DivisionByZero)
                } else {
                    Ok(first / second)
                }
            }
        }
    }
}

/// What the user asked for at the menu prompt.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum MenuChoice {
    Arithmetic(Operation),
    Exit,
    /// Any integer that isn't on the menu.
    Invalid(i64),
}

impl MenuChoice {
    pub fn from_selection(selection: i64) -> Self {
        match selection {
            1 => MenuChoice::Arithmetic(Operation::Add),
            2 => MenuChoice::Arithmetic(Operation::Subtract),
            3 => MenuChoice::Arithmetic(Operation::Multiply),
            4 => MenuChoice::Arithmetic(Operation::Divide),
            5 => MenuChoice::Exit,
            _ => MenuChoice::Invalid(selection),
        }
    }
}
