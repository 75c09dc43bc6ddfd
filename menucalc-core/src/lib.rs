mod calculator;
mod calculator_error;
mod calculator_output;
mod input_parser;
mod operation;

pub use calculator::{Calculator, CalculatorState, Prompt};
pub use calculator_error::CalculatorError;
pub use calculator_output::CalculatorOutput;
pub use input_parser::{parse_operand, parse_selection};
pub use operation::{MenuChoice, Operation};
