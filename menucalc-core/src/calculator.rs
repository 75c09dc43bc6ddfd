use crate::{
    calculator_error::CalculatorError,
    calculator_output::CalculatorOutput,
    input_parser::{parse_operand, parse_selection},
    operation::{MenuChoice, Operation},
};

/// The question the calculator is currently waiting on an answer to.
///
/// Any operands entered so far live here, so they're discarded as soon
/// as an iteration of the menu loop finishes.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Prompt {
    Selection,
    FirstOperand(Operation),
    SecondOperand(Operation, f64),
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum CalculatorState {
    Running(Prompt),
    Terminated,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::Running(Prompt::Selection)
    }
}

/// A menu-driven calculator session.
///
/// This doesn't do any I/O itself: callers ask it for the current
/// `prompt`, feed it lines via `provide_input`, and display whatever
/// `take_output` returns, until the state becomes `Terminated`.
#[derive(Debug)]
pub struct Calculator {
    output: Vec<CalculatorOutput>,
    state: CalculatorState,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator {
            output: vec![CalculatorOutput::Menu],
            state: CalculatorState::default(),
        }
    }
}

impl Calculator {
    pub fn take_output(&mut self) -> Vec<CalculatorOutput> {
        std::mem::take(&mut self.output)
    }

    pub fn get_state(&self) -> CalculatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != CalculatorState::Terminated
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            CalculatorState::Running(Prompt::Selection) => Some("Enter your choice (1-5): "),
            CalculatorState::Running(Prompt::FirstOperand(_)) => Some("Enter first number: "),
            CalculatorState::Running(Prompt::SecondOperand(..)) => Some("Enter second number: "),
            CalculatorState::Terminated => None,
        }
    }

    /// Answer the current prompt with the given line of input.
    ///
    /// Malformed input is never fatal: the calculator asks the user to
    /// re-enter it and keeps waiting on the same prompt.
    pub fn provide_input<T: AsRef<str>>(&mut self, input: T) {
        let CalculatorState::Running(prompt) = self.state else {
            panic!("Input provided to a terminated calculator");
        };
        let result = match prompt {
            Prompt::Selection => self.evaluate_selection(input.as_ref()),
            Prompt::FirstOperand(operation) => parse_operand(input.as_ref()).map(|first| {
                self.state = CalculatorState::Running(Prompt::SecondOperand(operation, first));
            }),
            Prompt::SecondOperand(operation, first) => parse_operand(input.as_ref())
                .map(|second| self.evaluate_operation(operation, first, second)),
        };
        if let Err(CalculatorError::InvalidSelection | CalculatorError::InvalidNumber) = result {
            self.output.push(CalculatorOutput::Reenter);
        }
    }

    /// Called when the input stream runs dry before the user chose to exit.
    pub fn end_of_input(&mut self) {
        self.state = CalculatorState::Terminated;
    }

    fn evaluate_selection(&mut self, input: &str) -> Result<(), CalculatorError> {
        match MenuChoice::from_selection(parse_selection(input)?) {
            MenuChoice::Arithmetic(operation) => {
                self.state = CalculatorState::Running(Prompt::FirstOperand(operation));
            }
            MenuChoice::Exit => {
                self.output.push(CalculatorOutput::Goodbye);
                self.state = CalculatorState::Terminated;
            }
            MenuChoice::Invalid(_) => {
                self.output.push(CalculatorOutput::InvalidChoice);
                self.return_to_menu();
            }
        }
        Ok(())
    }

    fn evaluate_operation(&mut self, operation: Operation, first: f64, second: f64) {
        match operation.apply(first, second) {
            Ok(value) => self.output.push(CalculatorOutput::Result(value)),
            Err(err) => self.output.push(CalculatorOutput::Error(err)),
        }
        self.return_to_menu();
    }

    fn return_to_menu(&mut self) {
        self.output.push(CalculatorOutput::Menu);
        self.state = CalculatorState::Running(Prompt::Selection);
    }
}
