use std::io::{self, stdin, stdout, BufRead, IsTerminal, Lines, StdinLock};

use crate::cli_args::CliArgs;
use crate::stdio_printer::StdioPrinter;
use colored::*;
use menucalc_core::{Calculator, CalculatorOutput};
use rustyline::{error::ReadlineError, DefaultEditor};

/// Where input lines come from.
///
/// rustyline doesn't display its prompt when stdin isn't a terminal, so
/// piped input is read directly and prompts are printed by us instead.
enum LineSource {
    Editor(DefaultEditor),
    Piped(Lines<StdinLock<'static>>),
}

/// Every failure to write session output ends the session with exit code 1.
fn report_write_error(err: io::Error) -> i32 {
    eprintln!("Error writing output: {}", err);
    1
}

enum LineInput {
    Line(String),
    Interrupted,
    Eof,
}

pub struct StdioCalculator {
    printer: StdioPrinter,
    calculator: Calculator,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator {
            printer: StdioPrinter::default(),
            calculator: args.create_calculator(),
        }
    }

    fn show_calculator_output(&mut self) -> io::Result<()> {
        for output in self.calculator.take_output() {
            let color = match &output {
                CalculatorOutput::Result(_) => Some(Color::Green),
                CalculatorOutput::Error(_) => Some(Color::Red),
                CalculatorOutput::InvalidChoice | CalculatorOutput::Reenter => Some(Color::Yellow),
                CalculatorOutput::Menu | CalculatorOutput::Goodbye => None,
            };
            let text = output.to_string();
            match color {
                // Keep the newline outside of the escape codes, so that the line
                // buffer never holds a dangling reset sequence.
                Some(color) => self
                    .printer
                    .print(format!("{}\n", text.trim_end_matches('\n').color(color)))?,
                None => self.printer.print(text)?,
            }
        }
        Ok(())
    }

    fn read_line(&mut self, source: &mut LineSource, prompt: &str) -> Result<LineInput, i32> {
        match source {
            LineSource::Editor(rl) => {
                let prompt = format!("{}{}", self.printer.pop_buffered_output(), prompt);
                match rl.readline(&prompt) {
                    Ok(line) => Ok(LineInput::Line(line)),
                    Err(ReadlineError::Interrupted) => Ok(LineInput::Interrupted),
                    Err(ReadlineError::Eof) => Ok(LineInput::Eof),
                    Err(err) => {
                        eprintln!("Error: {:?}", err);
                        Err(1)
                    }
                }
            }
            LineSource::Piped(lines) => {
                self.printer
                    .print_prompt(prompt)
                    .map_err(report_write_error)?;
                match lines.next() {
                    Some(Ok(line)) => Ok(LineInput::Line(line)),
                    Some(Err(err)) => {
                        eprintln!("Error reading input: {}", err);
                        Err(1)
                    }
                    None => Ok(LineInput::Eof),
                }
            }
        }
    }

    pub fn run(&mut self) -> i32 {
        if !stdout().is_terminal() {
            colored::control::set_override(false);
        }

        let mut source = if stdin().is_terminal() {
            let Ok(rl) = DefaultEditor::new() else {
                eprintln!("Initializing DefaultEditor failed!");
                return 1;
            };
            println!("Menu Calculator v{}.", env!("CARGO_PKG_VERSION"));
            println!("Press CTRL-C to exit.");
            LineSource::Editor(rl)
        } else {
            LineSource::Piped(stdin().lock().lines())
        };

        match self.run_impl(&mut source) {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self, source: &mut LineSource) -> Result<(), i32> {
        loop {
            self.show_calculator_output().map_err(report_write_error)?;

            let Some(prompt) = self.calculator.prompt() else {
                break;
            };

            match self.read_line(source, prompt)? {
                LineInput::Line(line) => self.calculator.provide_input(line),
                LineInput::Interrupted => {
                    self.printer
                        .eprintln("CTRL-C pressed, exiting.")
                        .map_err(report_write_error)?;
                    break;
                }
                LineInput::Eof => self.calculator.end_of_input(),
            }
        }

        Ok(())
    }
}
