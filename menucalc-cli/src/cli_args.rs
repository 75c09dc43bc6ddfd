use clap::Parser;
use menucalc_core::Calculator;

/// A menu-driven calculator for adding, subtracting, multiplying and
/// dividing two numbers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {}

impl CliArgs {
    pub fn create_calculator(&self) -> Calculator {
        Calculator::default()
    }
}
