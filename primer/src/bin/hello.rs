use std::io;
use std::process::ExitCode;

use clap::Parser;
use primer::greeter;

#[derive(Parser, Debug)]
#[clap(version, about = "Prints a greeting.", long_about = None)]
pub struct Cli {}

fn main() -> ExitCode {
  Cli::parse();

  if let Err(err) = greeter::greet(&mut io::stdout().lock()) {
    eprintln!("{err}");
    return ExitCode::FAILURE;
  }

  ExitCode::SUCCESS
}
