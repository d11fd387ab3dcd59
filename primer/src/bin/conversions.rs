use std::io;
use std::process::ExitCode;

use clap::Parser;
use primer::demo;

#[derive(Parser, Debug)]
#[clap(version, about = "Prints sums over explicitly converted numbers.", long_about = None)]
pub struct Cli {}

fn main() -> ExitCode {
  Cli::parse();

  if let Err(err) = demo::run(&mut io::stdout().lock()) {
    eprintln!("{err}");
    return ExitCode::FAILURE;
  }

  ExitCode::SUCCESS
}
