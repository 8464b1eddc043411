use std::process::ExitCode;

use clap::Parser;

use crate::cmd_convert::act_to_hex;
use crate::commands::Cli;

mod cmd_convert;
mod commands;

fn main() -> ExitCode {
	let cli = Cli::parse();

	match act_to_hex(&cli) {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
