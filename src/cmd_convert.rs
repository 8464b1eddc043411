use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use humansize::DECIMAL;

use act2hex::palettes::palette::Palette;
use act2hex::palettes::{ACT_DATA_SIZE, ACT_TRAILER_SIZE};

use crate::commands::Cli;

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
	if cli.reads_stdin() {
		let mut buf = Vec::with_capacity(ACT_DATA_SIZE + ACT_TRAILER_SIZE);
		io::stdin().lock().read_to_end(&mut buf).context("Couldn't read standard input")?;
		return Ok(buf);
	}

	fs::read(&cli.input).with_context(|| format!("Couldn't read {}", cli.input.display()))
}

pub(crate) fn act_to_hex(cli: &Cli) -> Result<()> {
	let bytes = read_input(cli)?;

	if cli.debug {
		let size = humansize::format_size(bytes.len(), DECIMAL);
		eprintln!("Read {} bytes ({size}) from {}", bytes.len(), cli.input.display());

		match bytes.len() {
			n if n < ACT_DATA_SIZE => (),
			n if n == ACT_DATA_SIZE => eprintln!("No trailer present"),
			n if n == ACT_DATA_SIZE + ACT_TRAILER_SIZE => eprintln!("Ignoring {ACT_TRAILER_SIZE}-byte trailer"),
			n => eprintln!("{} ignoring {} bytes after the color table", "NOTE:".yellow(), n - ACT_DATA_SIZE),
		}
	}

	let mut pal = Palette::from_act_bytes(&bytes)?;
	drop(bytes);

	if let Some(limit) = cli.color_limit() {
		if cli.debug {
			eprintln!("Limiting output to {limit} of {} colors", pal.len());
		}
		pal.truncate(limit);
	}

	let output = if cli.json {
		let mut json = pal.to_json_string()?;
		json.push('\n');
		json
	} else {
		pal.to_hex_string()
	};

	let mut stdout = io::stdout().lock();
	stdout.write_all(output.as_bytes())?;
	stdout.flush()?;

	if cli.debug {
		eprintln!("Printed {} colors", pal.len());
	}

	Ok(())
}
