use std::{io::Write, path::PathBuf};

use lisp_core::{
    interpreter::{Config, Interpreter},
    parser::prelude::parse_program,
    utils::prelude::Error,
};
use tracing::debug;

use crate::cli::report_error;

const PROMPT: &str = "]=> ";
const CONTINUATION: &str = "... ";

/// Reads forms from stdin until `.exit` or end of input. A form may span
/// several lines; a failure is reported and the loop goes on.
pub fn start(config: Config) -> std::io::Result<()> {
	let stdin = std::io::stdin();
	let mut interpreter = Interpreter::with_config(config);
	let mut pending = String::new();

	loop {
		let mut input = String::from("");

		print!("{}", if pending.is_empty() { PROMPT } else { CONTINUATION });
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			println!();
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		if pending.is_empty() {
			match input.trim() {
				"" => continue,
				".exit" => return Ok(()),
				_ => {},
			}
		}

		pending.push_str(&input);
		pending.push('\n');

		let parsed = match parse_program(&pending) {
			Ok(parsed) => parsed,
			Err(error) if error.is_incomplete() => continue,
			Err(error) => {
				report_error(&Error::Parse {
					path: PathBuf::from("<repl>"),
					src: std::mem::take(&mut pending),
					error,
				});
				continue;
			}
		};

		pending.clear();

		for expression in &parsed.expressions {
			match interpreter.eval(expression) {
				Ok(value) => println!("{value}"),
				Err(error) => {
					report_error(&error.into());
					break;
				}
			}
		}

		if let Some(freed) = interpreter.collect_if_needed(&[]) {
			debug!(freed, "collected after top-level input");
		}
	}
}
