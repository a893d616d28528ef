use std::io::Write;

use lisp_core::lexer::prelude::{lex, Token};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				for res in lex(&input) {
					match res {
						Ok((start, token, end)) => {
							println!("{start}..{end} {token:?}");

							if token == Token::Eof {
								break;
							}
						},
						Err(err) => {
							let (message, notes) = err.details();
							println!("[at {}] Lexical Error: {}", err.location, message);
							if !notes.is_empty() {
								println!("{}", notes.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}
}
