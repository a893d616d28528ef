use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use std::fmt::Display;
use num::{BigInt, BigRational, Zero};
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

/// Lexes a whole in-memory source.
pub fn lex(src: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

    pub fn next_token(&mut self) -> LexResult {
		while matches!(self.ch, Some(ch) if ch.is_whitespace()) {
			self.next_char();
		}

		match self.ch {
			Some(ch) => match ch {
				';' => Ok(self.lex_comment()),
				'(' => Ok(self.eat_one_char(Token::LParen)),
				')' => Ok(self.eat_one_char(Token::RParen)),
				'\'' => Ok(self.eat_one_char(Token::Quote)),
				'"' => self.lex_string(),
				_ => self.lex_atom(),
			},
			None => Ok((self.position, Token::Eof, self.position)),
		}
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += self.next_ch.map_or(0, |ch| ch.len_utf8() as u32);

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_atom(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut text = String::new();

		while let Some(ch) = self.ch {
			if Token::is_delimiter(ch) {
				break;
			}

			text.push(ch);
			self.next_char();
		}

		let end_pos = self.position;
		let error = |error| LexicalError {
			error,
			location: SrcSpan::from(start_pos, end_pos)
		};

		let token = if text == "." {
			Token::Dot
		} else if let Some(rest) = text.strip_prefix('#') {
			match rest {
				"t" | "true" => Token::Boolean(true),
				"f" | "false" => Token::Boolean(false),
				_ => return Err(error(LexicalErrorType::UnknownHashLiteral)),
			}
		} else if looks_numeric(&text) {
			match parse_number(&text).map_err(error)? {
				Some(token) => token,
				None => Token::Symbol(text),
			}
		} else {
			Token::Symbol(text)
		};

		Ok((start_pos, token, end_pos))
	}

	fn lex_string(&mut self) -> LexResult {
		let start_pos = self.position;
		let unterminated = |end| LexicalError {
			error: LexicalErrorType::UnterminatedString,
			location: SrcSpan::from(start_pos, end)
		};

		self.next_char(); // skip opening quote

		let mut value = String::new();

		loop {
			let escape_pos = self.position;

			match self.next_char() {
				Some('"') => break,
				Some('\\') => match self.next_char() {
					Some('"') => value.push('"'),
					Some('\\') => value.push('\\'),
					Some('n') => value.push('\n'),
					Some('t') => value.push('\t'),
					Some(ch) => return Err(LexicalError {
						error: LexicalErrorType::UnknownEscape { ch },
						location: SrcSpan::from(escape_pos, self.position)
					}),
					None => return Err(unterminated(self.position)),
				},
				Some(ch) => value.push(ch),
				None => return Err(unterminated(self.position)),
			}
		}

		Ok((start_pos, Token::String(value), self.position))
	}

	fn lex_comment(&mut self) -> Spanned {
		let start_pos = self.position;

		while !matches!(self.ch, Some('\n') | None) {
			self.next_char();
		}

		(start_pos, Token::Comment, self.position)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();

		Some(token)
	}
}

/// A digit first, or a sign or period followed by a digit.
fn looks_numeric(text: &str) -> bool {
	let mut chars = text.chars();

	match chars.next() {
		Some(ch) if ch.is_ascii_digit() => true,
		Some('+' | '-') => match chars.next() {
			Some(ch) if ch.is_ascii_digit() => true,
			Some('.') => chars.next().is_some_and(|ch| ch.is_ascii_digit()),
			_ => false,
		},
		Some('.') => chars.next().is_some_and(|ch| ch.is_ascii_digit()),
		_ => false,
	}
}

fn parse_number(text: &str) -> Result<Option<Token>, LexicalErrorType> {
	let unsigned = text.strip_prefix('+').unwrap_or(text);

	if let Some((numer, denom)) = unsigned.split_once('/') {
		if !denom.starts_with(|ch: char| ch.is_ascii_digit()) {
			return Ok(None);
		}

		return match (numer.parse::<BigInt>(), denom.parse::<BigInt>()) {
			(Ok(_), Ok(denom)) if denom.is_zero() => Err(LexicalErrorType::ZeroDenominator),
			(Ok(numer), Ok(denom)) => Ok(Some(Token::Rational(BigRational::new(numer, denom)))),
			_ => Ok(None),
		};
	}

	if let Ok(value) = unsigned.parse::<BigInt>() {
		return Ok(Some(Token::Integer(value)));
	}

	Ok(unsigned.parse::<f64>().ok().map(Token::Float))
}
