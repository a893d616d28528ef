use crate::{
    expression::prelude::{Expression, Number},
    lexer::prelude::{LexResult, Lexer, Spanned, Token},
    utils::prelude::SrcSpan,
};
use super::error::{ParseError, ParseErrorType};

/// Every top-level form of one input, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub expressions: Vec<Expression>,
    pub spans: Vec<SrcSpan>,
    pub comments: Vec<SrcSpan>,
}

pub struct Parser<T: Iterator<Item = LexResult>> {
    pub current_token: Option<Spanned>,
    pub comments: Vec<SrcSpan>,

    tokens: T,
}

impl<T: Iterator<Item = LexResult>> Parser<T> {
    pub fn new(input: T) -> Self {
        Self {
            current_token: None,
            comments: vec![],

            tokens: input,
        }
    }

    pub fn parse(&mut self) -> Result<Parsed, ParseError> {
        let mut expressions = vec![];
        let mut spans = vec![];

        while let Some((span, expression)) = self.parse_next()? {
            expressions.push(expression);
            spans.push(span);
        }

        Ok(Parsed {
            expressions,
            spans,
            comments: std::mem::take(&mut self.comments),
        })
    }

    /// Reads one top-level form, `None` once the input is exhausted.
    pub fn parse_next(&mut self) -> Result<Option<(SrcSpan, Expression)>, ParseError> {
        if self.peek_token()? == &Token::Eof {
            return Ok(None);
        }

        self.parse_datum().map(Some)
    }

    pub fn next_token(&mut self) -> Result<Spanned, ParseError> {
        match self.current_token.take() {
            Some(token) => Ok(token),
            None => self.pull_token(),
        }
    }

    pub fn peek_token(&mut self) -> Result<&Token, ParseError> {
        let token = self.next_token()?;

        Ok(&self.current_token.insert(token).1)
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.next_token()? {
            (start, tok, end) if tok == token => Ok((start, end)),
            (start, Token::Eof, _) => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan::point(start)
            ),
            (start, tok, end) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: tok,
                    expected: vec![token.as_literal()],
                },
                SrcSpan { start, end }
            ),
        }
    }

    fn pull_token(&mut self) -> Result<Spanned, ParseError> {
        loop {
            match self.tokens.next() {
                Some(Ok((start, Token::Comment, end))) => {
                    self.comments.push(SrcSpan { start, end })
                },
                Some(Ok(token)) => return Ok(token),
                Some(Err(error)) => {
                    let span = error.location;

                    return parse_error(ParseErrorType::LexError { error }, span);
                },
                None => return Ok((0, Token::Eof, 0)),
            }
        }
    }

    fn parse_datum(&mut self) -> Result<(SrcSpan, Expression), ParseError> {
        let (start, token, end) = self.next_token()?;
        let span = SrcSpan { start, end };

        let expression = match token {
            Token::LParen => return self.parse_list(start),
            Token::Quote => {
                let (datum_span, datum) = self.parse_datum()?;

                return Ok((
                    span.merge(datum_span),
                    Expression::list(vec![Expression::symbol("quote"), datum])
                ));
            },
            Token::RParen => return parse_error(ParseErrorType::UnmatchedRParen, span),
            Token::Dot => return parse_error(ParseErrorType::UnexpectedDot, span),
            Token::Eof | Token::Comment => {
                return parse_error(ParseErrorType::UnexpectedEof, SrcSpan::point(start))
            },
            Token::String(value) => Expression::string(value),
            Token::Integer(value) => Expression::number(value),
            Token::Rational(value) => Expression::number(value),
            Token::Float(value) => Expression::number(Number::Inexact(value)),
            Token::Boolean(value) => Expression::boolean(value),
            Token::Symbol(name) => Expression::symbol(name),
        };

        Ok((span, expression))
    }

    fn parse_list(&mut self, start: u32) -> Result<(SrcSpan, Expression), ParseError> {
        let mut items = vec![];

        loop {
            match self.peek_token()? {
                Token::RParen => {
                    let (_, _, end) = self.next_token()?;

                    return Ok((SrcSpan { start, end }, Expression::list(items)));
                },
                Token::Dot => {
                    let (dot_start, _, dot_end) = self.next_token()?;

                    if items.is_empty() {
                        return parse_error(
                            ParseErrorType::UnexpectedDot,
                            SrcSpan { start: dot_start, end: dot_end }
                        );
                    }

                    let (_, tail) = self.parse_datum()?;
                    let (_, end) = self.expect_one(Token::RParen)?;

                    return Ok((SrcSpan { start, end }, Expression::improper_list(items, tail)));
                },
                Token::Eof => {
                    let (at, _, _) = self.next_token()?;

                    return parse_error(ParseErrorType::UnexpectedEof, SrcSpan::point(at));
                },
                _ => items.push(self.parse_datum()?.1),
            }
        }
    }
}

pub fn parse_program(src: &str) -> Result<Parsed, ParseError> {
    let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);
    let parsed = parser.parse()?;

    Ok(parsed)
}

pub fn parse_from_stream(stream: impl Iterator<Item = char>) -> Result<Parsed, ParseError> {
    let lexer = Lexer::new(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    );
    let mut parser = Parser::new(lexer);
    let parsed = parser.parse()?;

    Ok(parsed)
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
