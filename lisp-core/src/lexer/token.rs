use num::{BigInt, BigRational};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // (
    LParen,
    // )
    RParen,
    // 'datum
    Quote,
    // ( a . b )
    Dot,

    // "..." with escapes already resolved
    String(String),
    // [+|-]<digit>{<digit>}
    Integer(BigInt),
    // [+|-]<digits>/<digits>
    Rational(BigRational),
    // anything else that parses as a float and starts like a number
    Float(f64),
    // #t, #f, #true, #false
    Boolean(bool),
    Symbol(String),

    // ; until end of line
    Comment,

    Eof,
}

impl Token {
    pub fn is_delimiter(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '(' | ')' | '"' | ';' | '\'')
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Quote => "'".into(),
            Token::Dot => ".".into(),
            Token::String(value) => format!("{value:?}"),
            Token::Integer(value) => value.to_string(),
            Token::Rational(value) => value.to_string(),
            Token::Float(value) => format!("{value:?}"),
            Token::Boolean(true) => "#t".into(),
            Token::Boolean(false) => "#f".into(),
            Token::Symbol(name) => name.clone(),
            Token::Comment => ";".into(),
            Token::Eof => "end of input".into(),
        }
    }
}
