use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    Load(String),
    Syntax { line: usize, text: String },
    InvalidSymbol { line: usize, symbol: char },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Load(path) => write!(f, "cannot open grammar file '{}'", path),
            Error::Syntax { line, text } => write!(f, "syntax error on line {}: '{}'", line, text),
            Error::InvalidSymbol { line, symbol } => {
                write!(f, "invalid symbol '{}' on line {}", symbol, line)
            }
        }
    }
}
