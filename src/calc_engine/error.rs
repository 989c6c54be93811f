use super::token::{Token, TokenStream};
use std::fmt;

/// Where a parse went wrong: the literal text of every token in the input,
/// plus the position of the one the parser could not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    tokens: Vec<String>,
    offending: usize,
    at_end: bool,
}

impl Diagnostic {
    pub fn new(stream: &TokenStream, offending: usize) -> Self {
        let offending = offending.min(stream.len() - 1);
        Diagnostic {
            tokens: stream.tokens().iter().map(Token::to_string).collect(),
            offending,
            at_end: offending == stream.len() - 1,
        }
    }

    pub fn offending_index(&self) -> usize {
        self.offending
    }

    pub fn offending_text(&self) -> &str {
        &self.tokens[self.offending]
    }

    /// True when the parser ran out of input, e.g. an unclosed `(`.
    pub fn is_end_of_input(&self) -> bool {
        self.at_end
    }

    /// Every token's text, space-separated, with the offending one in
    /// brackets. The end-of-input sentinel only shows up (as `[]`) when it is
    /// the offending token.
    pub fn render(&self) -> String {
        let last = self.tokens.len() - 1;
        self.tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != last || self.at_end)
            .map(|(i, text)| {
                if i == self.offending {
                    format!("[{}]", text)
                } else {
                    text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    Syntax(Diagnostic),
    InvalidOperand,
    UnknownOperator(char),
    DivisionByZero,
    Overflow { op: char, left: i64, right: i64 },
    LiteralTooLarge(String),
    /// More than `limit` parentheses open at once.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(diag) if diag.is_end_of_input() => write!(
                f,
                "Error parsing expression: unexpected end of input: {}",
                diag.render()
            ),
            Self::Syntax(diag) => write!(f, "Error parsing expression: {}", diag.render()),
            Self::InvalidOperand => f.write_str("Parsing error: invalid syntax"),
            Self::UnknownOperator(op) => write!(f, "Invalid operator: {}", op),
            Self::DivisionByZero => f.write_str("Division by zero"),
            Self::Overflow { op, left, right } => {
                write!(f, "Integer overflow: {} {} {}", left, op, right)
            }
            Self::LiteralTooLarge(digits) => write!(f, "Integer literal too large: {}", digits),
            Self::NestingTooDeep { limit } => {
                write!(f, "Error parsing expression: more than {} nested parentheses", limit)
            }
        }
    }
}

impl std::error::Error for CalcError {}
