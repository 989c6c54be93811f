mod error;
mod evaluator;
mod parser;
mod scanner;
mod token;
mod trace;

pub use error::{CalcError, Diagnostic};
pub use evaluator::{apply, BinaryOp};
pub use parser::{parse, Parser, MAX_DEPTH};
pub use scanner::tokenize;
pub use token::{Token, TokenKind, TokenStream};
pub use trace::{EvaluationTrace, Step};

/// Scans and evaluates one line of input.
pub fn evaluate(input: &str) -> Result<i64, CalcError> {
    parse(tokenize(input))
}

/// Like [`evaluate`], recording every reduced operation in `trace`.
pub fn evaluate_traced(input: &str, trace: &mut EvaluationTrace) -> Result<i64, CalcError> {
    Parser::new(tokenize(input)).parse(trace)
}
