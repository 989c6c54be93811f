use super::error::{CalcError, Diagnostic};
use super::evaluator;
use super::token::{Token, TokenKind, TokenStream};
use super::trace::EvaluationTrace;
use tracing::{debug, trace};

const ADDITIVE: [char; 2] = ['+', '-'];
const MULTIPLICATIVE: [char; 2] = ['*', '/'];

/// Deepest parenthesis nesting accepted; each level costs three stack frames.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser that evaluates while it reduces:
///
/// ```text
/// expr   = term   (("+" | "-") term)*
/// term   = factor (("*" | "/") factor)*
/// factor = INTEGER | "(" expr ")"
/// ```
///
/// A `Parser` is consumed by [`Parser::parse`].
pub struct Parser {
    tokens: TokenStream,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: TokenStream) -> Self {
        Parser {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self, trace: &mut EvaluationTrace) -> Result<i64, CalcError> {
        let result = self.expr(trace)?;

        // The completion check in `expr` only lets a `)` through at depth > 0,
        // which cannot happen at the top level.
        if self.peek().kind() != TokenKind::Eof {
            return Err(self.error());
        }

        match result {
            Token::Integer(value) => {
                debug!(value, "parsed expression");
                Ok(value)
            }
            _ => Err(CalcError::InvalidOperand),
        }
    }

    fn peek(&self) -> &Token {
        // `current` never moves past the trailing `Eof`.
        &self.tokens.tokens()[self.current]
    }

    fn error(&self) -> CalcError {
        CalcError::Syntax(Diagnostic::new(&self.tokens, self.current))
    }

    fn eat(&mut self, expected: TokenKind) -> Result<Token, CalcError> {
        let token = self.peek().clone();
        if token.kind() != expected {
            return Err(self.error());
        }

        trace!(index = self.current, token = %token, "eat");
        if token.kind() != TokenKind::Eof {
            self.current += 1;
        }
        Ok(token)
    }

    fn expr(&mut self, trace: &mut EvaluationTrace) -> Result<Token, CalcError> {
        let mut left = self.term(trace)?;

        while self.peek().is_op(&ADDITIVE) {
            let op = self.eat(TokenKind::Op)?;
            let right = self.term(trace)?;
            left = Self::reduce(&op, left, right, trace)?;
        }

        match self.peek().kind() {
            TokenKind::RParen if self.depth == 0 => Err(self.error()),
            TokenKind::RParen | TokenKind::Eof => Ok(left),
            _ => Err(self.error()),
        }
    }

    fn term(&mut self, trace: &mut EvaluationTrace) -> Result<Token, CalcError> {
        let mut left = self.factor(trace)?;

        while self.peek().is_op(&MULTIPLICATIVE) {
            let op = self.eat(TokenKind::Op)?;
            let right = self.factor(trace)?;
            left = Self::reduce(&op, left, right, trace)?;
        }

        Ok(left)
    }

    fn factor(&mut self, trace: &mut EvaluationTrace) -> Result<Token, CalcError> {
        match self.peek().clone() {
            Token::Integer(_) => self.eat(TokenKind::Integer),
            Token::LParen => {
                if self.depth == MAX_DEPTH {
                    return Err(CalcError::NestingTooDeep { limit: MAX_DEPTH });
                }
                self.eat(TokenKind::LParen)?;
                self.depth += 1;
                let inner = self.expr(trace)?;
                self.eat(TokenKind::RParen)?;
                self.depth -= 1;
                Ok(inner)
            }
            Token::Oversized(digits) => Err(CalcError::LiteralTooLarge(digits)),
            _ => Err(self.error()),
        }
    }

    fn reduce(
        op: &Token,
        left: Token,
        right: Token,
        trace: &mut EvaluationTrace,
    ) -> Result<Token, CalcError> {
        let result = evaluator::apply(op, &left, &right)?;
        if let Token::Integer(value) = result {
            trace.add_step(format!("{} {} {}", left, op, right), value);
        }
        Ok(result)
    }
}

/// Evaluates a whole token stream without recording steps.
pub fn parse(tokens: TokenStream) -> Result<i64, CalcError> {
    let mut trace = EvaluationTrace::new(false);
    Parser::new(tokens).parse(&mut trace)
}
