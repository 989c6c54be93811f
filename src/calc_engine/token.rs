use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(i64),
    Op(char),
    LParen,
    RParen,
    /// A digit run that does not fit in an `i64`.
    Oversized(String),
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Op,
    LParen,
    RParen,
    Oversized,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Op(_) => TokenKind::Op,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Oversized(_) => TokenKind::Oversized,
            Token::Eof => TokenKind::Eof,
        }
    }

    pub fn is_op(&self, symbols: &[char]) -> bool {
        matches!(self, Token::Op(c) if symbols.contains(c))
    }
}

/// Literal text of the token as it appeared in the input. `Eof` renders empty.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::Op(c) => write!(f, "{}", c),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Oversized(digits) => f.write_str(digits),
            Token::Eof => Ok(()),
        }
    }
}

/// Scanner output. The last token is always exactly one `Eof`, so the
/// parser can look at the current token without bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| *t != Token::Eof);
        tokens.push(Token::Eof);
        TokenStream { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens including the trailing `Eof`.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }

    pub fn to_source(&self) -> String {
        self.tokens
            .iter()
            .filter(|t| **t != Token::Eof)
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_always_ends_with_a_single_eof() {
        let stream = TokenStream::new(vec![Token::Integer(1), Token::Eof, Token::Op('+')]);
        assert_eq!(stream.tokens(), &[Token::Integer(1), Token::Op('+'), Token::Eof]);

        let empty = TokenStream::new(Vec::new());
        assert_eq!(empty.tokens(), &[Token::Eof]);
        assert!(empty.is_empty());
    }

    #[test]
    fn to_source_skips_the_sentinel() {
        let stream = TokenStream::new(vec![
            Token::LParen,
            Token::Integer(12),
            Token::Op('*'),
            Token::Integer(3),
            Token::RParen,
        ]);
        assert_eq!(stream.to_source(), "( 12 * 3 )");
    }

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Token::Op('%').kind(), TokenKind::Op);
        assert_eq!(Token::Oversized("99".into()).kind(), TokenKind::Oversized);
        assert!(Token::Op('*').is_op(&['*', '/']));
        assert!(!Token::Op('+').is_op(&['*', '/']));
        assert!(!Token::Integer(3).is_op(&['*']));
    }
}
