use super::token::{Token, TokenStream};

/// Splits `input` into tokens. Never fails: characters the grammar has no
/// use for come out as `Token::Op` and are rejected later by the parser or
/// the evaluator.
pub fn tokenize(input: &str) -> TokenStream {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            '0'..='9' => {
                let mut digits = String::new();
                let mut value: Option<i64> = Some(0);

                while let Some(&ch) = chars.peek() {
                    let Some(d) = ch.to_digit(10) else {
                        break;
                    };
                    digits.push(ch);
                    value = value
                        .and_then(|v| v.checked_mul(10))
                        .and_then(|v| v.checked_add(i64::from(d)));
                    chars.next();
                }

                tokens.push(match value {
                    Some(n) => Token::Integer(n),
                    None => Token::Oversized(digits),
                });
            }
            _ => {
                tokens.push(Token::Op(c));
                chars.next();
            }
        }
    }

    TokenStream::new(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc_engine::token::TokenKind;

    #[test]
    fn scans_numbers_operators_and_parens() {
        let stream = tokenize("(12 + 3)*40");
        assert_eq!(
            stream.tokens(),
            &[
                Token::LParen,
                Token::Integer(12),
                Token::Op('+'),
                Token::Integer(3),
                Token::RParen,
                Token::Op('*'),
                Token::Integer(40),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_only_eof() {
        assert_eq!(tokenize("").tokens(), &[Token::Eof]);
        assert_eq!(tokenize(" \t\n ").tokens(), &[Token::Eof]);
    }

    #[test]
    fn minus_is_never_part_of_a_literal() {
        assert_eq!(
            tokenize("-5").tokens(),
            &[Token::Op('-'), Token::Integer(5), Token::Eof]
        );
    }

    #[test]
    fn unknown_characters_become_operators() {
        assert_eq!(
            tokenize("2 % x").tokens(),
            &[Token::Integer(2), Token::Op('%'), Token::Op('x'), Token::Eof]
        );
    }

    #[test]
    fn digit_runs_are_maximal() {
        assert_eq!(
            tokenize("007 12").tokens(),
            &[Token::Integer(7), Token::Integer(12), Token::Eof]
        );
    }

    #[test]
    fn literal_past_i64_is_oversized() {
        let stream = tokenize("9223372036854775808 + 1");
        assert_eq!(
            stream.get(0),
            Some(&Token::Oversized("9223372036854775808".to_string()))
        );

        let max = tokenize("9223372036854775807");
        assert_eq!(max.get(0), Some(&Token::Integer(i64::MAX)));
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        let stream = tokenize("٣");
        assert_eq!(stream.get(0).map(Token::kind), Some(TokenKind::Op));
    }

    #[test]
    fn any_input_ends_with_eof() {
        for input in ["", "1+", ")))", "abc", "1 2 3", "((", "😀 + 1"] {
            let stream = tokenize(input);
            assert_eq!(stream.tokens().last(), Some(&Token::Eof), "input {:?}", input);
        }
    }

    #[test]
    fn rescanning_rendered_source_is_stable() {
        for input in ["1+2*3", "(4 - (5/6))", " 10 -4-3 ", "7 % 2 )("] {
            let first = tokenize(input);
            let second = tokenize(&first.to_source());
            assert_eq!(first, second, "input {:?}", input);
        }
    }
}
