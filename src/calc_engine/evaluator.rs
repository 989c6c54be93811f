use super::error::CalcError;
use super::token::Token;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Division truncates toward zero.
    pub fn compute(self, left: i64, right: i64) -> Result<i64, CalcError> {
        let result = match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Sub => left.checked_sub(right),
            BinaryOp::Mul => left.checked_mul(right),
            BinaryOp::Div => {
                if right == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or(CalcError::Overflow {
            op: self.symbol(),
            left,
            right,
        })
    }
}

impl TryFrom<char> for BinaryOp {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(BinaryOp::Add),
            '-' => Ok(BinaryOp::Sub),
            '*' => Ok(BinaryOp::Mul),
            '/' => Ok(BinaryOp::Div),
            _ => Err(CalcError::UnknownOperator(c)),
        }
    }
}

/// Applies `operator` to two `Integer` tokens and returns a new `Integer`.
pub fn apply(operator: &Token, left: &Token, right: &Token) -> Result<Token, CalcError> {
    let op = match operator {
        Token::Op(c) => BinaryOp::try_from(*c)?,
        other => {
            let symbol = other.to_string().chars().next().unwrap_or('\0');
            return Err(CalcError::UnknownOperator(symbol));
        }
    };

    let (a, b) = match (left, right) {
        (Token::Integer(a), Token::Integer(b)) => (*a, *b),
        _ => return Err(CalcError::InvalidOperand),
    };

    let value = op.compute(a, b)?;
    debug!(left = a, op = %op.symbol(), right = b, value, "applied operator");
    Ok(Token::Integer(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Token {
        Token::Integer(n)
    }

    #[test]
    fn four_operators() {
        assert_eq!(apply(&Token::Op('+'), &int(2), &int(3)), Ok(int(5)));
        assert_eq!(apply(&Token::Op('-'), &int(2), &int(3)), Ok(int(-1)));
        assert_eq!(apply(&Token::Op('*'), &int(-4), &int(3)), Ok(int(-12)));
        assert_eq!(apply(&Token::Op('/'), &int(9), &int(3)), Ok(int(3)));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(apply(&Token::Op('/'), &int(7), &int(-2)), Ok(int(-3)));
        assert_eq!(apply(&Token::Op('/'), &int(-7), &int(2)), Ok(int(-3)));
        assert_eq!(apply(&Token::Op('/'), &int(-7), &int(-2)), Ok(int(3)));
        assert_eq!(apply(&Token::Op('/'), &int(1), &int(2)), Ok(int(0)));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            apply(&Token::Op('/'), &int(5), &int(0)),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn unknown_operator_is_reported_before_operands() {
        assert_eq!(
            apply(&Token::Op('%'), &int(5), &Token::LParen),
            Err(CalcError::UnknownOperator('%'))
        );
        assert_eq!(
            apply(&Token::LParen, &int(5), &int(1)),
            Err(CalcError::UnknownOperator('('))
        );
    }

    #[test]
    fn operands_must_be_integers() {
        assert_eq!(
            apply(&Token::Op('+'), &Token::Eof, &int(1)),
            Err(CalcError::InvalidOperand)
        );
        assert_eq!(
            apply(&Token::Op('*'), &int(1), &Token::Op('*')),
            Err(CalcError::InvalidOperand)
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            BinaryOp::Add.compute(i64::MAX, 1),
            Err(CalcError::Overflow { op: '+', left: i64::MAX, right: 1 })
        );
        assert!(matches!(
            BinaryOp::Div.compute(i64::MIN, -1),
            Err(CalcError::Overflow { op: '/', .. })
        ));
    }

    #[test]
    fn symbols_round_trip_through_try_from() {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            assert_eq!(BinaryOp::try_from(op.symbol()), Ok(op));
        }
    }
}
