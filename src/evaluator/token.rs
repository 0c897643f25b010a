use super::EvalError;

/// A single input token, classified. Classification is re-derived fresh for
/// every token; nothing here outlives one evaluation step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// A whole-number literal, ready to push.
    Integer(i64),
    Command(Command),
    Operator(Operator),
    /// Numeric-looking but not a whole-number literal, e.g. `1.0` or `2.50`.
    Decimal,
    /// Anything else.
    Invalid,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// `.` - print the value on top of the stack.
    ShowTop,
    /// `?` - print the whole stack.
    ShowStack,
    /// `!` - stop reading input.
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Token {
    /// Classifies a raw token, in priority order: integer literal first,
    /// then the command set, then the operator set.
    ///
    /// Only an exact `i64` literal counts as an integer. A literal that
    /// still parses as a number - a decimal point, a fractional value,
    /// scientific notation, a magnitude past `i64` - is `Decimal`, so `1.0`
    /// is rejected rather than rounded. Commands and operators match
    /// exactly; anything longer than one character (`++`, `**`) falls
    /// through to `Invalid`.
    pub fn classify(token: &str) -> Self {
        if let Ok(value) = token.parse::<i64>() {
            return Token::Integer(value);
        }

        if token.parse::<f64>().is_ok() {
            return Token::Decimal;
        }

        match token {
            "." => Token::Command(Command::ShowTop),
            "?" => Token::Command(Command::ShowStack),
            "!" => Token::Command(Command::Quit),

            "+" => Token::Operator(Operator::Add),
            "-" => Token::Operator(Operator::Subtract),
            "*" => Token::Operator(Operator::Multiply),
            "/" => Token::Operator(Operator::Divide),
            "%" => Token::Operator(Operator::Modulo),

            _ => Token::Invalid,
        }
    }
}

impl Operator {
    /// Applies `a op b`. Division and modulo reject a zero denominator
    /// before touching it; otherwise native `i64` semantics apply, so `/`
    /// truncates toward zero and `%` takes the sign of the dividend.
    pub fn apply(self, a: i64, b: i64) -> Result<i64, EvalError> {
        use Operator::*;

        match self {
            Add => Ok(a + b),
            Subtract => Ok(a - b),
            Multiply => Ok(a * b),
            Divide | Modulo if b == 0 => Err(EvalError::DivideByZero),
            Divide => Ok(a / b),
            Modulo => Ok(a % b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals() {
        assert_eq!(Token::classify("5"), Token::Integer(5));
        assert_eq!(Token::classify("0"), Token::Integer(0));
        assert_eq!(Token::classify("-3"), Token::Integer(-3));
        assert_eq!(Token::classify("+42"), Token::Integer(42));
        assert_eq!(Token::classify("007"), Token::Integer(7));
    }

    #[test]
    fn large_literals_keep_their_exact_value() {
        // past f64's 2^53 of integer precision, well within i64
        assert_eq!(
            Token::classify("9007199254740993"),
            Token::Integer(9007199254740993)
        );
        assert_eq!(
            Token::classify("-9223372036854775808"),
            Token::Integer(i64::MIN)
        );
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(Token::classify("1.0"), Token::Decimal);
        assert_eq!(Token::classify("2.50"), Token::Decimal);
        assert_eq!(Token::classify("1.5"), Token::Decimal);
        assert_eq!(Token::classify(".5"), Token::Decimal);
        assert_eq!(Token::classify("5."), Token::Decimal);
        assert_eq!(Token::classify("-0.25"), Token::Decimal);
        // numeric but not an i64 literal
        assert_eq!(Token::classify("1e3"), Token::Decimal);
        assert_eq!(Token::classify("9223372036854775808"), Token::Decimal);
    }

    #[test]
    fn commands() {
        assert_eq!(Token::classify("."), Token::Command(Command::ShowTop));
        assert_eq!(Token::classify("?"), Token::Command(Command::ShowStack));
        assert_eq!(Token::classify("!"), Token::Command(Command::Quit));
    }

    #[test]
    fn operators() {
        assert_eq!(Token::classify("+"), Token::Operator(Operator::Add));
        assert_eq!(Token::classify("-"), Token::Operator(Operator::Subtract));
        assert_eq!(Token::classify("*"), Token::Operator(Operator::Multiply));
        assert_eq!(Token::classify("/"), Token::Operator(Operator::Divide));
        assert_eq!(Token::classify("%"), Token::Operator(Operator::Modulo));
    }

    #[test]
    fn invalid_tokens() {
        assert_eq!(Token::classify("abc"), Token::Invalid);
        assert_eq!(Token::classify("&"), Token::Invalid);
        assert_eq!(Token::classify("1a"), Token::Invalid);
        assert_eq!(Token::classify("quit"), Token::Invalid);
    }

    #[test]
    fn multi_character_lookalikes_are_invalid() {
        assert_eq!(Token::classify("++"), Token::Invalid);
        assert_eq!(Token::classify("**"), Token::Invalid);
        assert_eq!(Token::classify("+-"), Token::Invalid);
        assert_eq!(Token::classify(".."), Token::Invalid);
        assert_eq!(Token::classify("?!"), Token::Invalid);
    }

    #[test]
    fn apply_arithmetic() {
        assert_eq!(Operator::Add.apply(5, 3), Ok(8));
        assert_eq!(Operator::Subtract.apply(3, 5), Ok(-2));
        assert_eq!(Operator::Multiply.apply(4, -2), Ok(-8));
        assert_eq!(Operator::Modulo.apply(4, 2), Ok(0));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Operator::Divide.apply(7, 2), Ok(3));
        assert_eq!(Operator::Divide.apply(-7, 2), Ok(-3));
        assert_eq!(Operator::Divide.apply(7, -2), Ok(-3));
    }

    #[test]
    fn modulo_takes_sign_of_dividend() {
        assert_eq!(Operator::Modulo.apply(7, 2), Ok(1));
        assert_eq!(Operator::Modulo.apply(-7, 2), Ok(-1));
        assert_eq!(Operator::Modulo.apply(7, -2), Ok(1));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Operator::Divide.apply(10, 0), Err(EvalError::DivideByZero));
        assert_eq!(Operator::Modulo.apply(10, 0), Err(EvalError::DivideByZero));
        // zero over anything else is fine
        assert_eq!(Operator::Divide.apply(0, 5), Ok(0));
    }
}
