use std::fmt;

mod stack;
use stack::{Stack, StackError};

mod token;
use token::{Command, Operator, Token};

use log::{info, trace};

/// Error type for a single evaluation step. All four categories are
/// recoverable: the token is reported and the stack is left exactly as it
/// was before the token was processed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Numeric literal that is not a whole number, e.g. `1.0`.
    DecimalToken,
    /// Token that is not an integer, command or operator.
    InvalidToken,
    /// Operator with fewer than two operands on the stack.
    NoOperands,
    /// Division or modulo with a zero denominator.
    DivideByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DecimalToken | EvalError::InvalidToken => write!(f, "bad token"),
            EvalError::NoOperands => write!(f, "less than two operands provided"),
            EvalError::DivideByZero => write!(f, "zero in the denominator"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<StackError> for EvalError {
    // an underflow mid-operation means the operands ran out
    fn from(_: StackError) -> Self {
        EvalError::NoOperands
    }
}

/// Evaluates one token at a time against the operand stack.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Stack,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a single token: classifies it, updates the stack, and
    /// returns the line to print, if the token produces one. Failures are
    /// reported as `ERROR: ...` lines and never disturb the stack.
    pub fn eval(&mut self, token: &str) -> Option<String> {
        let output = match self.dispatch(token) {
            Ok(output) => output,
            Err(err) => {
                info!("token {:?} rejected: {}", token, err);

                Some(format!("ERROR: {}", err))
            }
        };

        trace!("stack: {}", self.stack);

        output
    }

    fn dispatch(&mut self, token: &str) -> Result<Option<String>, EvalError> {
        match Token::classify(token) {
            Token::Integer(value) => {
                trace!("push {}", value);

                self.stack.push(value);
                Ok(None)
            }
            Token::Command(command) => Ok(self.run_command(command)),
            Token::Operator(op) => {
                self.run_operator(op)?;
                Ok(None)
            }
            Token::Decimal => Err(EvalError::DecimalToken),
            Token::Invalid => Err(EvalError::InvalidToken),
        }
    }

    fn run_command(&self, command: Command) -> Option<String> {
        match command {
            Command::ShowTop => {
                trace!("show top");

                match self.stack.top() {
                    Ok(value) => Some(value.to_string()),
                    Err(StackError::Underflow) => Some(String::from("ERROR: no values provided")),
                }
            }
            Command::ShowStack => {
                trace!("show stack");

                Some(self.stack.to_string())
            }
            // the read loop stops at the quit token before dispatch ever
            // sees it; if one gets here anyway there is nothing to print
            Command::Quit => None,
        }
    }

    fn run_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        trace!("apply {:?}", op);

        let (a, b) = self.pop_operands()?;

        match op.apply(a, b) {
            Ok(result) => {
                self.stack.push(result);
                Ok(())
            }
            Err(err) => {
                // the operation never happened, put both operands back in
                // their original order
                self.stack.push(a);
                self.stack.push(b);
                Err(err)
            }
        }
    }

    /// Pops the right operand `b`, then the left operand `a`. Emptiness is
    /// checked before each pop; a failed second pop restores the first
    /// operand, so the stack is unchanged whenever this errors.
    fn pop_operands(&mut self) -> Result<(i64, i64), EvalError> {
        if self.stack.is_empty() {
            return Err(EvalError::NoOperands);
        }

        let b = self.stack.pop()?;

        if self.stack.is_empty() {
            self.stack.push(b);
            return Err(EvalError::NoOperands);
        }

        let a = self.stack.pop()?;

        Ok((a, b))
    }
}
