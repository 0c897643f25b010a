use std::fmt;

/// Error type for stack operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Tried to pop or peek an empty stack.
    Underflow,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Underflow => write!(f, "stack underflow"),
        }
    }
}

impl std::error::Error for StackError {}

/// The operand stack: integers pushed and popped at one end only. Renders
/// bottom to top, e.g. `[10, 0]` with `0` on top.
#[derive(Debug, Default, Clone)]
pub struct Stack {
    store: Vec<i64>,
}

impl Stack {
    pub fn push(&mut self, value: i64) {
        self.store.push(value)
    }

    pub fn pop(&mut self) -> Result<i64, StackError> {
        self.store.pop().ok_or(StackError::Underflow)
    }

    pub fn top(&self) -> Result<i64, StackError> {
        self.store.last().copied().ok_or(StackError::Underflow)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.store.len()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.store.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
