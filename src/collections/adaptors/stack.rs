use super::chain_adaptor;
use crate::collections::linked::Chain;
use crate::util::error::NoElementError;

/// A last-in, first-out stack. The top of the stack is the end of the underlying [`Chain`].
///
/// # Examples
/// ```
/// # use original::collections::adaptors::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// ```
pub struct Stack<T> {
    pub(crate) chain: Chain<T>,
}

chain_adaptor!(Stack, "stack");

impl<T> Stack<T> {
    pub fn push(&mut self, value: T) {
        self.chain.push_end(value);
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, NoElementError> {
        self.chain.pop_end()
    }

    /// Returns the most recently pushed element.
    pub const fn top(&self) -> Result<&T, NoElementError> {
        match self.chain.back() {
            Some(value) => Ok(value),
            None => Err(NoElementError),
        }
    }
}
