use super::chain_adaptor;
use crate::collections::linked::Chain;
use crate::util::error::NoElementError;

/// A first-in, first-out queue. Elements enter at the tail and leave from the head.
pub struct Queue<T> {
    pub(crate) chain: Chain<T>,
}

chain_adaptor!(Queue, "queue");

impl<T> Queue<T> {
    /// Adds an element at the tail.
    pub fn push(&mut self, value: T) {
        self.chain.push_end(value);
    }

    /// Removes and returns the element at the head.
    pub fn pop(&mut self) -> Result<T, NoElementError> {
        self.chain.pop_begin()
    }

    /// Returns the oldest element, which [`pop`](Queue::pop) removes next.
    pub const fn head(&self) -> Result<&T, NoElementError> {
        match self.chain.front() {
            Some(value) => Ok(value),
            None => Err(NoElementError),
        }
    }

    /// Returns the newest element.
    pub const fn tail(&self) -> Result<&T, NoElementError> {
        match self.chain.back() {
            Some(value) => Ok(value),
            None => Err(NoElementError),
        }
    }
}
