use super::chain_adaptor;
use crate::collections::linked::Chain;
use crate::util::error::NoElementError;

/// A double-ended queue, allowing pushes and pops at both ends in constant time.
pub struct Deque<T> {
    pub(crate) chain: Chain<T>,
}

chain_adaptor!(Deque, "deque");

impl<T> Deque<T> {
    pub fn push_begin(&mut self, value: T) {
        self.chain.push_begin(value);
    }

    pub fn push_end(&mut self, value: T) {
        self.chain.push_end(value);
    }

    pub fn pop_begin(&mut self) -> Result<T, NoElementError> {
        self.chain.pop_begin()
    }

    pub fn pop_end(&mut self) -> Result<T, NoElementError> {
        self.chain.pop_end()
    }

    pub const fn head(&self) -> Result<&T, NoElementError> {
        match self.chain.front() {
            Some(value) => Ok(value),
            None => Err(NoElementError),
        }
    }

    pub const fn tail(&self) -> Result<&T, NoElementError> {
        match self.chain.back() {
            Some(value) => Ok(value),
            None => Err(NoElementError),
        }
    }
}
