use crate::error::{Chip8Error, Result};

/// Return addresses, used to call subroutines or functions and return from them.
/// Holds plain program counter values, and can go into `capacity` nested subroutines before it
/// overflows
#[derive(Clone, Debug)]
pub struct Stack {
    values: Vec<u16>,
    capacity: usize,
}

impl Stack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Saves a return address. `pc` is only used to report where an overflow happened
    pub fn push(&mut self, return_address: u16, pc: u16) -> Result<()> {
        if self.values.len() >= self.capacity {
            return Err(Chip8Error::StackOverflow {
                pc,
                depth: self.capacity,
            });
        }
        self.values.push(return_address);
        Ok(())
    }

    pub fn pop(&mut self, pc: u16) -> Result<u16> {
        self.values.pop().ok_or(Chip8Error::StackUnderflow { pc })
    }

    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
