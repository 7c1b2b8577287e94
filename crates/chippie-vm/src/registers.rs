use crate::constants::{FLAG_REGISTER, NUM_REGISTERS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
///# Holds the general purpose registers and the index register
pub struct Registers {
    register: [u8; NUM_REGISTERS as usize],
    /// 16 bits wide, generally only used to store memory addresses
    vindex: u16,
}

impl Registers {
    pub fn set_index_register(&mut self, value: u16) {
        self.vindex = value;
    }
    pub fn get_index_register(&self) -> u16 {
        self.vindex
    }

    pub fn get_register(&self, register: u8) -> u8 {
        self.register[register as usize]
    }
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.register[register as usize] = value;
    }

    /// VF doubles as the carry, borrow, shift and collision flag
    pub fn set_flag(&mut self, flag: bool) {
        self.register[FLAG_REGISTER as usize] = u8::from(flag);
    }

    pub fn snapshot(&self) -> [u8; NUM_REGISTERS as usize] {
        self.register
    }
}
