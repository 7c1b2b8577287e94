/// # Every instruction in the chip8 language
/// ## nnn
/// a hexadecimal memory address, it's 12 bits long
/// ## kk
/// a hexadecimal byte, 8 bits
/// ## n
/// a "nibble" 4 bits
/// ## x and y
/// Registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turns all the pixels to off
    ClearScreen, //00e0
    /// Sets the program counter to the last address in the stack
    Return, //00ee
    /// Sets the program counter to whatever nnn is
    Jump { nnn: u16 }, //1nnn
    /// Saves the program counter on the stack, then jumps to nnn
    Call { nnn: u16 }, //2nnn
    SkipIfEqual { x: u8, kk: u8 },           //3xkk
    SkipIfNotEqual { x: u8, kk: u8 },        //4xkk
    SkipIfRegistersEqual { x: u8, y: u8 },   //5xy0
    /// Set register x to the value kk
    Load { x: u8, kk: u8 }, //6xkk
    /// Adds the value kk to register x, without touching the carry flag
    Add { x: u8, kk: u8 }, //7xkk
    /// Stores the value of register y in register x
    Move { x: u8, y: u8 }, //8xy0
    Or { x: u8, y: u8 },   //8xy1
    And { x: u8, y: u8 },  //8xy2
    Xor { x: u8, y: u8 },  //8xy3
    /// vx + vy, with the carry in vf
    AddRegisters { x: u8, y: u8 }, //8xy4
    /// vx - vy, vf is set when there was no borrow
    Sub { x: u8, y: u8 }, //8xy5
    /// Shift one bit to the right, the bit that falls off goes into vf
    ShiftRight { x: u8, y: u8 }, //8xy6
    /// vy - vx, vf is set when there was no borrow
    SubReversed { x: u8, y: u8 }, //8xy7
    /// Shift one bit to the left, the bit that falls off goes into vf
    ShiftLeft { x: u8, y: u8 }, //8xye
    SkipIfRegistersNotEqual { x: u8, y: u8 }, //9xy0
    /// Set index register I to nnn
    SetIndex { nnn: u16 }, //annn
    JumpPlusV0 { nnn: u16 }, //bnnn
    /// A random byte AND kk
    Random { x: u8, kk: u8 }, //cxkk
    /// Draws an n rows tall sprite from I at (vx, vy), vf is set on collision
    Draw { x: u8, y: u8, n: u8 }, //dxyn
    SkipIfPressed { x: u8 },    //ex9e
    SkipIfNotPressed { x: u8 }, //exa1
    ReadDelayTimer { x: u8 },   //fx07
    /// Halts until a key goes down, then stores it in vx
    WaitForKey { x: u8 }, //fx0a
    SetDelayTimer { x: u8 }, //fx15
    SetSoundTimer { x: u8 }, //fx18
    AddToIndex { x: u8 },    //fx1e
    /// Points I at the font sprite for the digit in vx
    SetIndexToDigit { x: u8 }, //fx29
    /// Hundreds, tens and ones of vx at I, I+1 and I+2
    StoreBcd { x: u8 }, //fx33
    /// v0 through vx into ram from I onwards. I is not changed
    StoreRegisters { x: u8 }, //fx55
    /// v0 through vx from ram from I onwards. I is not changed
    LoadRegisters { x: u8 }, //fx65
}

impl Instruction {
    /// Takes two bytes, and decodes what instruction they represent.
    /// Returns `None` for anything outside of the instruction set
    pub fn new(opcode: u16) -> Option<Self> {
        let x = Self::get_nibble(opcode, 1);
        let y = Self::get_nibble(opcode, 2);
        let n = Self::get_nibble(opcode, 3);
        let kk = Self::last_byte(opcode);
        let nnn = Self::oxxx(opcode);

        let instruction = match Self::get_nibble(opcode, 0) {
            0x0 => match opcode {
                0x00E0 => Instruction::ClearScreen,
                0x00EE => Instruction::Return,
                _ => return None,
            },
            0x1 => Instruction::Jump { nnn },
            0x2 => Instruction::Call { nnn },
            0x3 => Instruction::SkipIfEqual { x, kk },
            0x4 => Instruction::SkipIfNotEqual { x, kk },
            0x5 if n == 0 => Instruction::SkipIfRegistersEqual { x, y },
            0x6 => Instruction::Load { x, kk },
            0x7 => Instruction::Add { x, kk },
            0x8 => match n {
                0x0 => Instruction::Move { x, y },
                0x1 => Instruction::Or { x, y },
                0x2 => Instruction::And { x, y },
                0x3 => Instruction::Xor { x, y },
                0x4 => Instruction::AddRegisters { x, y },
                0x5 => Instruction::Sub { x, y },
                0x6 => Instruction::ShiftRight { x, y },
                0x7 => Instruction::SubReversed { x, y },
                0xE => Instruction::ShiftLeft { x, y },
                _ => return None,
            },
            0x9 if n == 0 => Instruction::SkipIfRegistersNotEqual { x, y },
            0xA => Instruction::SetIndex { nnn },
            0xB => Instruction::JumpPlusV0 { nnn },
            0xC => Instruction::Random { x, kk },
            0xD => Instruction::Draw { x, y, n },
            0xE => match kk {
                0x9E => Instruction::SkipIfPressed { x },
                0xA1 => Instruction::SkipIfNotPressed { x },
                _ => return None,
            },
            0xF => match kk {
                0x07 => Instruction::ReadDelayTimer { x },
                0x0A => Instruction::WaitForKey { x },
                0x15 => Instruction::SetDelayTimer { x },
                0x18 => Instruction::SetSoundTimer { x },
                0x1E => Instruction::AddToIndex { x },
                0x29 => Instruction::SetIndexToDigit { x },
                0x33 => Instruction::StoreBcd { x },
                0x55 => Instruction::StoreRegisters { x },
                0x65 => Instruction::LoadRegisters { x },
                _ => return None,
            },
            _ => return None,
        };
        Some(instruction)
    }

    /// A nibble is 4 bits, so this returns the nth group of 4 bits, counting from the left
    fn get_nibble(opcode: u16, nth: u8) -> u8 {
        debug_assert!(nth < 4);
        ((opcode >> (12 - 4 * nth)) & 0xf) as u8
    }
    /// Returns the last full byte of an opcode
    fn last_byte(opcode: u16) -> u8 {
        (opcode & 0xff) as u8
    }
    /// Returns the the last 12 bits of an opcode
    fn oxxx(opcode: u16) -> u16 {
        opcode & 0xfff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_opcodes_into_nibbles() {
        assert_eq!(Instruction::get_nibble(0xABCD, 0), 0xA);
        assert_eq!(Instruction::get_nibble(0xABCD, 1), 0xB);
        assert_eq!(Instruction::get_nibble(0xABCD, 2), 0xC);
        assert_eq!(Instruction::get_nibble(0xABCD, 3), 0xD);
        assert_eq!(Instruction::last_byte(0xABCD), 0xCD);
        assert_eq!(Instruction::oxxx(0xABCD), 0xBCD);
    }

    #[test]
    fn decodes_every_family() {
        let cases = [
            (0x00E0, Instruction::ClearScreen),
            (0x00EE, Instruction::Return),
            (0x1ABC, Instruction::Jump { nnn: 0xABC }),
            (0x2ABC, Instruction::Call { nnn: 0xABC }),
            (0x3A12, Instruction::SkipIfEqual { x: 0xA, kk: 0x12 }),
            (0x4A12, Instruction::SkipIfNotEqual { x: 0xA, kk: 0x12 }),
            (0x5AB0, Instruction::SkipIfRegistersEqual { x: 0xA, y: 0xB }),
            (0x6A12, Instruction::Load { x: 0xA, kk: 0x12 }),
            (0x7A12, Instruction::Add { x: 0xA, kk: 0x12 }),
            (0x8AB0, Instruction::Move { x: 0xA, y: 0xB }),
            (0x8AB4, Instruction::AddRegisters { x: 0xA, y: 0xB }),
            (0x8ABE, Instruction::ShiftLeft { x: 0xA, y: 0xB }),
            (0x9AB0, Instruction::SkipIfRegistersNotEqual { x: 0xA, y: 0xB }),
            (0xAABC, Instruction::SetIndex { nnn: 0xABC }),
            (0xBABC, Instruction::JumpPlusV0 { nnn: 0xABC }),
            (0xCA12, Instruction::Random { x: 0xA, kk: 0x12 }),
            (0xDAB5, Instruction::Draw { x: 0xA, y: 0xB, n: 5 }),
            (0xEA9E, Instruction::SkipIfPressed { x: 0xA }),
            (0xEAA1, Instruction::SkipIfNotPressed { x: 0xA }),
            (0xFA0A, Instruction::WaitForKey { x: 0xA }),
            (0xFA33, Instruction::StoreBcd { x: 0xA }),
            (0xFA65, Instruction::LoadRegisters { x: 0xA }),
        ];
        for (opcode, expected) in cases {
            assert_eq!(Instruction::new(opcode), Some(expected), "{opcode:#06X}");
        }
    }

    #[test]
    fn rejects_unknown_opcodes() {
        // 0nnn machine code routines are not supported
        for opcode in [0x0000, 0x0123, 0x00E1, 0x5AB1, 0x8AB8, 0x8ABF, 0x9AB1, 0xEA00, 0xFA00, 0xFAFF] {
            assert_eq!(Instruction::new(opcode), None, "{opcode:#06X}");
        }
    }
}
