use crate::constants::{FETCH_LIMIT, FONT_SET, MAX_ROM_SIZE, RAM_SIZE, ROM_START_ADDRESS};
use crate::error::{Chip8Error, Result};

///The ram of the chip8 cpu, uses big endian, and is laid out in the following way:
///0x000 start of chip-8 ram
///0x000 to 0x050 reserved for fontset
///0x200 start of chip-8 programs
///0xfff end of chip8 ram
#[derive(Debug, Copy, Clone)]
pub struct Ram {
    bytes: [u8; RAM_SIZE],
}

impl Ram {
    /// Returns the ram with the fontset already loaded
    pub fn with_fonts() -> Self {
        let mut ram = Self {
            bytes: [0; RAM_SIZE],
        };
        ram.bytes[..FONT_SET.len()].copy_from_slice(&FONT_SET);
        ram
    }

    /// Copies a rom into ram, starting at the rom start address
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        let start = ROM_START_ADDRESS as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// Returns the two bytes at `address` as one big endian opcode
    pub fn get_opcode(&self, address: u16) -> Result<u16> {
        if address >= FETCH_LIMIT {
            return Err(Chip8Error::OutOfBounds {
                address: address as usize,
            });
        }
        let address = address as usize;
        Ok(u16::from_be_bytes([self.bytes[address], self.bytes[address + 1]]))
    }

    /// Returns `len` bytes starting at `address`, failing if any of them lies outside of ram
    pub fn read(&self, address: u16, len: usize) -> Result<&[u8]> {
        if len == 0 {
            return Ok(&[]);
        }
        let start = address as usize;
        let end = start + len;
        if end > RAM_SIZE {
            return Err(Chip8Error::OutOfBounds {
                address: RAM_SIZE.max(start),
            });
        }
        Ok(&self.bytes[start..end])
    }

    /// Copies `values` into ram starting at `address`.
    ///
    /// Programs may only write to their own part of ram, so anything below the rom start address
    /// (where the fontset lives) is out of bounds, just like anything past the end.
    pub fn write(&mut self, address: u16, values: &[u8]) -> Result<()> {
        let start = address as usize;
        let end = start + values.len();
        if address < ROM_START_ADDRESS {
            return Err(Chip8Error::OutOfBounds { address: start });
        }
        if end > RAM_SIZE {
            return Err(Chip8Error::OutOfBounds {
                address: RAM_SIZE.max(start),
            });
        }
        self.bytes[start..end].copy_from_slice(values);
        Ok(())
    }
}
