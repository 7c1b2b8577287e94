/// Everything that can go wrong while loading or running a rom.
///
/// All of these except [`Chip8Error::RomTooLarge`] are fatal: once `step` returns one of them the
/// cpu keeps returning it until it is reset or a new rom is loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Chip8Error {
    #[error("invalid instruction {opcode:#06X} at {pc:#05X}")]
    InvalidInstruction { opcode: u16, pc: u16 },

    #[error("stack overflow at {pc:#05X}: more than {depth} nested subroutine calls")]
    StackOverflow { pc: u16, depth: usize },

    #[error("stack underflow at {pc:#05X}: return without a matching call")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("rom is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },
}

impl Chip8Error {
    /// Whether this error halts the cpu until it is reset
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Chip8Error::RomTooLarge { .. })
    }
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
