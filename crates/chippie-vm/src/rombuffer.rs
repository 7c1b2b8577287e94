use std::io;
use std::path::Path;

/// Holds the data from a chip8 file as a vec of bytes
#[derive(Clone, Debug, Default)]
pub struct RomBuffer {
    buffer: Vec<u8>,
}

impl RomBuffer {
    /// Reads a whole rom file. Nothing is validated here, [`crate::Cpu::load`] checks the size
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        let buffer = std::fs::read(path)?;
        Ok(RomBuffer { buffer })
    }

    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_files() {
        let path = std::env::temp_dir()
            .join(format!("chippie-rombuffer-{}.ch8", std::process::id()));
        std::fs::write(&path, [0x23, 0x20, 0x00, 0xE0]).unwrap();
        let rom_buffer = RomBuffer::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(rom_buffer.contents(), &[0x23, 0x20, 0x00, 0xE0]);
    }

    #[test]
    fn missing_files_are_an_error() {
        assert!(RomBuffer::read("does/not/exist.ch8").is_err());
    }
}
