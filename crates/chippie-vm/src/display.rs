use std::fmt;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A 2d array of booleans, representing the black and white pixels, indexed `[row][column]`
pub type Pixels = [[bool; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize];

/// A copy of the display, handed out to whoever renders it
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Framebuffer(pub Pixels);

impl Framebuffer {
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.0[y % DISPLAY_HEIGHT as usize][x % DISPLAY_WIDTH as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; DISPLAY_WIDTH as usize]> {
        self.0.iter()
    }

    /// Amount of pixels that are on
    pub fn lit(&self) -> usize {
        self.0.iter().flatten().filter(|pixel| **pixel).count()
    }
}

impl fmt::Display for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(DISPLAY_WIDTH as usize + 4);
        writeln!(f, "{border}")?;
        for row in self.rows() {
            write!(f, "| ")?;
            for pixel in row {
                f.write_str(if *pixel { "█" } else { " " })?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "{border}")
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Framebuffer ({} lit)", self.lit())?;
        fmt::Display::fmt(self, f)
    }
}

/// The monochrome screen. Only the cpu draws on it, everyone else gets a copy
#[derive(Clone, Debug)]
pub struct Display {
    framebuffer: Framebuffer,
}

impl Display {
    pub fn new() -> Self {
        Self {
            framebuffer: Framebuffer(
                [[false; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize],
            ),
        }
    }

    /// Turns all the pixels to off
    pub fn clear(&mut self) {
        self.framebuffer
            .0
            .iter_mut()
            .for_each(|row| *row = [false; DISPLAY_WIDTH as usize]);
    }

    /// XORs a sprite onto the screen with its top left corner at (`x`, `y`).
    ///
    /// Every byte in `sprite` is one row, most significant bit on the left. Coordinates wrap around
    /// both edges, bit by bit, so a sprite that starts at column 60 continues at column 0.
    ///
    /// Returns true if this draw turned off any pixel that was on.
    pub fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let start_x = (x % DISPLAY_WIDTH) as usize;
        let start_y = (y % DISPLAY_HEIGHT) as usize;
        let mut erased = false;

        for (sprite_row, byte) in sprite.iter().enumerate() {
            let row = &mut self.framebuffer.0[(start_y + sprite_row) % DISPLAY_HEIGHT as usize];
            for sprite_column in 0..8 {
                if byte >> (7 - sprite_column) & 1 == 0 {
                    continue;
                }
                let pixel = &mut row[(start_x + sprite_column) % DISPLAY_WIDTH as usize];
                erased |= *pixel;
                *pixel = !*pixel;
            }
        }
        erased
    }

    pub fn snapshot(&self) -> Framebuffer {
        self.framebuffer
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
