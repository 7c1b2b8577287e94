//! # chippie-vm
//!
//! A CHIP-8 virtual machine: the interpreter, its memory, display, timers and keypad.
//! Rendering, sound and reading keys are left to the host.

///Which roms and quirks the cpu runs with
mod config;
///This holds all of the constants (written in capital letters in the code)
mod constants;
///Handles the fetch, decode execute cycle
mod cpu;
///The monochrome screen and its sprite drawing
mod display;
mod error;
///An overview of all instructions in the chip 8 instruction set architecture
mod instruction;
///The hexadecimal keypad
mod keypad;
///A data structure modeling ram
mod ram;
///The registers for the chip8 cpu
mod registers;
///Holds the data loaded from disk
mod rombuffer;
///Keeps the timers at 60hz no matter how fast the cpu runs
mod scheduler;
///The stack that is used in the cpu
mod stack;
///The delay and sound timers
mod timers;

// Re-export what hosts need to drive the cpu and show its screen
pub use config::{Config, Quirks};
pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, NUM_KEYS, TICK_INTERVAL};
pub use cpu::Cpu;
pub use display::{Framebuffer, Pixels};
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;
pub use rombuffer::RomBuffer;
pub use scheduler::Scheduler;
