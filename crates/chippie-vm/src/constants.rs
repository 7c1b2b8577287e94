use std::time::Duration;

/// The width of the display in pixels
pub const DISPLAY_WIDTH: u8 = 64;
/// The height of the display in pixels
pub const DISPLAY_HEIGHT: u8 = 32;
/// The size of ram in bytes
pub const RAM_SIZE: usize = 4096;
/// For the regular chip 8 roms
pub const ROM_START_ADDRESS: u16 = 0x200;
/// The largest rom that fits between the start address and the end of ram
pub const MAX_ROM_SIZE: usize = RAM_SIZE - ROM_START_ADDRESS as usize;
/// Instructions can't be fetched from here or above
pub const FETCH_LIMIT: u16 = 4094;
/// Amount of registers CHIP-8 has
pub const NUM_REGISTERS: u8 = 16;
/// Index of the flag register, VF
pub const FLAG_REGISTER: u8 = 0xF;
/// Amount of keys on the hexadecimal keypad
pub const NUM_KEYS: u8 = 16;
/// Default amount of nested subroutine calls before the stack overflows
pub const STACK_DEPTH: usize = 16;
/// How many instructions the cpu executes for every timer tick. This decides how fast the cpu will run
pub const INSTRUCTIONS_PER_TICK: usize = 10;
/// Both timers count down at 60hz
pub const TIMER_HZ: u32 = 60;
/// The wall clock time between two timer ticks
pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TIMER_HZ as u64);

/// Most ticks a scheduler runs in one call, anything more after a stall is dropped
pub const MAX_CATCH_UP_TICKS: u32 = 4;
/// Every digit sprite is 5 rows tall
pub const FONT_SPRITE_BYTES: u16 = 5;

/// The fontset: sixteen digit sprites, 0 through F, stored at `5 * digit`.
///
/// Written out in binary with one byte below the other, `F0 90 90 90 F0` becomes
///
/// ```text
/// 1111
/// 1  1
/// 1  1
/// 1  1
/// 1111
/// ```
///
/// which is a zero.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, //0
    0x20, 0x60, 0x20, 0x20, 0x70, //1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, //2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, //3
    0x90, 0x90, 0xF0, 0x10, 0x10, //4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, //5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, //6
    0xF0, 0x10, 0x20, 0x40, 0x40, //7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, //8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, //9
    0xF0, 0x90, 0xF0, 0x90, 0x90, //a
    0xE0, 0x90, 0xE0, 0x90, 0xE0, //b
    0xF0, 0x80, 0x80, 0x80, 0xF0, //c
    0xE0, 0x90, 0x90, 0x90, 0xE0, //d
    0xF0, 0x80, 0xF0, 0x80, 0xF0, //e
    0xF0, 0x80, 0xF0, 0x80, 0x80, //f
];
