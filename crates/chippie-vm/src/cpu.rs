use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::constants::{FONT_SPRITE_BYTES, NUM_REGISTERS, ROM_START_ADDRESS};
use crate::display::{Display, Framebuffer};
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::ram::Ram;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::timers::Timers;

/// The main cpu, owns the whole machine: ram, registers, stack, display, timers and keypad.
///
/// The host decides how often to call [`Cpu::step`] (or [`Cpu::run`]) and must call
/// [`Cpu::tick_timers`] sixty times per second on its own, regardless of how many instructions
/// ran in between. [`crate::Scheduler`] does both for a single threaded host.
pub struct Cpu {
    /// The monochrome screen, only changed by 00e0 and dxyn
    display: Display,
    ///Program counter, used to keep track of what to fetch,decode and execute from ram, initialized at 0x200
    program_counter: u16,
    keypad: Keypad,
    /// The memory, stores the rom data when loaded
    memory: Ram,
    /// Ram as it was right after loading, restored on reset
    pristine_memory: Ram,
    /// A random number generator. Seeded through the config to make cxkk reproducible
    rng: ChaCha8Rng,
    config: Config,
    /// Registers 0x0 through 0xF and the index register
    registers: Registers,
    stack: Stack,
    timers: Timers,
    /// Set while fx0a waits for a key, holds the register that receives it
    key_destination: Option<u8>,
    /// The error that halted the cpu, if any
    fault: Option<Chip8Error>,
}

impl Cpu {
    /// Creates a cpu with empty program memory. Load a rom with [`Cpu::load`] before stepping it
    pub fn new(config: Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let memory = Ram::with_fonts();

        Self {
            display: Display::new(),
            program_counter: ROM_START_ADDRESS,
            keypad: Keypad::default(),
            memory,
            pristine_memory: memory,
            rng,
            stack: Stack::with_capacity(config.stack_depth),
            config,
            registers: Registers::default(),
            timers: Timers::default(),
            key_destination: None,
            fault: None,
        }
    }

    /// Copies a rom into memory at 0x200 and resets everything else.
    ///
    /// A rom that doesn't fit is rejected and leaves the cpu as it was.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        let mut memory = Ram::with_fonts();
        memory.load_rom(rom)?;
        self.pristine_memory = memory;
        self.reset();
        debug!("loaded a {} byte rom", rom.len());
        Ok(())
    }

    /// Puts the machine back in the state it was in right after the rom was loaded
    pub fn reset(&mut self) {
        self.memory = self.pristine_memory;
        self.display.clear();
        self.program_counter = ROM_START_ADDRESS;
        self.keypad = Keypad::default();
        self.registers = Registers::default();
        self.stack.clear();
        self.timers = Timers::default();
        self.key_destination = None;
        self.fault = None;
        debug!("cpu reset");
    }

    /// Executes a single instruction.
    ///
    /// While fx0a waits for a key nothing happens, until a key went down since the wait began:
    /// then that key is stored and the program continues after the fx0a.
    ///
    /// Fatal errors (see [`Chip8Error::is_fatal`]) latch: the cpu keeps returning the same error
    /// until it is reset.
    pub fn step(&mut self) -> Result<()> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        match self.cycle() {
            Ok(()) => Ok(()),
            Err(error) if error.is_fatal() => {
                warn!("cpu halted: {error}");
                self.fault = Some(error.clone());
                Err(error)
            }
            Err(error) => Err(error),
        }
    }

    /// Steps up to `steps` times. Stops early when the program starts waiting for a key, since
    /// nothing happens until the host presses one.
    ///
    /// Returns the amount of steps taken.
    pub fn run(&mut self, steps: usize) -> Result<usize> {
        for taken in 1..=steps {
            self.step()?;
            if self.is_waiting_for_key() {
                return Ok(taken);
            }
        }
        Ok(steps)
    }

    /// Counts both timers down by one, call this sixty times per second
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    pub fn read_display(&self) -> Framebuffer {
        self.display.snapshot()
    }

    /// V0 through VF
    pub fn read_registers(&self) -> [u8; NUM_REGISTERS as usize] {
        self.registers.snapshot()
    }

    pub fn press(&mut self, key: u8) {
        self.keypad.press(key);
    }

    pub fn release(&mut self, key: u8) {
        self.keypad.release(key);
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn index_register(&self) -> u16 {
        self.registers.get_index_register()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn delay_timer(&self) -> u8 {
        self.timers.delay.read()
    }

    pub fn sound_timer(&self) -> u8 {
        self.timers.sound.read()
    }

    /// The host should beep while this is true
    pub fn is_sound_active(&self) -> bool {
        self.timers.sound.is_armed()
    }

    pub fn is_waiting_for_key(&self) -> bool {
        self.key_destination.is_some()
    }

    pub fn fault(&self) -> Option<&Chip8Error> {
        self.fault.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches, decodes and executes one instruction, or polls the keypad while fx0a waits.
    /// An instruction that fails leaves the program counter pointing at it
    fn cycle(&mut self) -> Result<()> {
        if let Some(x) = self.key_destination {
            if let Some(key) = self.keypad.take_edge() {
                debug!("key {key:X} ends the wait, stored in v{x:X}");
                self.registers.set_register(x, key);
                self.key_destination = None;
                self.program_counter += 2;
            }
            return Ok(());
        }

        let pc = self.program_counter;
        let opcode = self.fetch()?;
        let instruction =
            Instruction::new(opcode).ok_or(Chip8Error::InvalidInstruction { opcode, pc })?;
        trace!("{pc:#05X} {opcode:04X} {instruction:?}");

        self.program_counter += 2;
        if let Err(error) = self.execute(instruction, pc) {
            self.program_counter = pc;
            return Err(error);
        }
        Ok(())
    }

    /// Returns two bytes from memory at the location where the program counter currently points to
    fn fetch(&self) -> Result<u16> {
        self.memory.get_opcode(self.program_counter)
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.program_counter += 2;
        }
    }

    ///Execute the instruction, for details on the instruction, check the instruction enum
    ///definition. `pc` is the address the instruction was fetched from, the program counter has
    ///already moved past it
    fn execute(&mut self, instruction: Instruction, pc: u16) -> Result<()> {
        let registers = self.registers;
        let v = |register: u8| registers.get_register(register);

        match instruction {
            Instruction::ClearScreen => self.display.clear(),
            Instruction::Return => {
                self.program_counter = self.stack.pop(pc)?;
            }
            Instruction::Jump { nnn } => self.program_counter = nnn,
            Instruction::Call { nnn } => {
                self.stack.push(self.program_counter, pc)?;
                self.program_counter = nnn;
            }
            Instruction::SkipIfEqual { x, kk } => self.skip_if(v(x) == kk),
            Instruction::SkipIfNotEqual { x, kk } => self.skip_if(v(x) != kk),
            Instruction::SkipIfRegistersEqual { x, y } => self.skip_if(v(x) == v(y)),
            Instruction::Load { x, kk } => self.registers.set_register(x, kk),
            Instruction::Add { x, kk } => self.registers.set_register(x, v(x).wrapping_add(kk)),
            Instruction::Move { x, y } => self.registers.set_register(x, v(y)),
            Instruction::Or { x, y } => self.registers.set_register(x, v(x) | v(y)),
            Instruction::And { x, y } => self.registers.set_register(x, v(x) & v(y)),
            Instruction::Xor { x, y } => self.registers.set_register(x, v(x) ^ v(y)),
            // the flag is written last, so it wins when x is 0xF
            Instruction::AddRegisters { x, y } => {
                let (sum, carry) = v(x).overflowing_add(v(y));
                self.registers.set_register(x, sum);
                self.registers.set_flag(carry);
            }
            Instruction::Sub { x, y } => {
                self.registers.set_register(x, v(x).wrapping_sub(v(y)));
                self.registers.set_flag(v(x) > v(y));
            }
            Instruction::ShiftRight { x, y } => {
                let source = self.shift_source(x, y);
                self.registers.set_register(x, source >> 1);
                self.registers.set_flag(source & 1 == 1);
            }
            Instruction::SubReversed { x, y } => {
                self.registers.set_register(x, v(y).wrapping_sub(v(x)));
                self.registers.set_flag(v(y) > v(x));
            }
            Instruction::ShiftLeft { x, y } => {
                let source = self.shift_source(x, y);
                self.registers.set_register(x, source << 1);
                self.registers.set_flag(source >> 7 == 1);
            }
            Instruction::SkipIfRegistersNotEqual { x, y } => self.skip_if(v(x) != v(y)),
            Instruction::SetIndex { nnn } => self.registers.set_index_register(nnn),
            Instruction::JumpPlusV0 { nnn } => self.program_counter = nnn + u16::from(v(0)),
            Instruction::Random { x, kk } => {
                let random_byte: u8 = self.rng.random();
                self.registers.set_register(x, random_byte & kk);
            }
            Instruction::Draw { x, y, n } => {
                let sprite = self.memory.read(registers.get_index_register(), n as usize)?;
                let erased = self.display.draw(v(x), v(y), sprite);
                self.registers.set_flag(erased);
            }
            Instruction::SkipIfPressed { x } => self.skip_if(self.keypad.is_down(v(x))),
            Instruction::SkipIfNotPressed { x } => self.skip_if(!self.keypad.is_down(v(x))),
            Instruction::ReadDelayTimer { x } => {
                self.registers.set_register(x, self.timers.delay.read());
            }
            Instruction::WaitForKey { x } => {
                // stay on this instruction until a key goes down
                self.program_counter = pc;
                self.key_destination = Some(x);
                self.keypad.begin_wait();
                debug!("waiting for a key for v{x:X}");
            }
            Instruction::SetDelayTimer { x } => self.timers.delay.set(v(x)),
            Instruction::SetSoundTimer { x } => self.timers.sound.set(v(x)),
            Instruction::AddToIndex { x } => {
                let index = registers.get_index_register();
                self.registers
                    .set_index_register(index.wrapping_add(u16::from(v(x))));
            }
            Instruction::SetIndexToDigit { x } => {
                //the sprite at *index* x, not location x.
                self.registers
                    .set_index_register(u16::from(v(x)) * FONT_SPRITE_BYTES);
            }
            Instruction::StoreBcd { x } => {
                let vx = v(x);
                let digits = [vx / 100, (vx / 10) % 10, vx % 10];
                self.memory.write(registers.get_index_register(), &digits)?;
            }
            Instruction::StoreRegisters { x } => {
                let values = registers.snapshot();
                self.memory
                    .write(registers.get_index_register(), &values[..=x as usize])?;
            }
            Instruction::LoadRegisters { x } => {
                let values = self
                    .memory
                    .read(registers.get_index_register(), x as usize + 1)?;
                for (register, value) in (0..=x).zip(values) {
                    self.registers.set_register(register, *value);
                }
            }
        }
        Ok(())
    }

    fn shift_source(&self, x: u8, y: u8) -> u8 {
        if self.config.quirks.shift_uses_vy {
            self.registers.get_register(y)
        } else {
            self.registers.get_register(x)
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
