use crate::constants::{INSTRUCTIONS_PER_TICK, STACK_DEPTH};

/// Behaviour that differs between chip8 interpreters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quirks {
    /// 8xy6 and 8xyE shift vy and store the result in vx, instead of shifting vx in place.
    /// Off by default; some older roms expect it
    pub shift_uses_vy: bool,
}

/// How the cpu should run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How many instructions run between two timer ticks
    pub instructions_per_tick: usize,
    /// How many nested subroutine calls are allowed
    pub stack_depth: usize,
    /// Seed for the random number generator behind cxkk. Pick one to make runs reproducible
    pub rng_seed: Option<u64>,
    pub quirks: Quirks,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instructions_per_tick: INSTRUCTIONS_PER_TICK,
            stack_depth: STACK_DEPTH,
            rng_seed: None,
            quirks: Quirks::default(),
        }
    }
}

impl Config {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
