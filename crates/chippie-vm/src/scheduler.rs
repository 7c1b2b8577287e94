use std::time::{Duration, Instant};

use log::debug;

use crate::constants::{MAX_CATCH_UP_TICKS, TICK_INTERVAL};
use crate::cpu::Cpu;
use crate::error::Result;

/// Drives a [`Cpu`] from a single thread: every 1/60th of a second of wall clock time runs a
/// batch of instructions and then ticks the timers once.
///
/// Time is handed in by the host, so the timers run at the same rate no matter how fast the
/// instructions are. Time left over that doesn't make up a whole tick is kept for the next call.
/// After a long stall (a suspended host, a debugger) at most `MAX_CATCH_UP_TICKS` ticks are
/// run and the rest of the backlog is dropped.
#[derive(Debug)]
pub struct Scheduler {
    instructions_per_tick: usize,
    pending: Duration,
    last: Option<Instant>,
}

impl Scheduler {
    pub fn new(instructions_per_tick: usize) -> Self {
        Self {
            instructions_per_tick,
            pending: Duration::ZERO,
            last: None,
        }
    }

    /// Uses the batch size from the cpu's config
    pub fn for_cpu(cpu: &Cpu) -> Self {
        Self::new(cpu.config().instructions_per_tick)
    }

    /// Catches the cpu up with `elapsed` more time, returning how many ticks happened
    pub fn advance(&mut self, cpu: &mut Cpu, elapsed: Duration) -> Result<u32> {
        self.pending += elapsed;
        let max_pending = TICK_INTERVAL * MAX_CATCH_UP_TICKS;
        if self.pending > max_pending {
            debug!(
                "dropping {:?} of backlog after a stall",
                self.pending - max_pending
            );
            self.pending = max_pending;
        }
        let mut ticks = 0;
        while self.pending >= TICK_INTERVAL {
            self.pending -= TICK_INTERVAL;
            // the timers keep going while the program waits for a key
            cpu.run(self.instructions_per_tick)?;
            cpu.tick_timers();
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Like [`Scheduler::advance`], measuring the time since the previous call. The first call
    /// only starts the clock
    pub fn advance_to(&mut self, cpu: &mut Cpu, now: Instant) -> Result<u32> {
        let elapsed = match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.advance(cpu, elapsed)
    }

    /// Time until the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        TICK_INTERVAL.saturating_sub(self.pending)
    }
}
