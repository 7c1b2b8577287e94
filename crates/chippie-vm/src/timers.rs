use log::trace;

/// A countdown that decrements once per tick while it is above zero.
///
/// Setting a non-zero value arms it, reaching zero disarms it again. The timer has no clock of its
/// own: whoever owns it calls [`Timer::tick`] sixty times per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    pub fn set(&mut self, value: u8) {
        self.value = value;
    }

    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn read(&self) -> u8 {
        self.value
    }

    /// Whether the timer is still counting down
    pub fn is_armed(&self) -> bool {
        self.value > 0
    }
}

/// The delay and sound timers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    /// 0 by default, unless its set to a number then it will just start decrementing by one 60
    /// times per second
    pub delay: Timer,
    /// Also decremented with 60hz when set to a number like the delay timer. Except the sound
    /// timer causes a beep when its not zero. So: quiet when 0, beeping when not 0
    pub sound: Timer,
}

impl Timers {
    pub fn tick(&mut self) {
        if !self.delay.is_armed() && !self.sound.is_armed() {
            return;
        }
        self.delay.tick();
        self.sound.tick();
        trace!(
            "timers ticked, delay {} sound {}",
            self.delay.read(),
            self.sound.read()
        );
    }
}
