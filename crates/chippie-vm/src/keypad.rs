use log::{debug, warn};

use crate::constants::NUM_KEYS;

/// The 16 key hexadecimal keypad.
///
/// The host owns what is pressed and reports it through [`Keypad::press`] and
/// [`Keypad::release`], the cpu only reads it. While a key wait is open the first up to down
/// transition is remembered, so a key that was already held when the wait began does not count.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    /// A list of "buttons", set to true when pressed, false otherwise
    keys: [bool; NUM_KEYS as usize],
    waiting: bool,
    edge: Option<u8>,
}

impl Keypad {
    pub fn press(&mut self, key: u8) {
        let Some(state) = self.keys.get_mut(key as usize) else {
            warn!("ignoring press of unknown key {key:#X}");
            return;
        };
        let was_down = std::mem::replace(state, true);
        if self.waiting && !was_down && self.edge.is_none() {
            debug!("key {key:X} went down while waiting");
            self.edge = Some(key);
        }
    }

    pub fn release(&mut self, key: u8) {
        match self.keys.get_mut(key as usize) {
            Some(state) => *state = false,
            None => warn!("ignoring release of unknown key {key:#X}"),
        }
    }

    /// Keys outside of the keypad are never down
    pub fn is_down(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    /// Starts listening for the next key to go down
    pub fn begin_wait(&mut self) {
        self.waiting = true;
        self.edge = None;
    }

    /// Ends the wait if a key went down since it began, returning that key
    pub fn take_edge(&mut self) -> Option<u8> {
        let key = self.edge.take()?;
        self.waiting = false;
        Some(key)
    }
}
