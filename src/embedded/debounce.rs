//! Filters for mechanical switch bounce. Each `update` takes one raw sample
//! and returns `true` only when the debounced state changes.

pub const DEFAULT_DEBOUNCE_MS: u32 = 20;

// =============================================================================
// Milestone 1: Time-based
// =============================================================================

/// Accepts a new level once the raw input has held it for `threshold_ms`.
#[derive(Debug, Clone)]
pub struct TimeDebouncer {
    threshold_ms: u32,
    stable: bool,
    last_raw: bool,
    last_change_ms: u32,
}

impl Default for TimeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl TimeDebouncer {
    pub fn new(threshold_ms: u32) -> Self {
        TimeDebouncer {
            threshold_ms,
            stable: false,
            last_raw: false,
            last_change_ms: 0,
        }
    }

    pub fn state(&self) -> bool {
        self.stable
    }

    /// `now_ms` is a free-running millisecond counter and may wrap.
    pub fn update(&mut self, raw: bool, now_ms: u32) -> bool {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_ms = now_ms;
        }
        let held_for = now_ms.wrapping_sub(self.last_change_ms);
        if held_for >= self.threshold_ms && raw != self.stable {
            self.stable = raw;
            return true;
        }
        false
    }
}

// =============================================================================
// Milestone 2: Shift register
// =============================================================================

/// Keeps the last eight samples; only eight agreeing samples change state.
#[derive(Debug, Clone, Default)]
pub struct ShiftDebouncer {
    history: u8,
    pressed: bool,
}

impl ShiftDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn history(&self) -> u8 {
        self.history
    }

    pub fn update(&mut self, reading: bool) -> bool {
        self.history = (self.history << 1) | reading as u8;
        let next = match self.history {
            0xFF => true,
            0x00 => false,
            _ => self.pressed,
        };
        let changed = next != self.pressed;
        self.pressed = next;
        changed
    }
}

// =============================================================================
// Milestone 3: Sample counter
// =============================================================================

/// Samples at a fixed rate and changes state after `required` consecutive
/// samples agree. With 5 ms sampling, `required = 4` gives a 20 ms window.
#[derive(Debug, Clone)]
pub struct CounterDebouncer {
    required: u8,
    candidate: bool,
    count: u8,
    stable: bool,
}

impl CounterDebouncer {
    pub fn new(required: u8) -> Self {
        CounterDebouncer {
            required,
            candidate: false,
            count: required,
            stable: false,
        }
    }

    pub fn state(&self) -> bool {
        self.stable
    }

    pub fn update(&mut self, reading: bool) -> bool {
        if reading != self.candidate {
            self.candidate = reading;
            self.count = 0;
            return false;
        }
        if self.count < self.required {
            self.count += 1;
        }
        if self.count >= self.required && self.candidate != self.stable {
            self.stable = self.candidate;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_debouncer_ignores_bounce() {
        let mut db = TimeDebouncer::default();
        assert!(!db.update(true, 0));
        assert!(!db.update(false, 3));
        assert!(!db.update(true, 6));
        assert!(!db.update(true, 20));
        assert!(db.update(true, 26));
        assert!(db.state());
        assert!(!db.update(true, 40));
    }

    #[test]
    fn test_time_debouncer_release() {
        let mut db = TimeDebouncer::new(10);
        db.update(true, 0);
        assert!(db.update(true, 10));
        assert!(!db.update(false, 15));
        assert!(db.update(false, 25));
        assert!(!db.state());
    }

    #[test]
    fn test_time_debouncer_counter_wrap() {
        let mut db = TimeDebouncer::new(20);
        let start = u32::MAX - 5;
        db.update(true, start);
        assert!(!db.update(true, start.wrapping_add(10)));
        assert!(db.update(true, start.wrapping_add(20)));
    }

    #[test]
    fn test_shift_debouncer() {
        let mut db = ShiftDebouncer::new();
        let bouncy_press = [true, false, true, true, true, true, true, true, true, true];
        for reading in bouncy_press {
            let changed = db.update(reading);
            if db.history() == 0xFF {
                assert!(changed);
            } else {
                assert!(!changed);
            }
        }
        assert!(db.is_pressed());

        for _ in 0..7 {
            assert!(!db.update(false));
        }
        assert!(db.update(false));
        assert!(!db.is_pressed());
    }

    #[test]
    fn test_counter_debouncer() {
        let mut db = CounterDebouncer::new(4);
        assert!(!db.update(true));
        assert!(!db.update(true));
        assert!(!db.update(false));
        for _ in 0..3 {
            assert!(!db.update(true));
        }
        assert!(!db.update(true));
        assert!(db.update(true));
        assert!(db.state());
        assert!(!db.update(true));
    }
}
