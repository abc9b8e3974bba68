//! Software timers driven by a tick counter.

use crate::error::{DrillError, Result};

pub const MAX_TIMERS: usize = 16;

/// `now` has reached `expires` even if the tick counter wrapped in between,
/// as long as the two are less than 2^31 ticks apart.
pub fn is_expired(now: u32, expires: u32) -> bool {
    now.wrapping_sub(expires) as i32 >= 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(usize);

impl TimerId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    OneShot,
    Periodic { interval: u32 },
}

#[derive(Debug, Clone)]
struct SoftTimer {
    name: String,
    mode: TimerMode,
    expires: u32,
    active: bool,
}

// =============================================================================
// Milestone 1: Table scheduler
// =============================================================================

/// Timers are polled in creation order on every `process` call.
#[derive(Debug, Clone, Default)]
pub struct TimerScheduler {
    timers: Vec<SoftTimer>,
    now: u32,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the tick counter somewhere other than 0, e.g. just below a wrap.
    pub fn starting_at(now: u32) -> Self {
        TimerScheduler {
            timers: Vec::new(),
            now,
        }
    }

    pub fn now(&self) -> u32 {
        self.now
    }

    pub fn create(&mut self, name: impl Into<String>) -> Result<TimerId> {
        if self.timers.len() >= MAX_TIMERS {
            return Err(DrillError::capacity(MAX_TIMERS));
        }
        self.timers.push(SoftTimer {
            name: name.into(),
            mode: TimerMode::OneShot,
            expires: 0,
            active: false,
        });
        Ok(TimerId(self.timers.len() - 1))
    }

    fn timer_mut(&mut self, id: TimerId) -> Result<&mut SoftTimer> {
        let len = self.timers.len();
        self.timers
            .get_mut(id.0)
            .ok_or_else(|| DrillError::out_of_range(id.0, len))
    }

    pub fn start_oneshot(&mut self, id: TimerId, delay: u32) -> Result<()> {
        let now = self.now;
        let timer = self.timer_mut(id)?;
        timer.mode = TimerMode::OneShot;
        timer.expires = now.wrapping_add(delay);
        timer.active = true;
        Ok(())
    }

    pub fn start_periodic(&mut self, id: TimerId, interval: u32) -> Result<()> {
        if interval == 0 {
            return Err(DrillError::invalid_argument("interval", "must be non-zero"));
        }
        let now = self.now;
        let timer = self.timer_mut(id)?;
        timer.mode = TimerMode::Periodic { interval };
        timer.expires = now.wrapping_add(interval);
        timer.active = true;
        Ok(())
    }

    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        self.timer_mut(id)?.active = false;
        Ok(())
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id.0).map_or(false, |t| t.active)
    }

    pub fn name(&self, id: TimerId) -> Option<&str> {
        self.timers.get(id.0).map(|t| t.name.as_str())
    }

    /// Advances the tick counter, wrapping at `u32::MAX`.
    pub fn tick(&mut self, ticks: u32) {
        self.now = self.now.wrapping_add(ticks);
    }

    /// Fires every expired timer once. Periodic timers re-arm relative to
    /// the current tick; one-shots go inactive.
    pub fn process(&mut self) -> Vec<TimerId> {
        let now = self.now;
        let mut fired = Vec::new();
        for (i, timer) in self.timers.iter_mut().enumerate() {
            if !timer.active || !is_expired(now, timer.expires) {
                continue;
            }
            fired.push(TimerId(i));
            match timer.mode {
                TimerMode::Periodic { interval } => timer.expires = now.wrapping_add(interval),
                TimerMode::OneShot => timer.active = false,
            }
        }
        fired
    }
}

// =============================================================================
// Milestone 2: Sorted timer list
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEntry<T> {
    pub expires: u32,
    /// 0 for one-shot entries.
    pub interval: u32,
    pub payload: T,
}

/// Entries kept ordered by expiry so `process` only looks at the front.
#[derive(Debug, Clone)]
pub struct SortedTimerList<T> {
    entries: Vec<TimerEntry<T>>,
}

impl<T> Default for SortedTimerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedTimerList<T> {
    pub fn new() -> Self {
        SortedTimerList {
            entries: Vec::with_capacity(MAX_TIMERS),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_expiry(&self) -> Option<u32> {
        self.entries.first().map(|e| e.expires)
    }

    /// Lands after any entries with the same expiry, so equal deadlines
    /// fire in insertion order. Ordering uses the same wrapping distance as
    /// `is_expired`, so deadlines on both sides of a tick wrap stay in order.
    pub fn insert(&mut self, expires: u32, interval: u32, payload: T) -> Result<()> {
        if self.entries.len() >= MAX_TIMERS {
            return Err(DrillError::capacity(MAX_TIMERS));
        }
        let at = self
            .entries
            .partition_point(|e| is_expired(expires, e.expires));
        self.entries.insert(
            at,
            TimerEntry {
                expires,
                interval,
                payload,
            },
        );
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimerEntry<T>> {
        self.entries.iter()
    }
}

impl<T: Clone> SortedTimerList<T> {
    /// Pops expired entries from the front and returns their payloads in
    /// firing order. Periodic entries are re-inserted at `now + interval`.
    pub fn process(&mut self, now: u32) -> Vec<T> {
        let mut fired = Vec::new();
        while self
            .entries
            .first()
            .map_or(false, |e| is_expired(now, e.expires))
        {
            let entry = self.entries.remove(0);
            fired.push(entry.payload.clone());
            if entry.interval > 0 {
                // The popped slot is free again, so the insert cannot overflow.
                let _ = self.insert(now.wrapping_add(entry.interval), entry.interval, entry.payload);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired_across_wrap() {
        assert!(is_expired(10, 10));
        assert!(is_expired(11, 10));
        assert!(!is_expired(9, 10));
        assert!(is_expired(5, u32::MAX - 5));
        assert!(!is_expired(u32::MAX - 5, 5));
    }

    #[test]
    fn test_oneshot_and_periodic() {
        let mut sched = TimerScheduler::new();
        let led = sched.create("led").unwrap();
        let timeout = sched.create("timeout").unwrap();
        sched.start_periodic(led, 3).unwrap();
        sched.start_oneshot(timeout, 5).unwrap();

        let mut log = Vec::new();
        for _ in 0..10 {
            sched.tick(1);
            for id in sched.process() {
                log.push((sched.now(), sched.name(id).unwrap().to_string()));
            }
        }
        let expected: Vec<(u32, String)> = vec![
            (3, "led".into()),
            (5, "timeout".into()),
            (6, "led".into()),
            (9, "led".into()),
        ];
        assert_eq!(log, expected);
        assert!(!sched.is_active(timeout));
        assert!(sched.is_active(led));
    }

    #[test]
    fn test_stop_and_restart() {
        let mut sched = TimerScheduler::new();
        let t = sched.create("t").unwrap();
        sched.start_oneshot(t, 2).unwrap();
        sched.stop(t).unwrap();
        sched.tick(5);
        assert!(sched.process().is_empty());

        sched.start_oneshot(t, 0).unwrap();
        assert_eq!(sched.process(), vec![t]);
        assert!(sched.start_periodic(t, 0).is_err());
        assert!(sched.stop(TimerId(7)).is_err());
    }

    #[test]
    fn test_capacity() {
        let mut sched = TimerScheduler::new();
        for i in 0..MAX_TIMERS {
            sched.create(format!("t{i}")).unwrap();
        }
        assert!(matches!(
            sched.create("overflow"),
            Err(DrillError::CapacityExceeded { capacity: MAX_TIMERS })
        ));
    }

    #[test]
    fn test_scheduler_survives_tick_wrap() {
        let mut sched = TimerScheduler::starting_at(u32::MAX - 1);
        let t = sched.create("wrap").unwrap();
        sched.start_oneshot(t, 4).unwrap();
        sched.tick(3);
        assert!(sched.process().is_empty());
        sched.tick(1);
        assert_eq!(sched.process(), vec![t]);
        assert_eq!(sched.now(), 2);
    }

    #[test]
    fn test_sorted_list_order_and_ties() {
        let mut list = SortedTimerList::new();
        list.insert(30, 0, "c").unwrap();
        list.insert(10, 0, "a").unwrap();
        list.insert(30, 0, "d").unwrap();
        list.insert(20, 0, "b").unwrap();
        let order: Vec<_> = list.iter().map(|e| e.payload).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert_eq!(list.next_expiry(), Some(10));

        assert_eq!(list.process(25), vec!["a", "b"]);
        assert_eq!(list.process(30), vec!["c", "d"]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_sorted_list_periodic_reinsert() {
        let mut list = SortedTimerList::new();
        list.insert(5, 5, "sensor").unwrap();
        list.insert(12, 0, "once").unwrap();

        assert_eq!(list.process(5), vec!["sensor"]);
        assert_eq!(list.next_expiry(), Some(10));
        assert_eq!(list.process(12), vec!["sensor", "once"]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.next_expiry(), Some(17));
    }

    #[test]
    fn test_sorted_list_across_tick_wrap() {
        let now = 0xFFFF_FFF0u32;
        let mut list = SortedTimerList::new();
        list.insert(now.wrapping_add(21), 0, "after_wrap").unwrap();
        list.insert(now.wrapping_add(10), 0, "before_wrap").unwrap();
        list.insert(now.wrapping_add(4), 6, "periodic").unwrap();

        let order: Vec<_> = list.iter().map(|e| e.payload).collect();
        assert_eq!(order, vec!["periodic", "before_wrap", "after_wrap"]);

        assert_eq!(list.process(now.wrapping_add(4)), vec!["periodic"]);
        assert_eq!(list.process(now.wrapping_add(12)), vec!["before_wrap", "periodic"]);
        // Re-armed at now + 18, which is 2 after the wrap.
        assert_eq!(list.next_expiry(), Some(now.wrapping_add(18)));
        assert_eq!(list.next_expiry(), Some(2));
        assert_eq!(list.process(now.wrapping_add(21)), vec!["periodic", "after_wrap"]);
    }
}
