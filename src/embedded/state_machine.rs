use std::fmt;

/// One step taken by a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from: S,
    pub event: E,
    pub to: S,
}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for Transition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] + {} -> [{}]", self.from, self.event, self.to)
    }
}

// =============================================================================
// Milestone 1: Switch-based machine
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightEvent {
    Timeout,
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LightState::Red => "RED",
            LightState::Green => "GREEN",
            LightState::Yellow => "YELLOW",
        };
        f.write_str(name)
    }
}

impl fmt::Display for LightEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TIMEOUT")
    }
}

#[derive(Debug, Clone)]
pub struct TrafficLight {
    state: LightState,
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficLight {
    pub fn new() -> Self {
        TrafficLight {
            state: LightState::Red,
        }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn handle(&mut self, event: LightEvent) -> Transition<LightState, LightEvent> {
        let from = self.state;
        self.state = match (self.state, event) {
            (LightState::Red, LightEvent::Timeout) => LightState::Green,
            (LightState::Green, LightEvent::Timeout) => LightState::Yellow,
            (LightState::Yellow, LightEvent::Timeout) => LightState::Red,
        };
        Transition {
            from,
            event,
            to: self.state,
        }
    }
}

// =============================================================================
// Milestone 2: Table-driven machine
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Locked,
    Unlocked,
    Alarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    CorrectCode,
    WrongCode,
    LockCommand,
    Timeout,
    Reset,
}

impl DoorState {
    const COUNT: usize = 3;
}

impl DoorEvent {
    const COUNT: usize = 5;
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DoorState::Locked => "LOCKED",
            DoorState::Unlocked => "UNLOCKED",
            DoorState::Alarm => "ALARM",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DoorEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DoorEvent::CorrectCode => "CORRECT_CODE",
            DoorEvent::WrongCode => "WRONG_CODE",
            DoorEvent::LockCommand => "LOCK_CMD",
            DoorEvent::Timeout => "TIMEOUT",
            DoorEvent::Reset => "RESET",
        };
        f.write_str(name)
    }
}

/// Side effect attached to a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorAction {
    None,
    Unlock,
    Lock,
    CountWrongCode,
    RaiseAlarm,
    ResetAlarm,
}

#[derive(Debug, Clone, Copy)]
struct TableEntry {
    next: DoorState,
    action: DoorAction,
}

/// Wrong codes accepted before the next one raises the alarm.
const MAX_WRONG_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone)]
pub struct DoorLock {
    state: DoorState,
    wrong_attempts: u32,
    last_action: DoorAction,
    table: [[TableEntry; DoorEvent::COUNT]; DoorState::COUNT],
}

impl Default for DoorLock {
    fn default() -> Self {
        Self::new()
    }
}

impl DoorLock {
    pub fn new() -> Self {
        use DoorAction as A;
        use DoorEvent as E;
        use DoorState as S;

        let stay = |state| TableEntry {
            next: state,
            action: A::None,
        };
        let mut table = [
            [stay(S::Locked); E::COUNT],
            [stay(S::Unlocked); E::COUNT],
            [stay(S::Alarm); E::COUNT],
        ];

        let mut set = |state: S, event: E, next: S, action: A| {
            table[state as usize][event as usize] = TableEntry { next, action };
        };
        set(S::Locked, E::CorrectCode, S::Unlocked, A::Unlock);
        set(S::Locked, E::WrongCode, S::Locked, A::CountWrongCode);
        set(S::Unlocked, E::LockCommand, S::Locked, A::Lock);
        set(S::Unlocked, E::Timeout, S::Locked, A::Lock);
        set(S::Alarm, E::Reset, S::Locked, A::ResetAlarm);

        DoorLock {
            state: S::Locked,
            wrong_attempts: 0,
            last_action: A::None,
            table,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    pub fn last_action(&self) -> DoorAction {
        self.last_action
    }

    pub fn process(&mut self, event: DoorEvent) -> Transition<DoorState, DoorEvent> {
        let from = self.state;

        // Checked ahead of the table: the same (state, event) pair has two outcomes.
        let entry = if from == DoorState::Locked
            && event == DoorEvent::WrongCode
            && self.wrong_attempts >= MAX_WRONG_ATTEMPTS
        {
            TableEntry {
                next: DoorState::Alarm,
                action: DoorAction::RaiseAlarm,
            }
        } else {
            self.table[from as usize][event as usize]
        };

        self.apply(entry.action);
        self.state = entry.next;
        Transition {
            from,
            event,
            to: self.state,
        }
    }

    fn apply(&mut self, action: DoorAction) {
        match action {
            DoorAction::Unlock | DoorAction::ResetAlarm => self.wrong_attempts = 0,
            DoorAction::CountWrongCode => self.wrong_attempts += 1,
            DoorAction::None | DoorAction::Lock | DoorAction::RaiseAlarm => {}
        }
        self.last_action = action;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_light_cycle() {
        let mut light = TrafficLight::new();
        let seen: Vec<LightState> = (0..4)
            .map(|_| light.handle(LightEvent::Timeout).to)
            .collect();
        assert_eq!(
            seen,
            vec![
                LightState::Green,
                LightState::Yellow,
                LightState::Red,
                LightState::Green
            ]
        );
    }

    #[test]
    fn test_transition_display() {
        let mut light = TrafficLight::new();
        let t = light.handle(LightEvent::Timeout);
        assert_eq!(t.to_string(), "[RED] + TIMEOUT -> [GREEN]");
    }

    #[test]
    fn test_third_wrong_code_raises_alarm() {
        let mut lock = DoorLock::new();
        assert_eq!(lock.process(DoorEvent::WrongCode).to, DoorState::Locked);
        assert_eq!(lock.process(DoorEvent::WrongCode).to, DoorState::Locked);
        assert_eq!(lock.wrong_attempts(), 2);

        let t = lock.process(DoorEvent::WrongCode);
        assert_eq!(t.from, DoorState::Locked);
        assert_eq!(t.to, DoorState::Alarm);
        assert_eq!(lock.last_action(), DoorAction::RaiseAlarm);
    }

    #[test]
    fn test_alarm_ignores_everything_but_reset() {
        let mut lock = DoorLock::new();
        for _ in 0..3 {
            lock.process(DoorEvent::WrongCode);
        }
        assert_eq!(lock.process(DoorEvent::CorrectCode).to, DoorState::Alarm);
        assert_eq!(lock.last_action(), DoorAction::None);

        assert_eq!(lock.process(DoorEvent::Reset).to, DoorState::Locked);
        assert_eq!(lock.wrong_attempts(), 0);
        assert_eq!(lock.process(DoorEvent::CorrectCode).to, DoorState::Unlocked);
        assert_eq!(lock.process(DoorEvent::Timeout).to, DoorState::Locked);
    }

    #[test]
    fn test_correct_code_clears_attempts() {
        let mut lock = DoorLock::new();
        lock.process(DoorEvent::WrongCode);
        lock.process(DoorEvent::WrongCode);
        lock.process(DoorEvent::CorrectCode);
        assert_eq!(lock.wrong_attempts(), 0);
        assert_eq!(lock.process(DoorEvent::LockCommand).to, DoorState::Locked);
        assert_eq!(lock.process(DoorEvent::WrongCode).to, DoorState::Locked);
    }

    #[test]
    fn test_unlisted_pairs_stay_put() {
        let mut lock = DoorLock::new();
        assert_eq!(lock.process(DoorEvent::LockCommand).to, DoorState::Locked);
        assert_eq!(lock.process(DoorEvent::Reset).to, DoorState::Locked);
        lock.process(DoorEvent::CorrectCode);
        assert_eq!(lock.process(DoorEvent::CorrectCode).to, DoorState::Unlocked);
        assert_eq!(lock.process(DoorEvent::WrongCode).to, DoorState::Unlocked);
        assert_eq!(lock.wrong_attempts(), 0);
    }
}
