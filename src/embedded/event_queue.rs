//! Event-driven firmware skeleton: producers post events into a bounded
//! queue and a main loop dispatches them through a handler table. Handlers
//! may post follow-up events, which run after everything already queued.

use super::ring_buffer::RingBuffer;
use crate::error::Result;
use std::fmt;

pub const EVENT_QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ButtonPress,
    ButtonRelease,
    ButtonLongPress,
    ButtonDoublePress,
    ImuDataReady,
    ImuMotionDetected,
    ImuFallDetected,
    TempThreshold,
    TimerTick,
    TimerExpired,
    WatchdogWarning,
    BatteryLow,
    BatteryCritical,
    ChargerConnected,
    ChargerDisconnected,
    WifiConnected,
    WifiDisconnected,
    WifiScanComplete,
    MqttConnected,
    MqttMessage,
    StorageFull,
    StorageError,
    RecordingStart,
    RecordingStop,
    UploadComplete,
    Error,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        use EventKind::*;
        match self {
            ButtonPress => "BTN_PRESS",
            ButtonRelease => "BTN_RELEASE",
            ButtonLongPress => "BTN_LONG",
            ButtonDoublePress => "BTN_DOUBLE",
            ImuDataReady => "IMU_DATA",
            ImuMotionDetected => "IMU_MOTION",
            ImuFallDetected => "IMU_FALL",
            TempThreshold => "TEMP_THRESH",
            TimerTick => "TIMER_TICK",
            TimerExpired => "TIMER_EXP",
            WatchdogWarning => "WDT_WARN",
            BatteryLow => "BAT_LOW",
            BatteryCritical => "BAT_CRIT",
            ChargerConnected => "CHG_CONN",
            ChargerDisconnected => "CHG_DISC",
            WifiConnected => "WIFI_CONN",
            WifiDisconnected => "WIFI_DISC",
            WifiScanComplete => "WIFI_SCAN",
            MqttConnected => "MQTT_CONN",
            MqttMessage => "MQTT_MSG",
            StorageFull => "STOR_FULL",
            StorageError => "STOR_ERR",
            RecordingStart => "REC_START",
            RecordingStop => "REC_STOP",
            UploadComplete => "UPL_DONE",
            Error => "ERROR",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload carried alongside the event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventData {
    #[default]
    None,
    Imu { x: i16, y: i16, z: i16 },
    BatteryPercent(u8),
    Rssi(i8),
    ErrorCode(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub timestamp: u32,
    pub data: EventData,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Event {
            kind,
            timestamp: 0,
            data: EventData::None,
        }
    }

    pub fn with_data(kind: EventKind, data: EventData) -> Self {
        Event {
            data,
            ..Event::new(kind)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Recording,
    Uploading,
    Sleeping,
    Error,
}

// =============================================================================
// Milestone 1: Handlers and the dispatch table
// =============================================================================

type Handler = fn(&mut EventLoop, &Event);

struct HandlerEntry {
    kind: EventKind,
    name: &'static str,
    handler: Handler,
}

/// First entry matching the event's kind wins.
static HANDLERS: &[HandlerEntry] = &[
    HandlerEntry { kind: EventKind::ButtonPress, name: "button", handler: handle_button },
    HandlerEntry { kind: EventKind::ButtonLongPress, name: "button", handler: handle_button },
    HandlerEntry { kind: EventKind::ImuDataReady, name: "imu", handler: handle_imu },
    HandlerEntry { kind: EventKind::ImuFallDetected, name: "imu", handler: handle_imu },
    HandlerEntry { kind: EventKind::BatteryLow, name: "battery", handler: handle_battery },
    HandlerEntry { kind: EventKind::BatteryCritical, name: "battery", handler: handle_battery },
    HandlerEntry { kind: EventKind::ChargerConnected, name: "battery", handler: handle_battery },
    HandlerEntry { kind: EventKind::WifiConnected, name: "wifi", handler: handle_wifi },
    HandlerEntry { kind: EventKind::WifiDisconnected, name: "wifi", handler: handle_wifi },
    HandlerEntry { kind: EventKind::RecordingStart, name: "recording", handler: handle_recording },
    HandlerEntry { kind: EventKind::RecordingStop, name: "recording", handler: handle_recording },
    HandlerEntry { kind: EventKind::Error, name: "error", handler: handle_error },
];

fn handle_button(app: &mut EventLoop, event: &Event) {
    match event.kind {
        EventKind::ButtonPress => {
            app.note("short press");
            let follow_up = match app.state {
                AppState::Idle => Some(EventKind::RecordingStart),
                AppState::Recording => Some(EventKind::RecordingStop),
                _ => None,
            };
            if let Some(kind) = follow_up {
                app.post_follow_up(Event::new(kind));
            }
        }
        EventKind::ButtonLongPress => {
            app.note("long press, entering sleep");
            app.state = AppState::Sleeping;
        }
        _ => {}
    }
}

fn handle_imu(app: &mut EventLoop, event: &Event) {
    match (event.kind, event.data) {
        (EventKind::ImuDataReady, EventData::Imu { x, y, z }) => {
            app.note(format!("imu x={x} y={y} z={z}"))
        }
        (EventKind::ImuDataReady, _) => app.note("imu data without a sample"),
        (EventKind::ImuFallDetected, _) => app.note("fall detected"),
        _ => {}
    }
}

fn handle_battery(app: &mut EventLoop, event: &Event) {
    let percent = match event.data {
        EventData::BatteryPercent(p) => p,
        _ => 0,
    };
    match event.kind {
        EventKind::BatteryLow => app.note(format!("battery low: {percent}%")),
        EventKind::BatteryCritical => {
            app.note(format!("battery critical: {percent}%, stopping recording"));
            app.post_follow_up(Event::new(EventKind::RecordingStop));
        }
        EventKind::ChargerConnected => {
            app.note("charger connected, starting upload");
            app.state = AppState::Uploading;
        }
        _ => {}
    }
}

fn handle_wifi(app: &mut EventLoop, event: &Event) {
    match (event.kind, event.data) {
        (EventKind::WifiConnected, EventData::Rssi(rssi)) => {
            app.note(format!("wifi connected (rssi {rssi} dBm)"))
        }
        (EventKind::WifiConnected, _) => app.note("wifi connected"),
        (EventKind::WifiDisconnected, _) => app.note("wifi disconnected"),
        _ => {}
    }
}

fn handle_recording(app: &mut EventLoop, event: &Event) {
    match (event.kind, app.state) {
        (EventKind::RecordingStart, AppState::Idle) => {
            app.note("recording started");
            app.state = AppState::Recording;
        }
        (EventKind::RecordingStart, _) => app.note("cannot start recording, not idle"),
        (EventKind::RecordingStop, AppState::Recording) => {
            app.note("recording stopped");
            app.state = AppState::Idle;
        }
        _ => {}
    }
}

fn handle_error(app: &mut EventLoop, event: &Event) {
    let code = match event.data {
        EventData::ErrorCode(code) => code,
        _ => 0,
    };
    app.note(format!("error code {code}"));
    app.state = AppState::Error;
}

// =============================================================================
// Milestone 2: Queue and main loop
// =============================================================================

#[derive(Debug, Clone)]
pub struct EventLoop {
    state: AppState,
    queue: RingBuffer<Event, EVENT_QUEUE_CAPACITY>,
    dropped: usize,
    log: Vec<String>,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        EventLoop {
            state: AppState::Idle,
            queue: RingBuffer::new(),
            dropped: 0,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Events lost because the queue was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// What the handlers reported, in dispatch order.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// `CapacityExceeded` when the queue is full; the event is lost.
    pub fn post(&mut self, event: Event) -> Result<()> {
        let result = self.queue.put(event);
        if result.is_err() {
            self.dropped += 1;
        }
        result
    }

    fn post_follow_up(&mut self, event: Event) {
        if self.post(event).is_err() {
            self.note(format!("queue full, {} lost", event.kind));
        }
    }

    fn note(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// Runs the matching handler and returns its name, or `None` when no
    /// handler is registered for the event's kind.
    pub fn dispatch(&mut self, event: &Event) -> Option<&'static str> {
        let entry = HANDLERS.iter().find(|entry| entry.kind == event.kind)?;
        (entry.handler)(self, event);
        Some(entry.name)
    }

    /// Drains the queue, follow-ups included. Returns the kinds dispatched in
    /// order.
    pub fn run_pending(&mut self) -> Vec<EventKind> {
        let mut dispatched = Vec::new();
        while let Some(event) = self.queue.get() {
            if self.dispatch(&event).is_none() {
                self.note(format!("no handler for {}", event.kind));
            }
            dispatched.push(event.kind);
        }
        dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrillError;

    #[test]
    fn test_button_press_starts_recording_after_queued_events() {
        let mut app = EventLoop::new();
        app.post(Event::new(EventKind::ButtonPress)).unwrap();
        app.post(Event::with_data(EventKind::BatteryLow, EventData::BatteryPercent(15)))
            .unwrap();

        let order = app.run_pending();
        assert_eq!(
            order,
            vec![EventKind::ButtonPress, EventKind::BatteryLow, EventKind::RecordingStart]
        );
        assert_eq!(app.state(), AppState::Recording);
        assert_eq!(app.log()[1], "battery low: 15%");
        assert_eq!(app.pending(), 0);
    }

    #[test]
    fn test_second_press_stops_recording() {
        let mut app = EventLoop::new();
        app.post(Event::new(EventKind::ButtonPress)).unwrap();
        app.run_pending();
        app.post(Event::new(EventKind::ButtonPress)).unwrap();
        app.run_pending();
        assert_eq!(app.state(), AppState::Idle);
        assert_eq!(app.log().last().map(String::as_str), Some("recording stopped"));
    }

    #[test]
    fn test_critical_battery_stops_recording() {
        let mut app = EventLoop::new();
        app.post(Event::new(EventKind::RecordingStart)).unwrap();
        app.post(Event::with_data(EventKind::BatteryCritical, EventData::BatteryPercent(3)))
            .unwrap();
        app.run_pending();
        assert_eq!(app.state(), AppState::Idle);
    }

    #[test]
    fn test_state_changing_events() {
        let mut app = EventLoop::new();
        assert_eq!(app.dispatch(&Event::new(EventKind::ChargerConnected)), Some("battery"));
        assert_eq!(app.state(), AppState::Uploading);
        assert_eq!(app.dispatch(&Event::new(EventKind::ButtonLongPress)), Some("button"));
        assert_eq!(app.state(), AppState::Sleeping);
        let error = Event::with_data(EventKind::Error, EventData::ErrorCode(7));
        assert_eq!(app.dispatch(&error), Some("error"));
        assert_eq!(app.state(), AppState::Error);
        assert_eq!(app.log().last().map(String::as_str), Some("error code 7"));
    }

    #[test]
    fn test_unhandled_event() {
        let mut app = EventLoop::new();
        assert_eq!(app.dispatch(&Event::new(EventKind::TimerTick)), None);
        app.post(Event::new(EventKind::MqttMessage)).unwrap();
        assert_eq!(app.run_pending(), vec![EventKind::MqttMessage]);
        assert_eq!(app.log(), ["no handler for MQTT_MSG".to_string()]);
    }

    #[test]
    fn test_full_queue_drops_events() {
        let mut app = EventLoop::new();
        for _ in 0..EVENT_QUEUE_CAPACITY {
            app.post(Event::new(EventKind::TimerTick)).unwrap();
        }
        assert!(matches!(
            app.post(Event::new(EventKind::TimerTick)),
            Err(DrillError::CapacityExceeded { .. })
        ));
        assert_eq!(app.dropped(), 1);
        assert_eq!(app.pending(), EVENT_QUEUE_CAPACITY);
    }
}
