use super::{agree, check};
use crate::catalog::Demo;
use crate::config::DrillConfig;
use crate::embedded::crc;
use crate::embedded::debounce::{CounterDebouncer, ShiftDebouncer, TimeDebouncer};
use crate::embedded::endian;
use crate::embedded::event_queue::{AppState, Event, EventData, EventKind, EventLoop};
use crate::embedded::filter::{self, EmaFilter, MedianFilter, MovingAverage};
use crate::embedded::fixed_point::{self as fx, Q16_16};
use crate::embedded::memory_pool::{BitmapPool, SmallBlockPool};
use crate::embedded::protocol::{Frame, FrameParser, ParseState};
use crate::embedded::ring_buffer::RingBuffer;
use crate::embedded::state_machine::{DoorEvent, DoorLock, DoorState, LightEvent, TrafficLight};
use crate::embedded::timer::{SortedTimerList, TimerScheduler};
use crate::error::{DrillError, Result};
use crate::report::Reporter;

pub(super) static EMBEDDED: &[Demo] = &[
    Demo {
        name: "ring_buffer",
        run: ring_buffer,
    },
    Demo {
        name: "state_machines",
        run: state_machines,
    },
    Demo {
        name: "frame_parser",
        run: frame_parser,
    },
    Demo {
        name: "endian",
        run: endianness,
    },
    Demo {
        name: "crc",
        run: checksums,
    },
    Demo {
        name: "fixed_point",
        run: fixed_point,
    },
    Demo {
        name: "debounce",
        run: debounce,
    },
    Demo {
        name: "filters",
        run: filters,
    },
    Demo {
        name: "memory_pool",
        run: memory_pool,
    },
    Demo {
        name: "timers",
        run: timers,
    },
    Demo {
        name: "event_loop",
        run: event_loop,
    },
];

fn ring_buffer(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut rb: RingBuffer<u8, 4> = RingBuffer::new();
    for byte in 1..=4 {
        rb.put(byte)?;
    }
    check(r, "put into full buffer rejected", rb.put(5).is_err(), true)?;
    check(r, "overwrite drops oldest", rb.put_overwrite(5), Some(1))?;
    check(r, "contents", rb.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5])?;
    check(r, "get", rb.get(), Some(2))?;
    check(r, "len", rb.len(), 3)
}

fn state_machines(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut light = TrafficLight::new();
    for _ in 0..3 {
        let step = light.handle(LightEvent::Timeout);
        r.line("light", step);
    }
    r.ok(&format!("back to {}", light.state()));

    let mut door = DoorLock::new();
    let script = [
        DoorEvent::CorrectCode,
        DoorEvent::Timeout,
        DoorEvent::WrongCode,
        DoorEvent::WrongCode,
        DoorEvent::WrongCode,
        DoorEvent::CorrectCode,
        DoorEvent::Reset,
    ];
    for event in script {
        let step = door.process(event);
        r.line("door", format!("{step} ({:?})", door.last_action()));
    }
    check(r, "door state", door.state(), DoorState::Locked)?;
    check(r, "wrong attempts after reset", door.wrong_attempts(), 0)
}

fn frame_parser(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut parser = FrameParser::new();
    let mut trace = Vec::new();
    for &byte in b"$LED,ON*60\n" {
        trace.push(parser.process_byte(byte).to_string());
    }
    r.detail(trace.join(" "));
    let frame = parser
        .frame()
        .ok_or_else(|| DrillError::Parse(format!("ended in {}", parser.state())))?;
    r.line("command", frame.command_text());
    r.line("data", frame.data_text());
    check(r, "checksum", frame.computed_checksum(), 0x60)?;
    check(r, "checksum valid", frame.checksum_valid(), true)?;

    let corrupted = Frame::parse(b"noise$LED,OFF*60\r\n")?;
    check(r, "corrupted checksum valid", corrupted.checksum_valid(), false)?;

    parser.reset();
    let oversized = [b"$".as_slice(), &[b'C'; 20]].concat();
    check(r, "oversized command", parser.feed(&oversized), ParseState::Error)?;
    check(r, "incomplete frame", Frame::parse(b"$LED,ON").is_err(), true)
}

fn endianness(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "swap16", endian::swap16(0x1234), 0x3412)?;
    check(r, "swap32", endian::swap32(0x1234_5678), 0x7856_3412)?;
    check(r, "swap64", endian::swap64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201)?;
    check(r, "ntoh(hton(x))", endian::ntoh32(endian::hton32(0xCAFE_F00D)), 0xCAFE_F00D)?;
    check(r, "hton16 as bytes", endian::hton16(0x1234).to_ne_bytes(), [0x12, 0x34])?;

    let mut packet = [0u8; 6];
    endian::write_be32(&mut packet, 0xDEAD_BEEF)?;
    endian::write_le16(&mut packet[4..], 0x0102)?;
    check(r, "packet", packet, [0xDE, 0xAD, 0xBE, 0xEF, 0x02, 0x01])?;
    check(r, "read as LE 32", endian::read_le32(&packet)?, 0xEFBE_ADDE)?;
    check(r, "read BE 16 at 4", endian::read_be16(&packet[4..])?, 0x0201)?;
    check(r, "short read rejected", endian::read_be32(&packet[4..]).is_err(), true)
}

fn checksums(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let data = b"123456789";
    check(r, "CRC-8", crc::crc8(data), 0xF4)?;
    agree(r, "CRC-8 (bitwise, table)", crc::crc8(data), crc::crc8_table(data))?;
    check(r, "CRC-16/CCITT", crc::crc16_ccitt(data), 0x29B1)?;
    check(r, "CRC-32", crc::crc32(data), 0xCBF4_3926)
}

fn fixed_point(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let a = Q16_16::from_f32(3.25);
    let b = Q16_16::from_int(2);
    r.line("3.25 * 2", a * b);
    check(r, "3.25 * 2 as int", (a * b).to_int(), 6)?;
    check(r, "3.25 + 2", (a + b).to_f32(), 5.25)?;
    check(r, "3.25 - 2", (a - b).to_f32(), 1.25)?;
    check(r, "3.25 / 2", a.checked_div(b).map(Q16_16::to_f32), Some(1.625))?;
    check(r, "divide by zero", a.checked_div(Q16_16(0)), None)?;

    let fahrenheit = fx::celsius_to_fahrenheit(Q16_16::from_int(25));
    r.line("25 C in F", fahrenheit);
    check(r, "close to 77", (fahrenheit.to_f32() - 77.0).abs() < 0.01, true)?;

    // Q8.8: 1.5 * 2.0
    check(r, "Q8.8 multiply", fx::q8_8_mul(0x0180, 0x0200), 0x0300)?;
    check(r, "sin 30", fx::sin_q15(30), 16384)?;
    check(r, "sin 210", fx::sin_q15(210), -16384)?;
    check(r, "sin -90", fx::sin_q15(-90), -32767)
}

fn debounce(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    // (time in ms, raw level): bounces for 6 ms, then holds.
    let samples = [(0, true), (2, false), (4, true), (6, true), (15, true), (26, true), (40, true)];
    let mut timed = TimeDebouncer::default();
    let mut changes = Vec::new();
    for (now, raw) in samples {
        if timed.update(raw, now) {
            changes.push(now);
        }
    }
    check(r, "time debouncer changed at", changes, vec![26])?;

    let mut shift = ShiftDebouncer::new();
    let presses = [true, false, true, true, true, true, true, true, true, true]
        .into_iter()
        .filter(|&reading| shift.update(reading))
        .count();
    check(r, "shift debouncer presses", presses, 1)?;
    r.detail(format!("history {:#010b}", shift.history()));

    let mut counter = CounterDebouncer::new(4);
    let flips = [true, false, true, true, true, true, true]
        .into_iter()
        .filter(|&reading| counter.update(reading))
        .count();
    check(r, "counter debouncer changes", flips, 1)?;
    check(r, "pressed", (shift.is_pressed(), counter.state()), (true, true))
}

fn memory_pool(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut pool = SmallBlockPool::new();
    let a = pool.alloc()?;
    let b = pool.alloc()?;
    let c = pool.alloc()?;
    pool.block_mut(b)?[..5].copy_from_slice(b"hello");
    pool.free(b)?;
    check(r, "freed block reused", pool.alloc()?, b)?;
    check(r, "reused block zeroed", pool.block(b)?[0], 0)?;
    check(r, "double free rejected", pool.free(a).and_then(|_| pool.free(a)).is_err(), true)?;
    pool.free(c)?;
    r.line("allocated", pool.allocated());
    r.line("high water mark", pool.high_water_mark());

    let mut bitmap = BitmapPool::new();
    let first = bitmap.alloc()?;
    let run = bitmap.alloc_consecutive(4)?;
    r.line("bitmap", format!("{:#034b}", bitmap.bitmap()));
    check(r, "run starts at", run.index(), first.index() + 1)?;
    bitmap.free_consecutive(run, 4)?;
    check(r, "blocks in use", bitmap.allocated(), 1)
}

fn timers(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut sched = TimerScheduler::new();
    let led = sched.create("led")?;
    let timeout = sched.create("timeout")?;
    sched.start_periodic(led, 3)?;
    sched.start_oneshot(timeout, 5)?;

    let mut fired = Vec::new();
    for _ in 0..10 {
        sched.tick(1);
        for id in sched.process() {
            let name = sched.name(id).unwrap_or("?");
            r.detail(format!("t={} {name}", sched.now()));
            fired.push(format!("{}@{}", name, sched.now()));
        }
    }
    check(r, "scheduler firings", fired.join(" "), "led@3 timeout@5 led@6 led@9".to_string())?;

    let mut list = SortedTimerList::new();
    list.insert(10, 10, "sample")?;
    list.insert(15, 0, "report")?;
    let mut order = Vec::new();
    for now in [10, 15, 20] {
        order.extend(list.process(now));
    }
    check(r, "sorted list firings", order, vec!["sample", "report", "sample"])?;
    check(r, "next expiry", list.next_expiry(), Some(30))
}

fn filters(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let readings = [
        1000, 1020, 990, 1010, 1005, 995, 1015, 985, 1008, 1012, 998, 1002, 1018, 992, 1006, 1004,
    ];
    check(r, "16-sample oversample", filter::oversample(&readings), Some(1003))?;

    let mut ema = EmaFilter::with_initial(0.2, 1000.0)?;
    let noisy = [1050.0, 950.0, 1030.0, 970.0, 1010.0, 990.0, 1020.0, 980.0];
    for x in noisy {
        let smoothed = ema.update(x);
        r.detail(format!("{x:4.0} -> {smoothed:6.1}"));
    }
    let last = ema.value().unwrap_or_default();
    r.line("ema after 8 samples", format!("{last:.2}"));
    check(r, "ema settles near 998", (last - 997.93).abs() < 0.05, true)?;

    let mut average: MovingAverage<8> = MovingAverage::new();
    let mut median: MedianFilter<5> = MedianFilter::new();
    let signal = [10.0, 11.0, 100.0, 12.0, 13.0];
    let mut medians = Vec::new();
    for x in signal {
        average.update(x);
        medians.push(median.update(x));
    }
    check(r, "median output", medians, vec![10.0, 11.0, 11.0, 12.0, 12.0])?;
    check(r, "moving average", average.update(14.0), 160.0 / 6.0)
}

fn event_loop(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut app = EventLoop::new();
    app.post(Event::new(EventKind::ButtonPress))?;
    app.post(Event::with_data(
        EventKind::ImuDataReady,
        EventData::Imu { x: 100, y: -50, z: 980 },
    ))?;
    app.post(Event::with_data(EventKind::BatteryLow, EventData::BatteryPercent(15)))?;
    app.post(Event::with_data(EventKind::WifiConnected, EventData::Rssi(-65)))?;
    app.post(Event::new(EventKind::ButtonPress))?;

    let dispatched = app.run_pending();
    for line in app.log() {
        r.detail(line.as_str());
    }
    let names: Vec<&str> = dispatched.iter().map(|k| k.name()).collect();
    r.line("dispatched", names.join(" "));
    // Both presses see Idle, since the first follow-up runs after the queue.
    check(
        r,
        "dispatch order",
        dispatched,
        vec![
            EventKind::ButtonPress,
            EventKind::ImuDataReady,
            EventKind::BatteryLow,
            EventKind::WifiConnected,
            EventKind::ButtonPress,
            EventKind::RecordingStart,
            EventKind::RecordingStart,
        ],
    )?;
    check(r, "final state", app.state(), AppState::Recording)?;
    check(r, "events dropped", app.dropped(), 0)
}
