//! Byte-at-a-time parser for `$CMD,DATA*CS\n` frames, the framing used by
//! NMEA sentences and many AT-style sensor protocols.

use crate::error::{DrillError, Result};
use std::borrow::Cow;
use std::fmt;

pub const MAX_COMMAND_LEN: usize = 15;
pub const MAX_DATA_LEN: usize = 63;
pub const MAX_CHECKSUM_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    WaitStart,
    ReadCommand,
    ReadData,
    ReadChecksum,
    Complete,
    Error,
}

impl ParseState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ParseState::Complete | ParseState::Error)
    }
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ParseState::WaitStart => "WAIT_START",
            ParseState::ReadCommand => "READ_CMD",
            ParseState::ReadData => "READ_DATA",
            ParseState::ReadChecksum => "READ_CS",
            ParseState::Complete => "COMPLETE",
            ParseState::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Fields hold the bytes exactly as received; the `*_text` accessors are for
/// display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: Vec<u8>,
    pub data: Vec<u8>,
    pub checksum: Vec<u8>,
}

impl Frame {
    /// Parses one complete frame, ignoring any bytes after its terminator.
    pub fn parse(input: &[u8]) -> Result<Frame> {
        let mut parser = FrameParser::new();
        let state = parser.feed(input);
        parser
            .frame()
            .ok_or_else(|| DrillError::Parse(format!("frame ended in state {state}")))
    }

    pub fn command_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.command)
    }

    pub fn data_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// XOR of every byte between `$` and `*`, the comma included.
    pub fn computed_checksum(&self) -> u8 {
        self.command
            .iter()
            .chain(std::iter::once(&b','))
            .chain(self.data.iter())
            .fold(0, |acc, &b| acc ^ b)
    }

    /// True when the transmitted hex checksum matches the computed one.
    pub fn checksum_valid(&self) -> bool {
        std::str::from_utf8(&self.checksum)
            .ok()
            .and_then(|text| u8::from_str_radix(text, 16).ok())
            .map_or(false, |cs| cs == self.computed_checksum())
    }
}

#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    command: Vec<u8>,
    data: Vec<u8>,
    checksum: Vec<u8>,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub fn new() -> Self {
        FrameParser {
            state: ParseState::WaitStart,
            command: Vec::with_capacity(MAX_COMMAND_LEN),
            data: Vec::with_capacity(MAX_DATA_LEN),
            checksum: Vec::with_capacity(MAX_CHECKSUM_LEN),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = ParseState::WaitStart;
        self.command.clear();
        self.data.clear();
        self.checksum.clear();
    }

    /// Advances by one byte. Complete and Error absorb all input until `reset`.
    pub fn process_byte(&mut self, byte: u8) -> ParseState {
        self.state = match self.state {
            ParseState::WaitStart => {
                if byte == b'$' {
                    self.command.clear();
                    self.data.clear();
                    self.checksum.clear();
                    ParseState::ReadCommand
                } else {
                    ParseState::WaitStart
                }
            }
            ParseState::ReadCommand => match byte {
                b',' => ParseState::ReadData,
                _ => push_limited(&mut self.command, byte, MAX_COMMAND_LEN, ParseState::ReadCommand),
            },
            ParseState::ReadData => match byte {
                b'*' => ParseState::ReadChecksum,
                _ => push_limited(&mut self.data, byte, MAX_DATA_LEN, ParseState::ReadData),
            },
            ParseState::ReadChecksum => match byte {
                b'\n' | b'\r' => ParseState::Complete,
                _ => push_limited(
                    &mut self.checksum,
                    byte,
                    MAX_CHECKSUM_LEN,
                    ParseState::ReadChecksum,
                ),
            },
            terminal @ (ParseState::Complete | ParseState::Error) => terminal,
        };
        self.state
    }

    /// Feeds bytes until the input runs out or a terminal state is reached.
    pub fn feed(&mut self, bytes: &[u8]) -> ParseState {
        for &b in bytes {
            if self.process_byte(b).is_terminal() {
                break;
            }
        }
        self.state
    }

    pub fn frame(&self) -> Option<Frame> {
        if self.state != ParseState::Complete {
            return None;
        }
        Some(Frame {
            command: self.command.clone(),
            data: self.data.clone(),
            checksum: self.checksum.clone(),
        })
    }
}

fn push_limited(buf: &mut Vec<u8>, byte: u8, limit: usize, stay: ParseState) -> ParseState {
    if buf.len() < limit {
        buf.push(byte);
        stay
    } else {
        ParseState::Error
    }
}
