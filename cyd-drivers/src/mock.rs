//! Recording doubles for the HAL traits
//!
//! Lines, bus and clock all append to one shared log so tests can check
//! the exact interleaving of chip-select, D/C, bytes and delays.

extern crate std;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use cyd_hal::{Clock, OutputLine, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineId {
    DisplayCs,
    Dc,
    Rst,
    TouchCs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(LineId, bool),
    Write(Vec<u8>),
    Transfer(Vec<u8>),
    Flush,
    Sleep(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockLine {
    id: LineId,
    log: Log,
}

impl MockLine {
    pub fn new(id: LineId, log: &Log) -> Self {
        Self {
            id,
            log: log.clone(),
        }
    }
}

impl OutputLine for MockLine {
    fn set_high(&mut self) {
        self.log.borrow_mut().push(Event::Line(self.id, true));
    }

    fn set_low(&mut self) {
        self.log.borrow_mut().push(Event::Line(self.id, false));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockBus {
    log: Log,
    /// 12-bit readings returned by successive transfers
    readings: VecDeque<u16>,
    /// Fail the write/transfer with this index (0-based)
    fail_at: Option<usize>,
    ops: usize,
}

impl MockBus {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            readings: VecDeque::new(),
            fail_at: None,
            ops: 0,
        }
    }

    pub fn with_readings(log: &Log, readings: &[u16]) -> Self {
        let mut bus = Self::new(log);
        bus.readings.extend(readings.iter().copied());
        bus
    }

    pub fn fail_at(mut self, op: usize) -> Self {
        self.fail_at = Some(op);
        self
    }

    fn next_op(&mut self) -> Result<(), BusFault> {
        let op = self.ops;
        self.ops += 1;
        if self.fail_at == Some(op) {
            Err(BusFault)
        } else {
            Ok(())
        }
    }
}

impl Transport for MockBus {
    type Error = BusFault;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.next_op()?;
        self.log.borrow_mut().push(Event::Write(data.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.next_op()?;
        self.log.borrow_mut().push(Event::Transfer(write.to_vec()));

        // Left-align the reading one bit late, like the digitizer does
        let word = self.readings.pop_front().unwrap_or(0) << 3;
        let [hi, lo] = word.to_be_bytes();
        read.fill(0);
        if read.len() >= 3 {
            read[1] = hi;
            read[2] = lo;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Flush);
        Ok(())
    }
}

pub struct MockClock {
    log: Log,
    now: u64,
}

impl MockClock {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            now: 0,
        }
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now += ms as u64;
        self.log.borrow_mut().push(Event::Sleep(ms));
    }
}

/// Events with flushes removed
pub fn without_flushes(log: &Log) -> Vec<Event> {
    log.borrow()
        .iter()
        .filter(|e| **e != Event::Flush)
        .cloned()
        .collect()
}

/// Events inside each assertion of the given chip-select, flushes removed
pub fn transactions(log: &Log, cs: LineId) -> Vec<Vec<Event>> {
    let mut out = Vec::new();
    let mut current: Option<Vec<Event>> = None;

    for event in log.borrow().iter() {
        match event {
            Event::Line(id, false) if *id == cs => current = Some(Vec::new()),
            Event::Line(id, true) if *id == cs => {
                if let Some(done) = current.take() {
                    out.push(done);
                }
            }
            Event::Flush => {}
            other => {
                if let Some(tx) = current.as_mut() {
                    tx.push(other.clone());
                }
            }
        }
    }

    out
}

/// Every byte written (not transferred), in order
pub fn written_bytes(events: &[Event]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Write(bytes) => Some(bytes.as_slice()),
            _ => None,
        })
        .flatten()
        .copied()
        .collect()
}
