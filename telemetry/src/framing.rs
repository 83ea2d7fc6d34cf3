// The firmware writes bare Reading structs with no delimiter, so packets are
// framed by waiting for the serial line to go idle.

use std::time::{Duration, Instant};

use adt7410::frame::{Reading, READING_LEN};
use zerocopy::FromBytes;

pub const IDLE_GAP: Duration = Duration::from_millis(10);

pub struct Framer {
    buf: Vec<u8>,
    last_rx: Instant,
    idle_gap: Duration,
}

impl Framer {
    pub fn new(idle_gap: Duration) -> Self {
        Self {
            buf: Vec::new(),
            last_rx: Instant::now(),
            idle_gap,
        }
    }

    pub fn push(&mut self, bytes: &[u8], now: Instant) {
        if bytes.is_empty() {
            return;
        }
        self.buf.extend_from_slice(bytes);
        self.last_rx = now;
    }

    /// Hand out everything received so far once the line has been quiet for the idle gap
    pub fn poll(&mut self, now: Instant) -> Option<Vec<u8>> {
        if self.buf.is_empty() || now.duration_since(self.last_rx) < self.idle_gap {
            return None;
        }
        Some(std::mem::take(&mut self.buf))
    }
}

/// Anything that isn't exactly one Reading long is treated as console text
pub fn parse(packet: &[u8]) -> Option<Reading> {
    if packet.len() != READING_LEN {
        return None;
    }
    Reading::read_from_bytes(packet).ok()
}
