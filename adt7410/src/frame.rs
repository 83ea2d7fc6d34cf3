// Sample record streamed from the firmware to the host

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::config::Resolution;
use crate::status::Status;
use crate::Sample;

/// One ready sample, sent as its in-memory byte image (both ends are little-endian)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout, Default)]
pub struct Reading {
    pub tick: u32,
    pub temperature_c: f32,
    pub raw: u16,
    pub config: u8,
    pub status: u8,
}

pub const READING_LEN: usize = core::mem::size_of::<Reading>();

impl Reading {
    pub fn from_sample(tick: u32, sample: &Sample) -> Self {
        Self {
            tick,
            temperature_c: sample.temperature_c,
            raw: sample.raw,
            config: sample.config,
            status: sample.status.0,
        }
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::from_word(self.config)
    }

    pub fn status(&self) -> Status {
        Status(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{decode, encode};

    #[test]
    fn reading_is_twelve_bytes() {
        assert_eq!(READING_LEN, 12);
    }

    #[test]
    fn reading_reads_back_from_its_bytes() {
        let raw = encode(-15.625, Resolution::Bits16);
        let sample = Sample {
            raw,
            config: 0x80,
            status: Status(0x20),
            temperature_c: decode(raw, Resolution::Bits16),
        };
        let reading = Reading::from_sample(42, &sample);

        let parsed = Reading::read_from_bytes(reading.as_bytes()).unwrap();
        assert_eq!(parsed, reading);
        assert_eq!(parsed.temperature_c, -15.625);
        assert_eq!(parsed.resolution(), Resolution::Bits16);
        assert!(parsed.status().t_high());
    }

    #[test]
    fn short_buffer_is_rejected() {
        let bytes = [0u8; READING_LEN - 1];
        assert!(Reading::read_from_bytes(&bytes).is_err());
    }
}
