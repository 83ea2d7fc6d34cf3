// Status register (0x02)

use bitfield::bitfield;

use crate::registers::STATUS_NOT_READY;

bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Status(u8);
    impl Debug;
    /// RDY bit, cleared by the device when a new conversion result is available
    pub not_ready, _: 7;
    pub t_crit, _: 6;
    pub t_high, _: 5;
    pub t_low, _: 4;
}

impl Status {
    /// A fresh sample can be read from the temperature registers
    pub fn is_ready(&self) -> bool {
        self.0 & STATUS_NOT_READY == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_iff_bit_7_clear() {
        assert!(Status(0x00).is_ready());
        assert!(Status(0x7F).is_ready());
        assert!(!Status(0x80).is_ready());
        assert!(!Status(0xFF).is_ready());
    }

    #[test]
    fn ready_agrees_with_rdy_field() {
        for byte in 0..=u8::MAX {
            assert_eq!(Status(byte).is_ready(), !Status(byte).not_ready());
        }
    }

    #[test]
    fn threshold_flags() {
        let status = Status(0x70);
        assert!(status.t_crit());
        assert!(status.t_high());
        assert!(status.t_low());
        assert!(status.is_ready());

        let status = Status(0x20);
        assert!(!status.t_crit());
        assert!(status.t_high());
        assert!(!status.t_low());
    }
}
