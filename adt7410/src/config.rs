// Configuration register (0x03) layout and typed field selections

use bitfield::bitfield;

use crate::registers::*;

bitfield! {
    /// Raw view of the configuration register
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Configuration(u8);
    impl Debug;
    pub resolution_16bit, set_resolution_16bit: 7;
    pub operation_mode, set_operation_mode: 6, 5;
    pub comparator_mode, set_comparator_mode: 4;
    pub int_active_high, set_int_active_high: 3;
    pub ct_active_high, set_ct_active_high: 2;
    pub fault_queue, set_fault_queue: 1, 0;
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// 0.0625 C per LSB, three flag bits at the bottom of the sample
    Bits13 = BIT13_RESOLUTION,
    /// 0.0078 C per LSB
    #[default]
    Bits16 = BIT16_RESOLUTION,
}

impl Resolution {
    /// Resolution selected by a configuration word
    pub fn from_word(word: u8) -> Self {
        if word & RESOLUTION_MASK != 0 {
            Resolution::Bits16
        } else {
            Resolution::Bits13
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingMode {
    #[default]
    Continuous = OP_MODE_CONTINUOUS,
    OneShot = OP_MODE_ONESHOT,
    /// One sample per second
    Sps = OP_MODE_SPS,
    Shutdown = OP_MODE_SHUTDOWN,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptMode {
    #[default]
    Interrupt = INTERRUPT_MODE,
    Comparator = COMPARATOR_MODE,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultQueue {
    #[default]
    One = FAULT_QUEUE_1,
    Two = FAULT_QUEUE_2,
    Three = FAULT_QUEUE_3,
    Four = FAULT_QUEUE_4,
}

/// One selection per configuration field.
///
/// The default is what the driver writes on construction: 16-bit resolution,
/// continuous conversion, interrupt mode, INT and CT active low, one fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub resolution: Resolution,
    pub operating_mode: OperatingMode,
    pub interrupt_mode: InterruptMode,
    pub int_polarity: Polarity,
    pub ct_polarity: Polarity,
    pub fault_queue: FaultQueue,
}

impl Config {
    /// Configuration word to write to the device. Every field owns its own
    /// bits, so the word is just the OR of the selected constants.
    pub fn word(&self) -> u8 {
        let int_polarity = match self.int_polarity {
            Polarity::ActiveLow => INT_LOW,
            Polarity::ActiveHigh => INT_HIGH,
        };
        let ct_polarity = match self.ct_polarity {
            Polarity::ActiveLow => CT_LOW,
            Polarity::ActiveHigh => CT_HIGH,
        };

        self.resolution as u8
            | self.fault_queue as u8
            | ct_polarity
            | int_polarity
            | self.interrupt_mode as u8
            | self.operating_mode as u8
    }

    /// Decode a configuration word read back from the device
    pub fn from_word(word: u8) -> Self {
        let reg = Configuration(word);

        let operating_mode = match reg.operation_mode() {
            0b00 => OperatingMode::Continuous,
            0b01 => OperatingMode::OneShot,
            0b10 => OperatingMode::Sps,
            _ => OperatingMode::Shutdown,
        };
        let fault_queue = match reg.fault_queue() {
            0b00 => FaultQueue::One,
            0b01 => FaultQueue::Two,
            0b10 => FaultQueue::Three,
            _ => FaultQueue::Four,
        };

        Self {
            resolution: Resolution::from_word(word),
            operating_mode,
            interrupt_mode: if reg.comparator_mode() {
                InterruptMode::Comparator
            } else {
                InterruptMode::Interrupt
            },
            int_polarity: polarity(reg.int_active_high()),
            ct_polarity: polarity(reg.ct_active_high()),
            fault_queue,
        }
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_operating_mode(mut self, mode: OperatingMode) -> Self {
        self.operating_mode = mode;
        self
    }

    pub fn with_interrupt_mode(mut self, mode: InterruptMode) -> Self {
        self.interrupt_mode = mode;
        self
    }

    pub fn with_int_polarity(mut self, polarity: Polarity) -> Self {
        self.int_polarity = polarity;
        self
    }

    pub fn with_ct_polarity(mut self, polarity: Polarity) -> Self {
        self.ct_polarity = polarity;
        self
    }

    pub fn with_fault_queue(mut self, faults: FaultQueue) -> Self {
        self.fault_queue = faults;
        self
    }
}

fn polarity(active_high: bool) -> Polarity {
    if active_high {
        Polarity::ActiveHigh
    } else {
        Polarity::ActiveLow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_word_is_16bit_continuous() {
        assert_eq!(Config::default().word(), 0x80);
    }

    #[test]
    fn fields_land_in_their_own_bits() {
        assert_eq!(
            Config::default().with_resolution(Resolution::Bits13).word(),
            0x00
        );

        let config = Config::default()
            .with_operating_mode(OperatingMode::OneShot)
            .with_fault_queue(FaultQueue::Four);
        assert_eq!(config.word(), 0xA3);

        let config = Config::default()
            .with_resolution(Resolution::Bits13)
            .with_operating_mode(OperatingMode::Shutdown)
            .with_interrupt_mode(InterruptMode::Comparator)
            .with_int_polarity(Polarity::ActiveHigh)
            .with_ct_polarity(Polarity::ActiveHigh)
            .with_fault_queue(FaultQueue::Three);
        assert_eq!(config.word(), 0x7E);
    }

    #[test]
    fn every_word_decodes_back_to_itself() {
        for word in 0..=u8::MAX {
            assert_eq!(Config::from_word(word).word(), word, "word {word:#04x}");
        }
    }

    #[test]
    fn bitfield_view_matches_typed_fields() {
        let mut reg = Configuration(0x00);
        reg.set_resolution_16bit(true);
        reg.set_operation_mode(0b10);
        reg.set_ct_active_high(true);
        assert_eq!(reg.0, BIT16_RESOLUTION | OP_MODE_SPS | CT_HIGH);

        let config = Config::from_word(reg.0);
        assert_eq!(config.resolution, Resolution::Bits16);
        assert_eq!(config.operating_mode, OperatingMode::Sps);
        assert_eq!(config.ct_polarity, Polarity::ActiveHigh);
        assert_eq!(config.int_polarity, Polarity::ActiveLow);
    }

    #[test]
    fn resolution_follows_bit_7_only() {
        assert_eq!(Resolution::from_word(0x80), Resolution::Bits16);
        assert_eq!(Resolution::from_word(0xFF), Resolution::Bits16);
        assert_eq!(Resolution::from_word(0x7F), Resolution::Bits13);
        assert_eq!(Resolution::from_word(0x00), Resolution::Bits13);
    }
}
