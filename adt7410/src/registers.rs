// ADT7410 register map and raw configuration field values

/// Address with A0 and A1 tied low
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Expected contents of the ID register (manufacturer 0b11001, revision 0b011)
pub const DEVICE_ID: u8 = 0xCB;
/// The revision bits may change between silicon spins
pub const DEVICE_ID_MASK: u8 = 0xF8;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    TempMsb = 0x00,
    TempLsb = 0x01,
    Status = 0x02,
    Configuration = 0x03,
    THighMsb = 0x04,
    THighLsb = 0x05,
    TLowMsb = 0x06,
    TLowLsb = 0x07,
    TCritMsb = 0x08,
    TCritLsb = 0x09,
    THyst = 0x0A,
    WhoAmI = 0x0B,
    SoftwareReset = 0x2F,
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register as u8
    }
}

// Configuration register fields, already shifted into place.
// OR one value from each group together to build a configuration word.

pub const BIT13_RESOLUTION: u8 = 0x00;
pub const BIT16_RESOLUTION: u8 = 0x80;

pub const OP_MODE_CONTINUOUS: u8 = 0x00;
pub const OP_MODE_ONESHOT: u8 = 0x20;
pub const OP_MODE_SPS: u8 = 0x40;
pub const OP_MODE_SHUTDOWN: u8 = 0x60;

pub const INTERRUPT_MODE: u8 = 0x00;
pub const COMPARATOR_MODE: u8 = 0x10;

pub const INT_LOW: u8 = 0x00;
pub const INT_HIGH: u8 = 0x08;

pub const CT_LOW: u8 = 0x00;
pub const CT_HIGH: u8 = 0x04;

pub const FAULT_QUEUE_1: u8 = 0x00;
pub const FAULT_QUEUE_2: u8 = 0x01;
pub const FAULT_QUEUE_3: u8 = 0x02;
pub const FAULT_QUEUE_4: u8 = 0x03;

/// Status register: conversion still in progress (RDY is active low)
pub const STATUS_NOT_READY: u8 = 0x80;
/// Configuration register: 16-bit resolution selected
pub const RESOLUTION_MASK: u8 = 0x80;
