// Temperature sample encoding
//
// 13-bit mode: bits 15:3 are a two's complement code, 1/16 C per LSB, bits 2:0
// carry the T_LOW/T_HIGH/T_CRIT flags. 16-bit mode: the whole word is a two's
// complement code, 1/128 C per LSB.

use crate::config::Resolution;

const BIT13_SIGN: i32 = 0x1000;
const BIT13_RANGE: i32 = 8192;
const BIT13_LSB_PER_C: f32 = 16.0;

const BIT16_SIGN: i32 = 0x8000;
const BIT16_RANGE: i32 = 65536;
const BIT16_LSB_PER_C: f32 = 128.0;

/// Combine the MSB and LSB temperature registers
pub fn raw_from_bytes(bytes: [u8; 2]) -> u16 {
    (u16::from(bytes[0]) << 8) | u16::from(bytes[1])
}

/// Convert a raw sample to degrees C
pub fn decode(raw: u16, resolution: Resolution) -> f32 {
    match resolution {
        Resolution::Bits13 => {
            // drop the flag bits, then sign-extend the 13-bit code by hand
            let code = i32::from(raw >> 3);
            let val = if code & BIT13_SIGN != 0 {
                code - BIT13_RANGE
            } else {
                code
            };
            val as f32 / BIT13_LSB_PER_C
        }
        Resolution::Bits16 => {
            let code = i32::from(raw);
            let val = if code & BIT16_SIGN != 0 {
                code - BIT16_RANGE
            } else {
                code
            };
            val as f32 / BIT16_LSB_PER_C
        }
    }
}

/// Convert degrees C to the raw sample the device would report, rounding to
/// the nearest code and saturating at the ends of the range. Flag bits are 0.
pub fn encode(celsius: f32, resolution: Resolution) -> u16 {
    let (lsb_per_c, range) = match resolution {
        Resolution::Bits13 => (BIT13_LSB_PER_C, BIT13_RANGE),
        Resolution::Bits16 => (BIT16_LSB_PER_C, BIT16_RANGE),
    };

    let scaled = celsius * lsb_per_c;
    let code = if scaled >= 0.0 {
        (scaled + 0.5) as i32
    } else {
        (scaled - 0.5) as i32
    };
    let code = code.clamp(-(range / 2), range / 2 - 1);
    let unsigned = if code < 0 { code + range } else { code };

    match resolution {
        Resolution::Bits13 => (unsigned as u16) << 3,
        Resolution::Bits16 => unsigned as u16,
    }
}
