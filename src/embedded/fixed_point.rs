//! Integer-only fractional arithmetic for targets without an FPU.

use std::fmt;
use std::ops::{Add, Mul, Sub};

pub const FRACTION_BITS: u32 = 16;
const SCALE: f32 = (1u32 << FRACTION_BITS) as f32;

/// Signed Q16.16: 16 integer bits, 16 fractional bits.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Q16_16(pub i32);

impl Q16_16 {
    pub const ONE: Q16_16 = Q16_16(1 << FRACTION_BITS);

    pub const fn from_int(n: i32) -> Self {
        Q16_16(n << FRACTION_BITS)
    }

    /// Truncates toward zero; out-of-range values saturate.
    pub fn from_f32(x: f32) -> Self {
        Q16_16((x * SCALE) as i32)
    }

    /// Arithmetic shift, so negative values round toward negative infinity.
    pub const fn to_int(self) -> i32 {
        self.0 >> FRACTION_BITS
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / SCALE
    }

    /// `(a << 16) / b` in 64 bits; `None` for a zero divisor.
    pub fn checked_div(self, rhs: Q16_16) -> Option<Q16_16> {
        if rhs.0 == 0 {
            return None;
        }
        let wide = ((self.0 as i64) << FRACTION_BITS) / rhs.0 as i64;
        Some(Q16_16(wide as i32))
    }
}

impl Add for Q16_16 {
    type Output = Q16_16;

    fn add(self, rhs: Q16_16) -> Q16_16 {
        Q16_16(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Q16_16 {
    type Output = Q16_16;

    fn sub(self, rhs: Q16_16) -> Q16_16 {
        Q16_16(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Q16_16 {
    type Output = Q16_16;

    /// The raw product has 32 fractional bits; it needs 64 bits before the shift back.
    fn mul(self, rhs: Q16_16) -> Q16_16 {
        let wide = self.0 as i64 * rhs.0 as i64;
        Q16_16((wide >> FRACTION_BITS) as i32)
    }
}

impl fmt::Display for Q16_16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4}", self.to_f32())
    }
}

/// Q8.8 multiply with a 32-bit intermediate.
pub fn q8_8_mul(a: i16, b: i16) -> i16 {
    ((a as i32 * b as i32) >> 8) as i16
}

pub fn celsius_to_fahrenheit(celsius: Q16_16) -> Q16_16 {
    let factor = Q16_16::from_f32(1.8);
    celsius * factor + Q16_16::from_int(32)
}

/// sin(0..=90 degrees) in Q15; 32767 stands in for 1.0.
#[rustfmt::skip]
const SIN_TABLE: [i16; 91] = [
    0, 572, 1144, 1715, 2286, 2856, 3425, 3993, 4560, 5126,
    5690, 6252, 6813, 7371, 7927, 8481, 9032, 9580, 10126, 10668,
    11207, 11743, 12275, 12803, 13328, 13848, 14365, 14876, 15384, 15886,
    16384, 16877, 17364, 17847, 18324, 18795, 19261, 19720, 20174, 20622,
    21063, 21498, 21926, 22348, 22763, 23170, 23571, 23965, 24351, 24730,
    25102, 25466, 25822, 26170, 26510, 26842, 27166, 27482, 27789, 28088,
    28378, 28660, 28932, 29197, 29452, 29698, 29935, 30163, 30382, 30592,
    30792, 30983, 31164, 31336, 31499, 31651, 31795, 31928, 32052, 32166,
    32270, 32365, 32449, 32524, 32588, 32643, 32688, 32723, 32748, 32763,
    32767,
];

/// Q15 sine of any whole-degree angle, folded onto the first quadrant.
pub fn sin_q15(angle_deg: i32) -> i16 {
    let mut angle = angle_deg.rem_euclid(360);
    let mut negate = false;
    if angle >= 180 {
        angle -= 180;
        negate = true;
    }
    if angle > 90 {
        angle = 180 - angle;
    }
    let value = SIN_TABLE[angle as usize];
    if negate {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Q16_16::from_int(3).0, 3 << 16);
        assert_eq!(Q16_16::from_f32(3.5).to_int(), 3);
        assert_eq!(Q16_16::from_f32(-1.5).to_int(), -2);
        assert!(close(Q16_16::from_f32(2.25).to_f32(), 2.25));
        assert_eq!(Q16_16::ONE, Q16_16::from_int(1));
    }

    #[test]
    fn test_arithmetic() {
        let a = Q16_16::from_f32(3.5);
        let b = Q16_16::from_f32(2.25);
        assert!(close((a + b).to_f32(), 5.75));
        assert!(close((a - b).to_f32(), 1.25));
        assert!(close((a * b).to_f32(), 7.875));
        assert!(close(a.checked_div(b).unwrap().to_f32(), 1.5556));
        assert_eq!(a.checked_div(Q16_16(0)), None);
        assert!(close((Q16_16::from_int(-2) * b).to_f32(), -4.5));
    }

    #[test]
    fn test_q8_8() {
        // 1.5 * 2.0 = 3.0
        assert_eq!(q8_8_mul(384, 512), 768);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let f = celsius_to_fahrenheit(Q16_16::from_int(25));
        assert!(close(f.to_f32(), 77.0));
        let f = celsius_to_fahrenheit(Q16_16::from_int(100));
        assert!(close(f.to_f32(), 212.0));
        let f = celsius_to_fahrenheit(Q16_16::from_int(-40));
        assert!(close(f.to_f32(), -40.0));
    }

    #[test]
    fn test_sin_q15() {
        assert_eq!(sin_q15(0), 0);
        assert_eq!(sin_q15(30), 16384);
        assert_eq!(sin_q15(90), 32767);
        assert_eq!(sin_q15(150), 16384);
        assert_eq!(sin_q15(180), 0);
        assert_eq!(sin_q15(270), -32767);
        assert_eq!(sin_q15(-90), -32767);
        assert_eq!(sin_q15(450), 32767);
        assert_eq!(sin_q15(210), -16384);
    }

    #[test]
    fn test_sin_table_is_monotonic() {
        assert!(SIN_TABLE.windows(2).all(|w| w[0] < w[1]));
    }
}
