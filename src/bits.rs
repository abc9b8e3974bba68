//! Recursion warm-ups and bit manipulation on fixed-width integers.

use crate::error::{DrillError, Result};

// =============================================================================
// Milestone 1: Recursion vs iteration
// =============================================================================

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const FIBONACCI_MAX_EXACT: u32 = 93;

/// Largest `n` whose factorial fits in a `u64`.
pub const FACTORIAL_MAX_EXACT: u64 = 20;

/// Exponential-time recursion. Values past `fibonacci(93)` saturate at `u64::MAX`.
pub fn fibonacci_recursive(n: u32) -> u64 {
    if n > FIBONACCI_MAX_EXACT {
        return u64::MAX;
    }
    if n <= 1 {
        return n as u64;
    }
    fibonacci_recursive(n - 1).saturating_add(fibonacci_recursive(n - 2))
}

pub fn fibonacci_memo(n: u32) -> u64 {
    fn go(n: usize, memo: &mut Vec<Option<u64>>) -> u64 {
        if n <= 1 {
            return n as u64;
        }
        if let Some(v) = memo[n] {
            return v;
        }
        let v = go(n - 1, memo).saturating_add(go(n - 2, memo));
        memo[n] = Some(v);
        v
    }

    if n > FIBONACCI_MAX_EXACT {
        return u64::MAX;
    }
    let n = n as usize;
    let mut memo = vec![None; n + 1];
    go(n, &mut memo)
}

pub fn fibonacci_iterative(n: u32) -> u64 {
    if n > FIBONACCI_MAX_EXACT {
        return u64::MAX;
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 0..n {
        let next = prev.saturating_add(curr);
        prev = curr;
        curr = next;
    }
    prev
}

/// `None` once the result no longer fits in a `u64` (n > 20).
pub fn factorial_recursive(n: u64) -> Option<u64> {
    if n > FACTORIAL_MAX_EXACT {
        return None;
    }
    if n <= 1 {
        return Some(1);
    }
    factorial_recursive(n - 1)?.checked_mul(n)
}

pub fn factorial_iterative(n: u64) -> Option<u64> {
    if n > FACTORIAL_MAX_EXACT {
        return None;
    }
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

pub fn factorial_tail(n: u64) -> Option<u64> {
    fn go(n: u64, acc: u64) -> Option<u64> {
        if n <= 1 {
            return Some(acc);
        }
        go(n - 1, acc.checked_mul(n)?)
    }
    if n > FACTORIAL_MAX_EXACT {
        return None;
    }
    go(n, 1)
}

// =============================================================================
// Milestone 2: Powers of two and population count
// =============================================================================

pub fn is_power_of_two(n: u32) -> bool {
    n != 0 && n & (n - 1) == 0
}

pub fn is_power_of_two_count(n: u32) -> bool {
    count_set_bits_kernighan(n) == 1
}

pub fn is_power_of_two_division(mut n: u32) -> bool {
    if n == 0 {
        return false;
    }
    while n % 2 == 0 {
        n /= 2;
    }
    n == 1
}

pub fn count_set_bits_shift(mut n: u32) -> u32 {
    let mut count = 0;
    while n != 0 {
        count += n & 1;
        n >>= 1;
    }
    count
}

/// Clears the lowest set bit per iteration: loops once per set bit.
pub fn count_set_bits_kernighan(mut n: u32) -> u32 {
    let mut count = 0;
    while n != 0 {
        n &= n - 1;
        count += 1;
    }
    count
}

const NIBBLE_BITS: [u8; 16] = [0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4];

pub fn count_set_bits_lookup(mut n: u32) -> u32 {
    let mut count = 0;
    while n != 0 {
        count += NIBBLE_BITS[(n & 0xF) as usize] as u32;
        n >>= 4;
    }
    count
}

// =============================================================================
// Milestone 3: XOR tricks
// =============================================================================

pub fn swap_xor(a: &mut u32, b: &mut u32) {
    *a ^= *b;
    *b ^= *a;
    *a ^= *b;
}

pub fn swap_arithmetic(a: &mut i32, b: &mut i32) {
    *a = a.wrapping_add(*b);
    *b = a.wrapping_sub(*b);
    *a = a.wrapping_sub(*b);
}

/// Every value but one appears twice; pairs cancel under XOR.
pub fn single_number(arr: &[i32]) -> i32 {
    arr.iter().fold(0, |acc, &x| acc ^ x)
}

// =============================================================================
// Milestone 4: Single-bit operations
// =============================================================================

fn check_index(bit: u32) -> Result<u32> {
    if bit >= 32 {
        return Err(DrillError::invalid_argument("bit", format!("{bit} is not below 32")));
    }
    Ok(1 << bit)
}

pub fn set_bit(value: u32, bit: u32) -> Result<u32> {
    Ok(value | check_index(bit)?)
}

pub fn clear_bit(value: u32, bit: u32) -> Result<u32> {
    Ok(value & !check_index(bit)?)
}

pub fn toggle_bit(value: u32, bit: u32) -> Result<u32> {
    Ok(value ^ check_index(bit)?)
}

pub fn check_bit(value: u32, bit: u32) -> Result<bool> {
    Ok(value & check_index(bit)? != 0)
}

pub fn is_even(n: i32) -> bool {
    n & 1 == 0
}

pub fn is_odd(n: i32) -> bool {
    n & 1 == 1
}

// =============================================================================
// Milestone 5: Reversal and rotation
// =============================================================================

pub fn reverse_bits(mut n: u32) -> u32 {
    let mut result = 0;
    for _ in 0..32 {
        result = (result << 1) | (n & 1);
        n >>= 1;
    }
    result
}

/// Swaps progressively smaller halves: 16, 8, 4, 2, then single bits.
pub fn reverse_bits_fast(mut n: u32) -> u32 {
    n = (n >> 16) | (n << 16);
    n = ((n & 0xFF00_FF00) >> 8) | ((n & 0x00FF_00FF) << 8);
    n = ((n & 0xF0F0_F0F0) >> 4) | ((n & 0x0F0F_0F0F) << 4);
    n = ((n & 0xCCCC_CCCC) >> 2) | ((n & 0x3333_3333) << 2);
    ((n & 0xAAAA_AAAA) >> 1) | ((n & 0x5555_5555) << 1)
}

pub fn reverse_bits8(mut n: u8) -> u8 {
    let mut result = 0;
    for _ in 0..8 {
        result = (result << 1) | (n & 1);
        n >>= 1;
    }
    result
}

pub fn rotate_left32(value: u32, n: u32) -> u32 {
    let n = n % 32;
    if n == 0 {
        return value;
    }
    (value << n) | (value >> (32 - n))
}

pub fn rotate_right32(value: u32, n: u32) -> u32 {
    let n = n % 32;
    if n == 0 {
        return value;
    }
    (value >> n) | (value << (32 - n))
}

pub fn rotate_left8(value: u8, n: u32) -> u8 {
    let n = n % 8;
    if n == 0 {
        return value;
    }
    (value << n) | (value >> (8 - n))
}

pub fn rotate_right8(value: u8, n: u32) -> u8 {
    let n = n % 8;
    if n == 0 {
        return value;
    }
    (value >> n) | (value << (8 - n))
}

fn width_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

fn check_width(width: u32) -> Result<u32> {
    if width == 0 || width > 32 {
        return Err(DrillError::invalid_argument("width", "must be in 1..=32"));
    }
    Ok(width_mask(width))
}

/// Rotates the low `width` bits of `value`; higher bits are discarded.
pub fn rotate_left_width(value: u32, n: u32, width: u32) -> Result<u32> {
    let mask = check_width(width)?;
    let value = value & mask;
    let n = n % width;
    if n == 0 {
        return Ok(value);
    }
    Ok(((value << n) | (value >> (width - n))) & mask)
}

pub fn rotate_right_width(value: u32, n: u32, width: u32) -> Result<u32> {
    let mask = check_width(width)?;
    let value = value & mask;
    let n = n % width;
    if n == 0 {
        return Ok(value);
    }
    Ok(((value >> n) | (value << (width - n))) & mask)
}

// =============================================================================
// Milestone 6: Register fields and byte assembly
// =============================================================================

fn check_field(start: u32, width: u32) -> Result<u32> {
    if start.checked_add(width).map_or(true, |end| end > 32) {
        return Err(DrillError::invalid_argument(
            "field",
            format!("bits {start}..{} exceed 32", start.saturating_add(width)),
        ));
    }
    Ok(width_mask(width))
}

pub fn extract_bits(value: u32, start: u32, width: u32) -> Result<u32> {
    let mask = check_field(start, width)?;
    if width == 0 {
        return Ok(0);
    }
    Ok((value >> start) & mask)
}

/// Byte 0 is the least significant.
pub fn extract_byte(value: u32, n: u32) -> Result<u8> {
    if n >= 4 {
        return Err(DrillError::out_of_range(n as usize, 4));
    }
    Ok((value >> (n * 8)) as u8)
}

/// Replaces bits `start..start+width` with the low bits of `field`.
pub fn set_bitfield(value: u32, start: u32, width: u32, field: u32) -> Result<u32> {
    let mask = check_field(start, width)?;
    if width == 0 {
        return Ok(value);
    }
    let positioned = mask << start;
    Ok((value & !positioned) | ((field & mask) << start))
}

pub fn merge_bytes16(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

pub fn merge_bytes16_le(low: u8, high: u8) -> u16 {
    merge_bytes16(high, low)
}

pub fn merge_bytes32(b3: u8, b2: u8, b1: u8, b0: u8) -> u32 {
    ((b3 as u32) << 24) | ((b2 as u32) << 16) | ((b1 as u32) << 8) | b0 as u32
}

pub fn is_little_endian() -> bool {
    1u16.to_ne_bytes()[0] == 1
}

pub fn format_binary8(value: u8) -> String {
    format!("0b{value:08b}")
}

/// Nibbles separated by `_`: `0000_0000_...`.
pub fn format_binary32(value: u32) -> String {
    let digits = format!("{value:032b}");
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_variants_agree() {
        for n in 0..25 {
            let expected = fibonacci_iterative(n);
            assert_eq!(fibonacci_recursive(n), expected);
            assert_eq!(fibonacci_memo(n), expected);
        }
        assert_eq!(fibonacci_iterative(10), 55);
        assert_eq!(fibonacci_memo(93), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial_recursive(0), Some(1));
        assert_eq!(factorial_iterative(5), Some(120));
        assert_eq!(factorial_tail(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial_iterative(21), None);
        assert_eq!(factorial_recursive(21), None);
        assert_eq!(factorial_tail(21), None);
    }

    #[test]
    fn test_large_inputs_do_not_recurse_deeply() {
        assert_eq!(factorial_recursive(10_000_000), None);
        assert_eq!(factorial_tail(u64::MAX), None);
        assert_eq!(factorial_iterative(u64::MAX), None);

        assert_eq!(fibonacci_memo(94), u64::MAX);
        assert_eq!(fibonacci_memo(10_000_000), u64::MAX);
        assert_eq!(fibonacci_recursive(u32::MAX), u64::MAX);
        assert_eq!(fibonacci_iterative(u32::MAX), u64::MAX);
    }

    #[test]
    fn test_power_of_two() {
        for n in [1, 2, 64, 1 << 31] {
            assert!(is_power_of_two(n));
            assert!(is_power_of_two_count(n));
            assert!(is_power_of_two_division(n));
        }
        for n in [0, 3, 6, 100] {
            assert!(!is_power_of_two(n));
            assert!(!is_power_of_two_count(n));
            assert!(!is_power_of_two_division(n));
        }
    }

    #[test]
    fn test_count_set_bits() {
        for n in [0u32, 1, 7, 0xF0F0, u32::MAX, 0x8000_0001] {
            let expected = n.count_ones();
            assert_eq!(count_set_bits_shift(n), expected);
            assert_eq!(count_set_bits_kernighan(n), expected);
            assert_eq!(count_set_bits_lookup(n), expected);
        }
    }

    #[test]
    fn test_swaps_and_single_number() {
        let (mut a, mut b) = (5u32, 9u32);
        swap_xor(&mut a, &mut b);
        assert_eq!((a, b), (9, 5));

        let (mut x, mut y) = (i32::MAX, -3);
        swap_arithmetic(&mut x, &mut y);
        assert_eq!((x, y), (-3, i32::MAX));

        assert_eq!(single_number(&[4, 1, 2, 1, 2]), 4);
    }

    #[test]
    fn test_bit_operations() {
        assert_eq!(set_bit(0b1000, 1).unwrap(), 0b1010);
        assert_eq!(clear_bit(0b1010, 3).unwrap(), 0b0010);
        assert_eq!(toggle_bit(0b0010, 0).unwrap(), 0b0011);
        assert!(check_bit(0b0100, 2).unwrap());
        assert!(!check_bit(0b0100, 1).unwrap());
        assert!(set_bit(0, 32).is_err());
        assert!(is_even(-4));
        assert!(is_odd(-3));
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(1), 0x8000_0000);
        assert_eq!(reverse_bits(0x0000_00F0), 0x0F00_0000);
        for n in [0u32, 1, 43261596, u32::MAX, 0x1234_5678] {
            assert_eq!(reverse_bits_fast(n), n.reverse_bits());
            assert_eq!(reverse_bits(n), n.reverse_bits());
        }
        assert_eq!(reverse_bits8(0b1101_0010), 0b0100_1011);
    }

    #[test]
    fn test_rotations() {
        assert_eq!(rotate_left8(0b1101_0010, 2), 0b0100_1011);
        assert_eq!(rotate_right8(0b0100_1011, 2), 0b1101_0010);
        assert_eq!(rotate_left8(0xAB, 8), 0xAB);
        assert_eq!(rotate_left32(0x8000_0001, 1), 0x0000_0003);
        assert_eq!(rotate_right32(0x0000_0003, 1), 0x8000_0001);
        assert_eq!(rotate_left32(0x1234_5678, 36), 0x1234_5678u32.rotate_left(4));

        assert_eq!(rotate_left_width(0b1001, 1, 4).unwrap(), 0b0011);
        assert_eq!(rotate_right_width(0b0011, 1, 4).unwrap(), 0b1001);
        assert_eq!(rotate_left_width(0xDEAD_BEEF, 4, 32).unwrap(), 0xEADB_EEFD);
        assert!(rotate_left_width(1, 1, 0).is_err());
        assert!(rotate_left_width(1, 1, 33).is_err());
    }

    #[test]
    fn test_bitfields() {
        let reg = 0x1234_5678;
        assert_eq!(extract_bits(reg, 0, 4).unwrap(), 0x8);
        assert_eq!(extract_bits(reg, 8, 8).unwrap(), 0x56);
        assert_eq!(extract_bits(reg, 0, 32).unwrap(), reg);
        assert_eq!(extract_byte(reg, 3).unwrap(), 0x12);
        assert!(extract_byte(reg, 4).is_err());
        assert!(extract_bits(reg, 30, 4).is_err());

        assert_eq!(set_bitfield(0xFFFF_FFFF, 4, 4, 0).unwrap(), 0xFFFF_FF0F);
        assert_eq!(set_bitfield(0, 8, 4, 0xFF).unwrap(), 0x0000_0F00);
    }

    #[test]
    fn test_merge_bytes() {
        assert_eq!(merge_bytes16(0x12, 0x34), 0x1234);
        assert_eq!(merge_bytes16_le(0x34, 0x12), 0x1234);
        assert_eq!(merge_bytes32(0xDE, 0xAD, 0xBE, 0xEF), 0xDEAD_BEEF);
        assert_eq!(is_little_endian(), cfg!(target_endian = "little"));
    }

    #[test]
    fn test_format_binary() {
        assert_eq!(format_binary8(5), "0b00000101");
        assert_eq!(
            format_binary32(0xF000_0001),
            "1111_0000_0000_0000_0000_0000_0000_0001"
        );
    }
}
