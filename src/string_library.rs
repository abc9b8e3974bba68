//! C string and memory routines over byte buffers.
//!
//! A buffer holds a string up to its first NUL byte, or up to its end when it
//! has none. Writes that would run past the end of a buffer are rejected
//! instead of overflowing it.

use crate::error::{DrillError, Result};
use std::cmp::Ordering;

// =============================================================================
// Milestone 1: Length, copy and concatenation
// =============================================================================

pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

fn c_str(s: &[u8]) -> &[u8] {
    &s[..strlen(s)]
}

/// Copies `src` and a terminating NUL into `dest`.
pub fn strcpy(dest: &mut [u8], src: &[u8]) -> Result<()> {
    let src = c_str(src);
    if src.len() + 1 > dest.len() {
        return Err(DrillError::capacity(dest.len()));
    }
    dest[..src.len()].copy_from_slice(src);
    dest[src.len()] = 0;
    Ok(())
}

/// Writes exactly `n` bytes: `src` then NUL padding. When `src` has `n` or
/// more bytes, the result is not NUL-terminated.
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> Result<()> {
    if n > dest.len() {
        return Err(DrillError::capacity(dest.len()));
    }
    let src = c_str(src);
    let copied = src.len().min(n);
    dest[..copied].copy_from_slice(&src[..copied]);
    dest[copied..n].fill(0);
    Ok(())
}

pub fn strcat(dest: &mut [u8], src: &[u8]) -> Result<()> {
    strncat(dest, src, usize::MAX)
}

/// Appends at most `n` bytes of `src`, always NUL-terminating.
pub fn strncat(dest: &mut [u8], src: &[u8], n: usize) -> Result<()> {
    let start = strlen(dest);
    let src = c_str(src);
    let appended = src.len().min(n);
    if start + appended + 1 > dest.len() {
        return Err(DrillError::capacity(dest.len()));
    }
    dest[start..start + appended].copy_from_slice(&src[..appended]);
    dest[start + appended] = 0;
    Ok(())
}

// =============================================================================
// Milestone 2: Comparison
// =============================================================================

fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

/// Bytes compare as unsigned values; a shorter string sorts first.
pub fn strcmp(a: &[u8], b: &[u8]) -> Ordering {
    strncmp(a, b, usize::MAX)
}

pub fn strncmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let (a, b) = (c_str(a), c_str(b));
    for i in 0..n {
        let (ca, cb) = (byte_at(a, i), byte_at(b, i));
        if ca != cb || ca == 0 {
            return ca.cmp(&cb);
        }
    }
    Ordering::Equal
}

/// Compares raw bytes, NUL included.
pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> Result<Ordering> {
    if n > a.len() || n > b.len() {
        return Err(DrillError::out_of_range(n, a.len().min(b.len())));
    }
    for i in 0..n {
        if a[i] != b[i] {
            return Ok(a[i].cmp(&b[i]));
        }
    }
    Ok(Ordering::Equal)
}

// =============================================================================
// Milestone 3: Raw memory
// =============================================================================

pub fn memset(buf: &mut [u8], value: u8, n: usize) -> Result<()> {
    if n > buf.len() {
        return Err(DrillError::out_of_range(n, buf.len()));
    }
    for b in &mut buf[..n] {
        *b = value;
    }
    Ok(())
}

/// `dest` and `src` are distinct borrows, so they cannot overlap.
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> Result<()> {
    if n > dest.len() || n > src.len() {
        return Err(DrillError::out_of_range(n, dest.len().min(src.len())));
    }
    for i in 0..n {
        dest[i] = src[i];
    }
    Ok(())
}

/// Copies `n` bytes from `buf[src..]` to `buf[dst..]` within one buffer.
/// Copies backwards when the destination lies after the source so that
/// overlapping bytes are read before they are overwritten.
pub fn memmove(buf: &mut [u8], src: usize, dst: usize, n: usize) -> Result<()> {
    let end = src.max(dst).saturating_add(n);
    if end > buf.len() {
        return Err(DrillError::out_of_range(end, buf.len()));
    }
    match dst.cmp(&src) {
        Ordering::Less => {
            for i in 0..n {
                buf[dst + i] = buf[src + i];
            }
        }
        Ordering::Greater => {
            for i in (0..n).rev() {
                buf[dst + i] = buf[src + i];
            }
        }
        Ordering::Equal => {}
    }
    Ok(())
}

// =============================================================================
// Milestone 4: Searching
// =============================================================================

/// Searching for 0 finds the terminator position.
pub fn strchr(s: &[u8], c: u8) -> Option<usize> {
    let len = strlen(s);
    if c == 0 {
        return Some(len);
    }
    s[..len].iter().position(|&b| b == c)
}

pub fn strrchr(s: &[u8], c: u8) -> Option<usize> {
    let len = strlen(s);
    if c == 0 {
        return Some(len);
    }
    s[..len].iter().rposition(|&b| b == c)
}

/// An empty needle matches at 0.
pub fn strstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let (haystack, needle) = (c_str(haystack), c_str(needle));
    if needle.is_empty() {
        return Some(0);
    }
    (0..haystack.len()).find(|&start| haystack[start..].starts_with(needle))
}

// =============================================================================
// Milestone 5: Number conversion
// =============================================================================

fn skip_whitespace(s: &[u8]) -> usize {
    s.iter()
        .take_while(|&&b| b == b' ' || b == b'\t' || b == b'\n')
        .count()
}

/// Parses an optional sign and decimal digits after leading whitespace.
/// Stops at the first non-digit and clamps to the `i32` range on overflow.
pub fn atoi(s: &[u8]) -> i32 {
    let s = c_str(s);
    let mut i = skip_whitespace(s);
    let mut negative = false;
    match s.get(i) {
        Some(b'-') => {
            negative = true;
            i += 1;
        }
        Some(b'+') => i += 1,
        _ => {}
    }

    let mut result: i32 = 0;
    while let Some(&b) = s.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = (b - b'0') as i32;
        if result > i32::MAX / 10 || (result == i32::MAX / 10 && digit > 7) {
            return if negative { i32::MIN } else { i32::MAX };
        }
        result = result * 10 + digit;
        i += 1;
    }
    if negative {
        -result
    } else {
        result
    }
}

/// No overflow handling: wraps like the naive C loop on two's-complement hardware.
pub fn atoi_simple(s: &[u8]) -> i32 {
    let s = c_str(s);
    let mut i = s.iter().take_while(|&&b| b == b' ').count();
    let mut sign = 1i32;
    if let Some(&b) = s.get(i) {
        if b == b'-' || b == b'+' {
            if b == b'-' {
                sign = -1;
            }
            i += 1;
        }
    }
    let mut result = 0i32;
    for &b in s[i..].iter().take_while(|b| b.is_ascii_digit()) {
        result = result.wrapping_mul(10).wrapping_add((b - b'0') as i32);
    }
    sign.wrapping_mul(result)
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Negative values get a `-` only in base 10; other bases print the
/// two's-complement bit pattern.
pub fn itoa(value: i32, base: u32) -> Result<String> {
    if !(2..=36).contains(&base) {
        return Err(DrillError::invalid_argument(
            "base",
            format!("{base} is not in 2..=36"),
        ));
    }
    let negative = value < 0 && base == 10;
    let mut magnitude: u32 = if negative {
        value.unsigned_abs()
    } else {
        value as u32
    };

    if magnitude == 0 {
        return Ok("0".to_string());
    }
    let mut digits = Vec::new();
    while magnitude != 0 {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if negative {
        digits.push(b'-');
    }
    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

/// Base-10 only: digits collect least significant first, then copy out reversed.
pub fn itoa_decimal(value: i32) -> String {
    let mut magnitude = value.unsigned_abs();
    let mut buffer = Vec::with_capacity(10);
    loop {
        buffer.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    let mut out = String::with_capacity(buffer.len() + 1);
    if value < 0 {
        out.push('-');
    }
    out.extend(buffer.iter().rev().map(|&b| char::from(b)));
    out
}
