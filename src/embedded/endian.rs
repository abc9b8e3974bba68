//! Byte-order conversion and fixed-layout field access for wire buffers.

use crate::bits::is_little_endian;
use crate::error::{DrillError, Result};

// =============================================================================
// Milestone 1: Byte swaps
// =============================================================================

pub fn swap16(value: u16) -> u16 {
    (value << 8) | (value >> 8)
}

pub fn swap32(value: u32) -> u32 {
    ((value & 0x0000_00FF) << 24)
        | ((value & 0x0000_FF00) << 8)
        | ((value & 0x00FF_0000) >> 8)
        | ((value & 0xFF00_0000) >> 24)
}

pub fn swap64(value: u64) -> u64 {
    let high = swap32(value as u32) as u64;
    let low = swap32((value >> 32) as u32) as u64;
    (high << 32) | low
}

// =============================================================================
// Milestone 2: Host/network order
// =============================================================================

/// Network order is big-endian, so this is a swap only on little-endian hosts.
pub fn hton16(host: u16) -> u16 {
    if is_little_endian() {
        swap16(host)
    } else {
        host
    }
}

pub fn hton32(host: u32) -> u32 {
    if is_little_endian() {
        swap32(host)
    } else {
        host
    }
}

pub fn ntoh16(net: u16) -> u16 {
    hton16(net)
}

pub fn ntoh32(net: u32) -> u32 {
    hton32(net)
}

// =============================================================================
// Milestone 3: Reading and writing fields
// =============================================================================

fn field<const W: usize>(bytes: &[u8]) -> Result<[u8; W]> {
    bytes
        .get(..W)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| DrillError::out_of_range(W - 1, bytes.len()))
}

fn field_mut<const W: usize>(bytes: &mut [u8]) -> Result<&mut [u8]> {
    let len = bytes.len();
    bytes
        .get_mut(..W)
        .ok_or_else(|| DrillError::out_of_range(W - 1, len))
}

pub fn read_be16(bytes: &[u8]) -> Result<u16> {
    let [b0, b1] = field::<2>(bytes)?;
    Ok(((b0 as u16) << 8) | b1 as u16)
}

pub fn read_le16(bytes: &[u8]) -> Result<u16> {
    let [b0, b1] = field::<2>(bytes)?;
    Ok(((b1 as u16) << 8) | b0 as u16)
}

pub fn read_be32(bytes: &[u8]) -> Result<u32> {
    let [b0, b1, b2, b3] = field::<4>(bytes)?;
    Ok(((b0 as u32) << 24) | ((b1 as u32) << 16) | ((b2 as u32) << 8) | b3 as u32)
}

pub fn read_le32(bytes: &[u8]) -> Result<u32> {
    let [b0, b1, b2, b3] = field::<4>(bytes)?;
    Ok(((b3 as u32) << 24) | ((b2 as u32) << 16) | ((b1 as u32) << 8) | b0 as u32)
}

pub fn write_be16(bytes: &mut [u8], value: u16) -> Result<()> {
    let out = field_mut::<2>(bytes)?;
    out[0] = (value >> 8) as u8;
    out[1] = value as u8;
    Ok(())
}

pub fn write_le16(bytes: &mut [u8], value: u16) -> Result<()> {
    let out = field_mut::<2>(bytes)?;
    out[0] = value as u8;
    out[1] = (value >> 8) as u8;
    Ok(())
}

pub fn write_be32(bytes: &mut [u8], value: u32) -> Result<()> {
    let out = field_mut::<4>(bytes)?;
    for (i, b) in out.iter_mut().enumerate() {
        *b = (value >> (24 - 8 * i)) as u8;
    }
    Ok(())
}

pub fn write_le32(bytes: &mut [u8], value: u32) -> Result<()> {
    let out = field_mut::<4>(bytes)?;
    for (i, b) in out.iter_mut().enumerate() {
        *b = (value >> (8 * i)) as u8;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps() {
        assert_eq!(swap16(0x1234), 0x3412);
        assert_eq!(swap32(0x1234_5678), 0x7856_3412);
        assert_eq!(swap64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
        assert_eq!(swap32(0xDEAD_BEEF), 0xDEAD_BEEFu32.swap_bytes());
    }

    #[test]
    fn test_network_order() {
        assert_eq!(hton16(0x1234), 0x1234u16.to_be());
        assert_eq!(hton32(0x1234_5678), 0x1234_5678u32.to_be());
        assert_eq!(ntoh32(hton32(0xCAFE_BABE)), 0xCAFE_BABE);
        assert_eq!(ntoh16(hton16(0xBEEF)), 0xBEEF);
    }

    #[test]
    fn test_read_fields() {
        let packet = [0x12, 0x34, 0x56, 0x78, 0xFF];
        assert_eq!(read_be16(&packet).unwrap(), 0x1234);
        assert_eq!(read_le16(&packet).unwrap(), 0x3412);
        assert_eq!(read_be32(&packet).unwrap(), 0x1234_5678);
        assert_eq!(read_le32(&packet).unwrap(), 0x7856_3412);
        assert_eq!(read_be16(&packet[3..]).unwrap(), 0x78FF);
    }

    #[test]
    fn test_short_input_is_out_of_range() {
        assert!(matches!(
            read_be32(&[1, 2, 3]),
            Err(DrillError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(read_le16(&[]).is_err());
        let mut small = [0u8; 1];
        assert!(write_be16(&mut small, 1).is_err());
    }

    #[test]
    fn test_write_fields() {
        let mut buf = [0u8; 4];
        write_be32(&mut buf, 0xDEAD_BEEF).unwrap();
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
        write_le32(&mut buf, 0xDEAD_BEEF).unwrap();
        assert_eq!(buf, [0xEF, 0xBE, 0xAD, 0xDE]);
        write_be16(&mut buf, 0x0102).unwrap();
        assert_eq!(&buf[..2], &[0x01, 0x02]);
        write_le16(&mut buf[2..], 0x0102).unwrap();
        assert_eq!(&buf[2..], &[0x02, 0x01]);
    }
}
