//! Low-level byte order utilities for SPLICE parsing.
//!
//! This module provides safe, bounds-checked reads of primitive values from
//! byte buffers. Every numeric field in a SPLICE file is little-endian, so
//! only the little-endian read path exists; there is no encode path.
//!
//! # Key Components
//!
//! - [`SpliceIO`] - trait mapping a primitive type to its fixed-size byte array
//! - [`read_le_at`] - read a value at an offset and advance the offset
//!
//! All reads return [`crate::Error::OutOfBounds`] when the buffer holds fewer
//! bytes than the requested type needs, leaving the offset untouched.

use crate::{Error::OutOfBounds, Result};

/// Trait for implementing type-specific safe binary data reading operations.
///
/// Each implementation defines a `Bytes` associated type that represents the
/// fixed-size byte array required for that particular type (e.g., `[u8; 4]`
/// for `u32`), along with the little-endian conversion from it.
pub trait SpliceIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

impl SpliceIO for u8 {
    type Bytes = [u8; 1];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        bytes[0]
    }
}

impl SpliceIO for u32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }
}

impl SpliceIO for f32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        f32::from_le_bytes(bytes)
    }
}

/// Read a value of type `T` at `offset` in little-endian byte order.
///
/// On success the offset is advanced past the value. On failure the offset is
/// left unchanged so the caller can treat the miss as end-of-input.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes
/// remain at `offset`.
pub fn read_le_at<T: SpliceIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    if (type_len + *offset) > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..*offset + type_len].try_into() else {
        return Err(OutOfBounds);
    };

    *offset += type_len;

    Ok(T::from_le_bytes(read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn read_le_at_advances_offset() {
        let data = [0x01, 0x00, 0x00, 0x00, 0xFF];
        let mut offset = 0;

        let value: u32 = read_le_at(&data, &mut offset).unwrap();
        assert_eq!(value, 1);
        assert_eq!(offset, 4);

        let value: u8 = read_le_at(&data, &mut offset).unwrap();
        assert_eq!(value, 0xFF);
        assert_eq!(offset, 5);
    }

    #[test]
    fn read_le_at_f32() {
        let data = 120.0f32.to_le_bytes();
        let mut offset = 0;

        let value: f32 = read_le_at(&data, &mut offset).unwrap();
        assert_eq!(value, 120.0);
    }

    #[test]
    fn read_le_at_out_of_bounds_keeps_offset() {
        let data = [0x01, 0x02];
        let mut offset = 1;

        let result: Result<u32> = read_le_at(&data, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
        assert_eq!(offset, 1);
    }
}
