//! Primitive values on the binary stream.
//!
//! Fixed size numbers are big endian, counts and sizes are variable length integers
//! (7 bits per byte, low bits first, high bit set on all but the last byte)
//! and strings are length prefixed UTF-8.
use std::io::Read;
use std::io::Write;

use byteorder::BigEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;

use crate::errors::WireError;

/// Upper bound on the capacity reserved up front for decoded collections.
///
/// Lengths come from the stream and are not trusted until the items are actually read.
pub const MAX_PREALLOC: usize = 1024;

/// Write primitive values to the binary stream.
pub struct WireWriter<W: Write> {
    inner: W,
}

impl<W: Write> WireWriter<W> {
    pub fn new(inner: W) -> WireWriter<W> {
        WireWriter { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), WireError> {
        self.write_u8(u8::from(value))
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), WireError> {
        self.inner.write_i32::<BigEndian>(value)?;
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), WireError> {
        self.inner.write_i64::<BigEndian>(value)?;
        Ok(())
    }

    /// Write a collection length as a variable length integer.
    pub fn write_len(&mut self, len: usize) -> Result<(), WireError> {
        let len = u32::try_from(len).map_err(|_| WireError::ValueTooLarge(len as u64))?;
        self.write_vint(len)
    }

    /// Write a presence flag followed, if present, by the value.
    pub fn write_optional<T, F>(&mut self, value: Option<&T>, write: F) -> Result<(), WireError>
    where
        F: FnOnce(&mut Self, &T) -> Result<(), WireError>,
    {
        match value {
            None => self.write_bool(false),
            Some(value) => {
                self.write_bool(true)?;
                write(self, value)
            }
        }
    }

    pub fn write_string(&mut self, value: &str) -> Result<(), WireError> {
        self.write_len(value.len())?;
        self.inner.write_all(value.as_bytes())?;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), WireError> {
        self.inner.write_u8(value)?;
        Ok(())
    }

    pub fn write_vint(&mut self, value: u32) -> Result<(), WireError> {
        self.write_vlong(u64::from(value))
    }

    pub fn write_vlong(&mut self, mut value: u64) -> Result<(), WireError> {
        while value & !0x7f != 0 {
            self.inner.write_u8((value & 0x7f) as u8 | 0x80)?;
            value >>= 7;
        }
        self.inner.write_u8(value as u8)?;
        Ok(())
    }
}

/// Read primitive values from the binary stream.
pub struct WireReader<R: Read> {
    inner: R,
}

impl<R: Read> WireReader<R> {
    pub fn new(inner: R) -> WireReader<R> {
        WireReader { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn read_bool(&mut self) -> Result<bool, WireError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(WireError::InvalidBool(other)),
        }
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        Ok(self.inner.read_i32::<BigEndian>()?)
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        Ok(self.inner.read_i64::<BigEndian>()?)
    }

    /// Read a collection length encoded as a variable length integer.
    pub fn read_len(&mut self) -> Result<usize, WireError> {
        let len = self.read_vint()?;
        usize::try_from(len).map_err(|_| WireError::ValueTooLarge(u64::from(len)))
    }

    /// Read a presence flag and, if set, the value that follows it.
    pub fn read_optional<T, F>(&mut self, read: F) -> Result<Option<T>, WireError>
    where
        F: FnOnce(&mut Self) -> Result<T, WireError>,
    {
        if self.read_bool()? {
            read(self).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn read_string(&mut self) -> Result<String, WireError> {
        let len = self.read_len()?;
        let mut buffer = Vec::with_capacity(len.min(MAX_PREALLOC));
        let read = (&mut self.inner).take(len as u64).read_to_end(&mut buffer)?;
        if read < len {
            return Err(WireError::Truncated);
        }
        String::from_utf8(buffer).map_err(|_| WireError::InvalidUtf8)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.inner.read_u8()?)
    }

    pub fn read_vint(&mut self) -> Result<u32, WireError> {
        let value = self.read_varint(32)?;
        Ok(value as u32)
    }

    pub fn read_vlong(&mut self) -> Result<u64, WireError> {
        self.read_varint(64)
    }

    /// Decode a variable length integer that must fit in the given number of bits.
    fn read_varint(&mut self, bits: u32) -> Result<u64, WireError> {
        let mut value: u64 = 0;
        let mut shift = 0;
        loop {
            let byte = self.read_u8()?;
            let payload = u64::from(byte & 0x7f);
            if shift >= bits || (bits - shift < 7 && payload >> (bits - shift) != 0) {
                return Err(WireError::VarIntOverflow);
            }
            value |= payload << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }
}
