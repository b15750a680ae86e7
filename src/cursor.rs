//! Bounds-checked positional reading over an immutable geometry blob.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{GpkgError, GpkgResult};

/// Byte order of the multi-byte values in a geometry blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// The host's byte order. Body decoding starts from this and lets every
    /// node's own marker byte override it.
    pub const NATIVE: Endianness = if cfg!(target_endian = "little") {
        Endianness::LittleEndian
    } else {
        Endianness::BigEndian
    };

    /// Interpret a body byte-order marker. Only 0 (big) and 1 (little) are
    /// explicit; any other value leaves the caller's order in effect.
    pub(crate) fn from_marker(marker: u8) -> Option<Endianness> {
        match marker {
            0 => Some(Endianness::BigEndian),
            1 => Some(Endianness::LittleEndian),
            _ => None,
        }
    }
}

/// Positional reader over an immutable byte buffer.
///
/// Every access validates `position + width <= len` before touching the
/// buffer and advances the position only on success. One cursor is owned by
/// one in-flight query for its whole recursive lifetime; after any failure
/// its position is unspecified and the decode must be abandoned.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check that `width` more bytes are available without consuming them.
    ///
    /// Widths are `u64` so that a hostile element count multiplied by a
    /// tuple size cannot wrap the check.
    pub(crate) fn ensure(&self, width: u64) -> GpkgResult<()> {
        if self.pos as u64 + width > self.buf.len() as u64 {
            return Err(GpkgError::Truncated {
                offset: self.pos,
                needed: width,
                len: self.buf.len(),
            });
        }
        Ok(())
    }

    fn take(&mut self, width: usize) -> GpkgResult<&'a [u8]> {
        self.ensure(width as u64)?;
        let bytes = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> GpkgResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self, order: Endianness) -> GpkgResult<u32> {
        let bytes = self.take(4)?;
        Ok(match order {
            Endianness::BigEndian => BigEndian::read_u32(bytes),
            Endianness::LittleEndian => LittleEndian::read_u32(bytes),
        })
    }

    pub fn read_f64(&mut self, order: Endianness) -> GpkgResult<f64> {
        let bytes = self.take(8)?;
        Ok(match order {
            Endianness::BigEndian => BigEndian::read_f64(bytes),
            Endianness::LittleEndian => LittleEndian::read_f64(bytes),
        })
    }

    /// Advance `width` bytes without decoding them.
    pub fn skip(&mut self, width: u64) -> GpkgResult<()> {
        self.ensure(width)?;
        self.pos += width as usize;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_both_byte_orders() {
        let buf = [0x01, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(cursor.read_u32(Endianness::LittleEndian).unwrap(), 1);
        assert_eq!(cursor.position(), 4);

        let mut cursor = Cursor::new(&buf);
        assert_eq!(
            cursor.read_u32(Endianness::BigEndian).unwrap(),
            0x0100_0000
        );

        let bytes = 42.5_f64.to_be_bytes();
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_f64(Endianness::BigEndian).unwrap(), 42.5);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let buf = [0u8; 3];
        let mut cursor = Cursor::new(&buf);
        cursor.read_u8().unwrap();
        let err = cursor.read_u32(Endianness::LittleEndian).unwrap_err();
        assert!(matches!(
            err,
            GpkgError::Truncated {
                offset: 1,
                needed: 4,
                len: 3,
            }
        ));
    }

    #[test]
    fn skip_is_bounds_checked() {
        let buf = [0u8; 8];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(8).unwrap();
        assert_eq!(cursor.position(), 8);
        assert!(cursor.skip(1).is_err());
    }

    #[test]
    fn huge_widths_do_not_wrap_the_bounds_check() {
        let buf = [0u8; 8];
        let cursor = Cursor::new(&buf);
        assert!(cursor.ensure(u64::MAX).is_err());
    }

    #[test]
    fn marker_bytes() {
        assert_eq!(Endianness::from_marker(0), Some(Endianness::BigEndian));
        assert_eq!(Endianness::from_marker(1), Some(Endianness::LittleEndian));
        assert_eq!(Endianness::from_marker(0xff), None);
    }
}
