//! GeoPackage binary container header decoding.
//!
//! The container wraps a WKB geometry body with two magic bytes, a version
//! byte, a flags byte, a spatial-reference id and an optional precomputed
//! envelope. See annex F of <https://www.geopackage.org/spec/> for the
//! layout.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Extremum, Ordinate};
use crate::error::{GpkgError, GpkgResult};

const MAGIC: [u8; 2] = [0x47, 0x50]; // "GP"
const VERSION: u8 = 0x00;

const EMPTY_BIT: u8 = 0x10;
const ENVELOPE_BITS: u8 = 0x0e;
const BYTE_ORDER_BIT: u8 = 0x01;

/// Shape of the optional precomputed envelope carried by the header.
///
/// The envelope stores all minimums first, then all maximums, one pair per
/// axis. An XYM envelope stores its M interval in the slot a Z interval
/// would occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum EnvelopeType {
    None = 0,
    Xy = 1,
    Xyz = 2,
    Xym = 3,
    Xyzm = 4,
}

impl EnvelopeType {
    /// Number of envelope bytes following the fixed 8-byte header.
    pub fn byte_len(self) -> u64 {
        match self {
            EnvelopeType::None => 0,
            EnvelopeType::Xy => 32,
            EnvelopeType::Xyz | EnvelopeType::Xym => 48,
            EnvelopeType::Xyzm => 64,
        }
    }

    /// Count of (min, max) interval pairs in the envelope.
    fn dimensions(self) -> u64 {
        match self {
            EnvelopeType::None => 0,
            EnvelopeType::Xy => 2,
            EnvelopeType::Xyz | EnvelopeType::Xym => 3,
            EnvelopeType::Xyzm => 4,
        }
    }

    /// Slot of `ordinate` within this envelope, applying the third-slot
    /// aliasing rule. Must not be called on [`EnvelopeType::None`].
    fn slot(self, ordinate: Ordinate) -> GpkgResult<u64> {
        let not_applicable = || GpkgError::OrdinateNotApplicable {
            ordinate,
            dimensions: self.dimensions() as usize,
        };
        match ordinate {
            Ordinate::X => Ok(0),
            Ordinate::Y => Ok(1),
            Ordinate::Z => match self {
                EnvelopeType::Xyz | EnvelopeType::Xyzm => Ok(2),
                _ => Err(not_applicable()),
            },
            Ordinate::M => match self {
                EnvelopeType::Xym => Ok(2),
                EnvelopeType::Xyzm => Ok(3),
                _ => Err(not_applicable()),
            },
        }
    }
}

/// Decoded GeoPackage container header.
#[derive(Clone, Copy, Debug)]
pub struct GpkgHeader {
    /// The producer's claim that the wrapped geometry is empty.
    pub is_empty: bool,
    pub envelope: EnvelopeType,
    /// Byte order of the envelope doubles. Never applies to body doubles,
    /// which carry their own per-node markers.
    pub byte_order: Endianness,
}

/// Read and validate the fixed 8-byte header, leaving the cursor at the
/// first envelope byte (or at the geometry body when there is no envelope).
pub(crate) fn read_header(cursor: &mut Cursor<'_>) -> GpkgResult<GpkgHeader> {
    let magic = [cursor.read_u8()?, cursor.read_u8()?];
    if magic != MAGIC {
        return Err(GpkgError::MalformedHeader(format!(
            "bad magic bytes {magic:02x?}"
        )));
    }
    let version = cursor.read_u8()?;
    if version != VERSION {
        return Err(GpkgError::MalformedHeader(format!(
            "unsupported version byte {version:#04x}"
        )));
    }
    let flags = cursor.read_u8()?;
    let envelope = EnvelopeType::try_from((flags & ENVELOPE_BITS) >> 1)
        .map_err(|err| GpkgError::MalformedHeader(err.to_string()))?;
    let byte_order = if flags & BYTE_ORDER_BIT == 0 {
        Endianness::BigEndian
    } else {
        Endianness::LittleEndian
    };
    // The spatial-reference id is not consumed by either query.
    cursor.skip(4)?;
    Ok(GpkgHeader {
        is_empty: flags & EMPTY_BIT != 0,
        envelope,
        byte_order,
    })
}

/// Fast-path read of one extreme from the precomputed envelope.
///
/// `Ok(Some(v))` is a usable header value. `Ok(None)` means the header
/// cannot answer (no envelope, or a NaN slot on a header that claims a
/// non-empty geometry) and the caller must derive from the body; the cursor
/// is then positioned at the body. An envelope that exists but has no slot
/// for the requested ordinate is a hard failure, not a fallback.
pub(crate) fn read_envelope_extreme(
    cursor: &mut Cursor<'_>,
    header: &GpkgHeader,
    ordinate: Ordinate,
    extremum: Extremum,
) -> GpkgResult<Option<f64>> {
    if header.envelope == EnvelopeType::None {
        return Ok(None);
    }
    let slot = header.envelope.slot(ordinate)?;
    let offset = match extremum {
        Extremum::Min => slot * 8,
        Extremum::Max => (header.envelope.dimensions() + slot) * 8,
    };
    cursor.skip(offset)?;
    let value = cursor.read_f64(header.byte_order)?;
    cursor.skip(header.envelope.byte_len() - offset - 8)?;
    if value.is_nan() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::blob;

    fn header_of(bytes: &[u8]) -> GpkgResult<GpkgHeader> {
        read_header(&mut Cursor::new(bytes))
    }

    #[test]
    fn parses_flags() {
        // Little-endian, XY envelope, empty bit set.
        let bytes = [0x47, 0x50, 0x00, 0x13, 0, 0, 0x10, 0xe6];
        let header = header_of(&bytes).unwrap();
        assert!(header.is_empty);
        assert_eq!(header.envelope, EnvelopeType::Xy);
        assert_eq!(header.byte_order, Endianness::LittleEndian);

        // Big-endian, no envelope, not empty.
        let bytes = [0x47, 0x50, 0x00, 0x00, 0, 0, 0, 0];
        let header = header_of(&bytes).unwrap();
        assert!(!header.is_empty);
        assert_eq!(header.envelope, EnvelopeType::None);
        assert_eq!(header.byte_order, Endianness::BigEndian);
    }

    #[test]
    fn rejects_foreign_headers() {
        let bad_magic = [0x00, 0x50, 0x00, 0x01, 0, 0, 0, 0];
        assert!(matches!(
            header_of(&bad_magic),
            Err(GpkgError::MalformedHeader(_))
        ));

        let bad_version = [0x47, 0x50, 0x01, 0x01, 0, 0, 0, 0];
        assert!(matches!(
            header_of(&bad_version),
            Err(GpkgError::MalformedHeader(_))
        ));

        // Envelope type 5 is outside the defined range.
        let bad_envelope = [0x47, 0x50, 0x00, 0x0a, 0, 0, 0, 0];
        assert!(matches!(
            header_of(&bad_envelope),
            Err(GpkgError::MalformedHeader(_))
        ));
    }

    #[test]
    fn truncated_header_fails() {
        let bytes = [0x47, 0x50, 0x00, 0x01, 0, 0];
        assert!(matches!(header_of(&bytes), Err(GpkgError::Truncated { .. })));
    }

    #[test]
    fn envelope_reads_min_then_max_blocks() {
        // XY envelope: mins [1, 2] then maxes [3, 4].
        let body = blob::point_body(Endianness::LittleEndian, 1, &[1.5, 2.5]);
        let bytes = blob::wrap_with(
            &body,
            0x03,
            &[1.0, 2.0, 3.0, 4.0],
            Endianness::LittleEndian,
        );
        let mut cursor = Cursor::new(&bytes);
        let header = read_header(&mut cursor).unwrap();

        let value =
            read_envelope_extreme(&mut cursor, &header, Ordinate::Y, Extremum::Max).unwrap();
        assert_eq!(value, Some(4.0));
        // The cursor must land on the body regardless of which slot was read.
        assert_eq!(cursor.position(), 8 + 32);
    }

    #[test]
    fn nan_envelope_slot_defers_to_the_body() {
        let body = blob::point_body(Endianness::LittleEndian, 1, &[1.5, 2.5]);
        let bytes = blob::wrap_with(
            &body,
            0x03,
            &[f64::NAN, 2.0, 3.0, 4.0],
            Endianness::LittleEndian,
        );
        let mut cursor = Cursor::new(&bytes);
        let header = read_header(&mut cursor).unwrap();

        let value =
            read_envelope_extreme(&mut cursor, &header, Ordinate::X, Extremum::Min).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.position(), 8 + 32);
    }

    #[test]
    fn envelope_without_the_ordinate_is_a_hard_failure() {
        let body = blob::point_body(Endianness::LittleEndian, 1, &[1.5, 2.5]);
        let bytes = blob::wrap_with(
            &body,
            0x03,
            &[1.0, 2.0, 3.0, 4.0],
            Endianness::LittleEndian,
        );
        let mut cursor = Cursor::new(&bytes);
        let header = read_header(&mut cursor).unwrap();

        assert!(matches!(
            read_envelope_extreme(&mut cursor, &header, Ordinate::Z, Extremum::Min),
            Err(GpkgError::OrdinateNotApplicable { .. })
        ));
    }

    #[test]
    fn xym_envelope_serves_m_from_the_third_slot() {
        // XYM envelope: mins [x, y, m] then maxes [x, y, m].
        let body = blob::point_body(Endianness::LittleEndian, 1, &[0.0, 0.0]);
        let bytes = blob::wrap_with(
            &body,
            0x07,
            &[1.0, 2.0, 30.0, 4.0, 5.0, 60.0],
            Endianness::LittleEndian,
        );
        let mut cursor = Cursor::new(&bytes);
        let header = read_header(&mut cursor).unwrap();
        assert_eq!(header.envelope, EnvelopeType::Xym);

        let value =
            read_envelope_extreme(&mut cursor, &header, Ordinate::M, Extremum::Max).unwrap();
        assert_eq!(value, Some(60.0));
    }
}
