//! The two public decoding entry points and their per-axis convenience
//! wrappers.

use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Extremum, Ordinate};
use crate::error::{GpkgError, GpkgResult};
use crate::header;
use crate::wkb::{self, GeometryKind};

/// How far to trust a producer's container header.
///
/// The two knobs are deliberately independent: some producers write headers
/// whose envelope and emptiness claims disagree with the body, and a caller
/// may reasonably trust one claim but not the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Answer extreme queries from the header's precomputed envelope when it
    /// can, instead of deriving them from the geometry body. Off by
    /// default: the body is the source of truth.
    pub trust_header_envelope: bool,
    /// Let the header's empty flag short-circuit emptiness queries when it
    /// claims the geometry is empty. On by default. A header claiming
    /// non-empty is always verified against the body either way.
    pub trust_header_empty_flag: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            trust_header_envelope: false,
            trust_header_empty_flag: true,
        }
    }
}

/// Minimum blob length accepted by the extreme wrappers: the 8-byte header
/// plus a 2-D point body without SRID.
pub const MIN_EXTREME_BLOB_LEN: usize = 29;

/// Minimum blob length accepted by the emptiness wrapper: the 8-byte header
/// plus a body's marker byte and type word.
pub const MIN_EMPTINESS_BLOB_LEN: usize = 13;

/// Compute the minimum or maximum of one ordinate across a whole geometry
/// blob.
///
/// `expected` constrains the outermost geometry kind; `None` accepts any.
/// By default the precomputed envelope bytes are skipped and the value is
/// derived from the body; see [`QueryOptions::trust_header_envelope`] for
/// the fast path. A header that claims an empty geometry yields
/// [`GpkgError::EmptyGeometry`] unless the trusted envelope can answer.
pub fn geometry_extreme(
    blob: &[u8],
    ordinate: Ordinate,
    extremum: Extremum,
    expected: Option<GeometryKind>,
    options: &QueryOptions,
) -> GpkgResult<f64> {
    let mut cursor = Cursor::new(blob);
    let header = header::read_header(&mut cursor)?;
    if options.trust_header_envelope {
        if let Some(value) =
            header::read_envelope_extreme(&mut cursor, &header, ordinate, extremum)?
        {
            return Ok(value);
        }
        if header.is_empty {
            return Err(GpkgError::EmptyGeometry);
        }
    } else {
        if header.is_empty {
            return Err(GpkgError::EmptyGeometry);
        }
        cursor.skip(header.envelope.byte_len())?;
    }
    wkb::read_extreme(&mut cursor, Endianness::NATIVE, ordinate, extremum, expected)
}

/// Classify a geometry blob as empty or not.
///
/// A header claiming empty is trusted without reading the body (unless
/// [`QueryOptions::trust_header_empty_flag`] is off); a header claiming
/// non-empty is always verified by walking the body.
pub fn geometry_is_empty(blob: &[u8], options: &QueryOptions) -> GpkgResult<bool> {
    let mut cursor = Cursor::new(blob);
    let header = header::read_header(&mut cursor)?;
    if header.is_empty && options.trust_header_empty_flag {
        return Ok(true);
    }
    cursor.skip(header.envelope.byte_len())?;
    wkb::read_emptiness(&mut cursor, Endianness::NATIVE, None)
}

fn extreme_or_none(blob: &[u8], ordinate: Ordinate, extremum: Extremum) -> Option<f64> {
    if blob.len() < MIN_EXTREME_BLOB_LEN {
        return None;
    }
    geometry_extreme(blob, ordinate, extremum, None, &QueryOptions::default()).ok()
}

/// Minimum X of a geometry blob, or `None` when the blob is too short,
/// malformed or empty.
pub fn min_x(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::X, Extremum::Min)
}

/// Minimum Y of a geometry blob. See [`min_x`].
pub fn min_y(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::Y, Extremum::Min)
}

/// Minimum Z of a geometry blob. See [`min_x`].
pub fn min_z(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::Z, Extremum::Min)
}

/// Minimum M of a geometry blob. See [`min_x`].
pub fn min_m(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::M, Extremum::Min)
}

/// Maximum X of a geometry blob. See [`min_x`].
pub fn max_x(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::X, Extremum::Max)
}

/// Maximum Y of a geometry blob. See [`min_x`].
pub fn max_y(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::Y, Extremum::Max)
}

/// Maximum Z of a geometry blob. See [`min_x`].
pub fn max_z(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::Z, Extremum::Max)
}

/// Maximum M of a geometry blob. See [`min_x`].
pub fn max_m(blob: &[u8]) -> Option<f64> {
    extreme_or_none(blob, Ordinate::M, Extremum::Max)
}

/// Whether a geometry blob is empty, or `None` when the blob is too short
/// or malformed.
pub fn is_empty(blob: &[u8]) -> Option<bool> {
    if blob.len() < MIN_EMPTINESS_BLOB_LEN {
        return None;
    }
    geometry_is_empty(blob, &QueryOptions::default()).ok()
}
