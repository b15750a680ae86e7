//! Defines [`GpkgError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::datatypes::Ordinate;
use crate::wkb::GeometryKind;

/// Enum with all errors in this crate.
///
/// Decoding fails fast: the first error aborts the whole query and no partial
/// value is ever produced. After a failure the cursor position is unspecified
/// and the decode must be abandoned, not resumed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GpkgError {
    /// A read or skip would run past the end of the blob.
    #[error("geometry blob truncated: {needed} bytes needed at offset {offset}, blob is {len} bytes")]
    Truncated {
        /// Position the failing access started at.
        offset: usize,
        /// Width of the failing access in bytes.
        needed: u64,
        /// Total blob length.
        len: usize,
    },

    /// The container wrapper is not a supported GeoPackage header.
    #[error("malformed GeoPackage header: {0}")]
    MalformedHeader(String),

    /// The body declared a geometry type code outside the seven known kinds.
    #[error("unsupported geometry type code: {0}")]
    UnsupportedGeometryType(u32),

    /// The requested ordinate has no slot in the decoded geometry.
    #[error("ordinate {ordinate:?} not applicable to a {dimensions}-dimensional geometry")]
    OrdinateNotApplicable {
        /// The ordinate the caller asked for, before any aliasing.
        ordinate: Ordinate,
        /// Dimensionality of the offending node or envelope.
        dimensions: usize,
    },

    /// The body's geometry kind violated the caller's expected-kind constraint.
    #[error("unexpected geometry type: expected {expected:?}, found {found:?}")]
    GeometryTypeMismatch {
        /// The kind the caller constrained the decode to.
        expected: GeometryKind,
        /// The kind the blob actually encodes.
        found: GeometryKind,
    },

    /// The geometry (or a component that must not be empty) has no content to
    /// derive a result from.
    #[error("geometry has no content to derive a result from")]
    EmptyGeometry,
}

/// Crate-specific result type.
pub type GpkgResult<T> = std::result::Result<T, GpkgError>;
