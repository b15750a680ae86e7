use crate::error::{GpkgError, GpkgResult};

/// One coordinate axis of a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordinate {
    X,
    Y,
    Z,
    M,
}

impl Ordinate {
    /// Zero-based slot of this ordinate within a coordinate tuple.
    pub(crate) fn slot(self) -> usize {
        match self {
            Ordinate::X => 0,
            Ordinate::Y => 1,
            Ordinate::Z => 2,
            Ordinate::M => 3,
        }
    }

    /// Re-target this ordinate against one node's dimensionality.
    ///
    /// M can be stored in the third or the fourth slot: on a 3-dimensional
    /// node an M request is redirected to the third slot (the Z position)
    /// whether the node's extra ordinate is a true Z or a true M. A request
    /// whose slot lies beyond the node's dimensionality fails.
    pub(crate) fn retarget(self, dims: Dimensions) -> GpkgResult<Ordinate> {
        let ordinate = if dims.size() == 3 && self == Ordinate::M {
            Ordinate::Z
        } else {
            self
        };
        if ordinate.slot() > dims.size() {
            return Err(GpkgError::OrdinateNotApplicable {
                ordinate: self,
                dimensions: dims.size(),
            });
        }
        Ok(ordinate)
    }
}

/// Which end of the per-ordinate interval a query asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

/// The ordinate set present in one geometry node.
///
/// Always X and Y, plus optionally Z and/or M, so 2 to 4 ordinates per
/// coordinate tuple. Derived per node from the body's type word; nested
/// nodes may disagree with their parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub has_z: bool,
    pub has_m: bool,
}

impl Dimensions {
    /// Count of ordinates in one coordinate tuple.
    pub fn size(self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_m)
    }
}
