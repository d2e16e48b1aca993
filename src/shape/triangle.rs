//! Triangle data produced by the per-step triangle configurator.

use crate::math::{Point, Real, UnitVector, Vector};
use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    /// The triangle's first vertex.
    pub a: Point<Real>,
    /// The triangle's second vertex.
    pub b: Point<Real>,
    /// The triangle's third vertex.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// A vector normal of this triangle, non-normalized.
    ///
    /// The normal points such that it is collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }
}

/// Which winding(s) of a triangle may generate contacts.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleSidedness {
    /// Only the clockwise-wound face generates contacts.
    Clockwise,
    /// Only the counterclockwise-wound face generates contacts.
    Counterclockwise,
    /// Both faces generate contacts.
    DoubleSided,
}

/// The mesh vertex indices backing one triangle.
///
/// These indices identify the triangle's features across frames, so contact
/// ids derived from them remain stable while the triangle stays in contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriangleIndices {
    /// Index of the first vertex.
    pub a: u32,
    /// Index of the second vertex.
    pub b: u32,
    /// Index of the third vertex.
    pub c: u32,
}

/// A mesh triangle prepared for contact generation: world-space vertices,
/// resolved sidedness, collision margin, and the backing vertex indices.
#[derive(Copy, Clone, Debug)]
pub struct ConfiguredTriangle {
    /// The triangle vertices, in world space.
    pub triangle: Triangle,
    /// The resolved collision sidedness.
    pub sidedness: TriangleSidedness,
    /// The collision margin. Always zero for mesh triangles: the mesh
    /// geometry is exact and must not be inflated.
    pub margin: Real,
    /// The mesh vertex indices backing this triangle.
    pub indices: TriangleIndices,
}
