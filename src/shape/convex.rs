use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};

/// The capabilities a convex collidable's shape must expose to the
/// narrow phase.
///
/// Implementations must be readable concurrently: all methods take `&self`
/// and several manifolds may query the same shape from different worker
/// threads during a step.
pub trait ConvexShape {
    /// Computes the AABB of this shape transformed by `pos`.
    fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb;

    /// The radius of the largest sphere centered at the shape's local origin
    /// and fully contained by the shape.
    ///
    /// Used to compensate penetration depths measured from the shape's
    /// center rather than its surface.
    fn min_bounding_radius(&self) -> Real;
}
