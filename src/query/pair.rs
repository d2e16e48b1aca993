//! Role assignment for a convex/mesh collidable pair.

use crate::math::{Isometry, Real, Vector};
use crate::shape::{ConvexShape, MeshShape};

/// A borrowed reference to a convex rigid body's collision state.
#[derive(Copy, Clone)]
pub struct ConvexCollidable<'a> {
    /// The body's convex shape.
    pub shape: &'a dyn ConvexShape,
    /// The body's world pose.
    pub pose: Isometry<Real>,
    /// The body's linear velocity.
    pub linvel: Vector<Real>,
}

/// A borrowed reference to a mesh rigid body's collision state.
#[derive(Copy, Clone)]
pub struct MeshCollidable<'a> {
    /// The body's mesh shape.
    pub shape: &'a dyn MeshShape,
    /// The body's world pose.
    pub pose: Isometry<Real>,
    /// The body's linear velocity.
    pub linvel: Vector<Real>,
}

/// A collidable reference whose shape kind has already been resolved by the
/// dispatch layer.
#[derive(Copy, Clone)]
pub enum Collidable<'a> {
    /// A body with a convex shape.
    Convex(ConvexCollidable<'a>),
    /// A body with a mesh shape.
    Mesh(MeshCollidable<'a>),
}

/// The error returned when a collidable pair combines shape kinds the
/// mesh-convex manifold cannot handle.
///
/// This signals a dispatch-layer bug, not a runtime condition to recover
/// from.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("the collidable pair does not combine one convex and one mesh shape")]
pub struct PairMismatch;

/// A convex/mesh collidable pair with roles assigned.
#[derive(Copy, Clone)]
pub struct CollidablePair<'a> {
    /// The convex-shaped body of the pair.
    pub convex: ConvexCollidable<'a>,
    /// The mesh-shaped body of the pair.
    pub mesh: MeshCollidable<'a>,
}

impl<'a> std::fmt::Debug for CollidablePair<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollidablePair").finish_non_exhaustive()
    }
}

impl<'a> CollidablePair<'a> {
    /// Assigns convex/mesh roles to `a` and `b`.
    ///
    /// The arguments may come in either order; role assignment is
    /// order-independent. Fails if the two collidables do not combine one
    /// convex shape and one mesh shape.
    pub fn try_new(a: Collidable<'a>, b: Collidable<'a>) -> Result<Self, PairMismatch> {
        match (a, b) {
            (Collidable::Convex(convex), Collidable::Mesh(mesh))
            | (Collidable::Mesh(mesh), Collidable::Convex(convex)) => {
                Ok(CollidablePair { convex, mesh })
            }
            _ => Err(PairMismatch),
        }
    }
}
