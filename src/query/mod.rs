//! Narrow-phase queries: rays, pair dispatch, and persistent contact
//! manifolds.

pub use self::contact_manifolds::{
    Contact, ContactCandidates, ContactId, ContactOrigin, ContactStore, ContactSupplement,
    ContainmentState, ContainmentTracker, MeshConvexContactManifold, TrackedContact,
    TriangleContactGenerator,
};
pub use self::pair::{Collidable, CollidablePair, ConvexCollidable, MeshCollidable, PairMismatch};
pub use self::ray::{Ray, RayHit};

pub mod contact_manifolds;
mod pair;
mod ray;
