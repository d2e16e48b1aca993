//! Persistent contact manifolds.

pub use self::contact::{
    Contact, ContactCandidates, ContactId, ContactOrigin, ContactSupplement, TrackedContact,
};
pub use self::contact_store::ContactStore;
pub use self::containment::{ContainmentState, ContainmentTracker};
pub use self::mesh_convex::{MeshConvexContactManifold, TriangleContactGenerator};

mod contact;
mod contact_store;
mod containment;
mod mesh_convex;
