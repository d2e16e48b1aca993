use crate::math::{Point, Real, Vector};

/// The key used to correlate a contact with its counterpart from the
/// previous frame.
///
/// Surface contacts derive their id from the mesh vertex indices of the
/// triangle features involved, so the id survives as long as the same
/// features stay in contact. The id carries no meaning beyond equality.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct ContactId(pub u64);

impl ContactId {
    /// An id that never matches a feature-derived id.
    ///
    /// Carried by contacts that are not correlated through features, like
    /// interior contacts.
    pub const UNKNOWN: Self = ContactId(u64::MAX);
}

/// How a contact was produced.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactOrigin {
    /// Generated from a mesh triangle's surface.
    Surface,
    /// Synthesized by the containment resolver while the convex body is
    /// fully enclosed by a solid mesh and touches no triangle.
    Interior,
}

/// A single contact point between the convex body and the mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Contact {
    /// The contact position, in world space.
    pub position: Point<Real>,
    /// The contact normal, in world space, unit length.
    pub normal: Vector<Real>,
    /// The penetration depth along the normal. Positive while the bodies
    /// overlap.
    pub depth: Real,
    /// The cross-frame correlation key of this contact.
    pub id: ContactId,
    /// How this contact was produced.
    pub origin: ContactOrigin,
}

/// Cached per-contact data consumed by the impulse solver for warm-starting
/// and position correction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default)]
pub struct ContactSupplement {
    /// The penetration depth at the time the contact was (re)generated.
    pub base_depth: Real,
    /// The contact anchor in the convex body's local frame.
    pub local_offset_a: Vector<Real>,
    /// The contact anchor in the mesh body's local frame.
    pub local_offset_b: Vector<Real>,
}

/// A contact tracked across frames, together with its warm-start
/// supplement.
///
/// Contact and supplement travel as one record, so every insertion and
/// removal keeps them aligned by construction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct TrackedContact {
    /// The geometric contact data.
    pub contact: Contact,
    /// The warm-start supplement of this contact.
    pub supplement: ContactSupplement,
}

/// The raw contact candidates produced for one step.
///
/// Candidate sets are almost always tiny, so they live inline until they
/// grow past a handful of entries.
pub type ContactCandidates = smallvec::SmallVec<[Contact; 8]>;
