//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use num_traits::Bounded;

/// An Axis-Aligned Bounding Box.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Aabb {
    /// The minimum coordinates of this AABB.
    pub mins: Point<Real>,
    /// The maximum coordinates of this AABB.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// `mins` must be componentwise smaller than `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and
    /// `maxs` components set to `-Real::MAX`.
    ///
    /// This is often used as the initial value of some AABB merging
    /// algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        let max: Real = Bounded::max_value();
        Self::new(
            Vector::repeat(max).into(),
            Vector::repeat(-max).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB from a set of points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.mins = result.mins.inf(pt);
            result.maxs = result.maxs.sup(pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// Grows this AABB by `displacement`, but only in the direction of the
    /// motion: a positive component extends `maxs`, a negative component
    /// extends `mins`. The opposite bound on each axis is left untouched.
    #[inline]
    #[must_use]
    pub fn swept(mut self, displacement: &Vector<Real>) -> Self {
        for i in 0..DIM {
            if displacement[i] > 0.0 {
                self.maxs[i] += displacement[i];
            } else {
                self.mins[i] += displacement[i];
            }
        }

        self
    }

    /// Does this AABB intersect `other`?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.mins[i] <= other.maxs[i] && self.maxs[i] >= other.mins[i])
    }
}
