use crate::query::contact_manifolds::{ContactId, ContactOrigin, TrackedContact};

/// The persistent contact list of one manifold.
///
/// Each entry couples the geometric contact with its warm-start supplement;
/// the two can never go out of lockstep because they are inserted and
/// removed as one record. The external solver reads the records after the
/// manifold's per-step update and may write solver state back through
/// [`ContactStore::contacts_mut`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct ContactStore {
    contacts: Vec<TrackedContact>,
}

impl ContactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of contacts in this store.
    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Is this store empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All tracked contacts.
    #[inline]
    pub fn contacts(&self) -> &[TrackedContact] {
        &self.contacts
    }

    /// All tracked contacts, mutably.
    #[inline]
    pub fn contacts_mut(&mut self) -> &mut [TrackedContact] {
        &mut self.contacts
    }

    /// Appends a record.
    #[inline]
    pub fn push(&mut self, contact: TrackedContact) {
        self.contacts.push(contact);
    }

    /// Removes the record at `index`, preserving the order of the remaining
    /// records.
    #[inline]
    pub fn remove(&mut self, index: usize) -> TrackedContact {
        self.contacts.remove(index)
    }

    /// Keeps only the records for which `keep` returns `true`.
    #[inline]
    pub fn retain(&mut self, keep: impl FnMut(&TrackedContact) -> bool) {
        self.contacts.retain(keep);
    }

    /// The index of the surface contact with the given id, if any.
    #[inline]
    pub fn find_surface(&self, id: ContactId) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.contact.origin == ContactOrigin::Surface && c.contact.id == id)
    }

    /// The index of the interior contact, if any.
    ///
    /// The store never holds more than one interior contact; callers must
    /// search before inserting one.
    #[inline]
    pub fn find_interior(&self) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.contact.origin == ContactOrigin::Interior)
    }

    /// Removes all records.
    #[inline]
    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
