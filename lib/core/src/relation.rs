// Entity -> related-ID sets
use ahash::AHashSet;
use std::collections::btree_map::{self, BTreeMap};

pub type EntityId = i64;
pub type RelatedId = i64;
pub type RelatedSet = AHashSet<RelatedId>;

/// Mapping from an entity to the deduplicated set of IDs related to it.
///
/// Entities are kept in an ordered map so iteration always visits them in
/// ascending ID order. Each entity owns its set; nothing is shared between
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRelationSet {
    entries: BTreeMap<EntityId, RelatedSet>,
}

impl EntityRelationSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Relate `related` to `entity`. Returns `false` if the pair was already present.
    pub fn insert(&mut self, entity: EntityId, related: RelatedId) -> bool {
        self.entries.entry(entity).or_default().insert(related)
    }

    /// Register `entity` with an empty set if it is not known yet
    pub fn ensure_entity(&mut self, entity: EntityId) -> &mut RelatedSet {
        self.entries.entry(entity).or_default()
    }

    /// Union `related` into the set of `entity`, copying the IDs
    pub fn extend<'a, I>(&mut self, entity: EntityId, related: I)
    where
        I: IntoIterator<Item = &'a RelatedId>,
    {
        self.ensure_entity(entity).extend(related.into_iter().copied());
    }

    pub fn get(&self, entity: EntityId) -> Option<&RelatedSet> {
        self.entries.get(&entity)
    }

    pub fn contains(&self, entity: EntityId, related: RelatedId) -> bool {
        self.entries
            .get(&entity)
            .map(|set| set.contains(&related))
            .unwrap_or(false)
    }

    /// Size of the related set, zero for unknown entities
    pub fn related_len(&self, entity: EntityId) -> usize {
        self.entries.get(&entity).map(|set| set.len()).unwrap_or(0)
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (entity, related) pairs
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(|set| set.len()).sum()
    }

    /// Entity IDs in ascending order
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in ascending entity order
    pub fn iter(&self) -> btree_map::Iter<'_, EntityId, RelatedSet> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EntityRelationSet {
    type Item = (&'a EntityId, &'a RelatedSet);
    type IntoIter = btree_map::Iter<'a, EntityId, RelatedSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(EntityId, RelatedId)> for EntityRelationSet {
    fn from_iter<T: IntoIterator<Item = (EntityId, RelatedId)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (entity, related) in iter {
            set.insert(entity, related);
        }
        set
    }
}
