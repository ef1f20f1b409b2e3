//! Similarity results
//!
//! The best pair found by the engine and the human-readable line it renders to.

use likesim_core::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of entity a comparison ran over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Company,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Company => "company",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The highest-scoring pair of distinct entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub kind: EntityKind,
    /// Always the smaller of the two IDs
    pub entity_a: EntityId,
    pub entity_b: EntityId,
    /// Number of related IDs both entities share
    pub score: usize,
}

impl SimilarityResult {
    pub fn new(kind: EntityKind, entity_a: EntityId, entity_b: EntityId, score: usize) -> Self {
        Self {
            kind,
            entity_a,
            entity_b,
            score,
        }
    }

    /// The pair as an ordered tuple
    pub fn pair(&self) -> (EntityId, EntityId) {
        (self.entity_a, self.entity_b)
    }
}

impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The highest similarity score is between {kind} {} and {kind} {}. They have {} shared likes.",
            self.entity_a,
            self.entity_b,
            self.score,
            kind = self.kind,
        )
    }
}
