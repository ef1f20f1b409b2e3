//! All-pairs similarity engine
//!
//! Finds the two distinct entities whose related sets share the most IDs.
//!
//! Entities are enumerated in ascending ID order and each pair `(x, y)` with
//! `x < y` is scored exactly once. The first pair initializes the best and
//! only a strictly higher score replaces it, so among equal scores the
//! lexicographically smallest `(x, y)` wins. Parallel scans split the outer
//! loop into rows and reduce them under the same rule, giving identical
//! results.
//!
//! Cost is O(E² · min(|A|, |B|)) for E entities. There is no pruning: the
//! answer is the true global maximum, which keeps this practical for
//! thousands of entities, not millions.

use crate::result::{EntityKind, SimilarityResult};
use likesim_core::{EntityId, EntityRelationSet, RelatedSet};
use rayon::prelude::*;
use tracing::debug;

/// Default entity count at which a parallel scan is used
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Configuration for the similarity engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Spread rows of the pair scan across the rayon pool
    pub parallel: bool,
    /// Smallest entity count for which `parallel` takes effect
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Number of related IDs present in both sets
#[inline]
pub fn score(a: &RelatedSet, b: &RelatedSet) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|id| large.contains(*id)).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    a: EntityId,
    b: EntityId,
    score: usize,
}

impl Candidate {
    /// Higher score wins, ties go to the earlier pair in ascending order
    fn beats(&self, other: &Candidate) -> bool {
        self.score > other.score
            || (self.score == other.score && (self.a, self.b) < (other.a, other.b))
    }
}

/// Engine comparing every pair of entities in an [`EntityRelationSet`]
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: EngineConfig,
}

impl SimilarityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Find the most similar pair of entities.
    ///
    /// Returns `None` when there are fewer than two entities. A best score of
    /// zero is still a result.
    pub fn most_similar(
        &self,
        kind: EntityKind,
        relations: &EntityRelationSet,
    ) -> Option<SimilarityResult> {
        let entries: Vec<(EntityId, &RelatedSet)> =
            relations.iter().map(|(id, set)| (*id, set)).collect();

        if entries.len() < 2 {
            debug!(%kind, entities = entries.len(), "Not enough entities to compare");
            return None;
        }

        let parallel = self.config.parallel && entries.len() >= self.config.parallel_threshold;
        debug!(
            %kind,
            entities = entries.len(),
            pairs = entries.len() * (entries.len() - 1) / 2,
            parallel,
            "Scanning entity pairs"
        );

        let best = if parallel {
            scan_parallel(&entries)
        } else {
            scan_sequential(&entries)
        };
        let best = best?;

        debug!(%kind, a = best.a, b = best.b, score = best.score, "Best pair found");
        Some(SimilarityResult::new(kind, best.a, best.b, best.score))
    }
}

/// Best pair whose first entity is `entries[row]`
fn best_in_row(entries: &[(EntityId, &RelatedSet)], row: usize) -> Option<Candidate> {
    let (a, set_a) = entries[row];
    let mut best: Option<Candidate> = None;

    for &(b, set_b) in &entries[row + 1..] {
        let candidate = Candidate {
            a,
            b,
            score: score(set_a, set_b),
        };
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

fn scan_sequential(entries: &[(EntityId, &RelatedSet)]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for row in 0..entries.len() {
        if let Some(candidate) = best_in_row(entries, row) {
            match best {
                Some(current) if candidate.score <= current.score => {}
                _ => best = Some(candidate),
            }
        }
    }
    best
}

fn scan_parallel(entries: &[(EntityId, &RelatedSet)]) -> Option<Candidate> {
    (0..entries.len())
        .into_par_iter()
        .filter_map(|row| best_in_row(entries, row))
        .reduce_with(|x, y| if y.beats(&x) { y } else { x })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relations(pairs: &[(EntityId, &[i64])]) -> EntityRelationSet {
        let mut set = EntityRelationSet::new();
        for (entity, related) in pairs {
            set.ensure_entity(*entity);
            for id in related.iter() {
                set.insert(*entity, *id);
            }
        }
        set
    }

    fn parallel_engine() -> SimilarityEngine {
        SimilarityEngine::new(EngineConfig {
            parallel: true,
            parallel_threshold: 0,
        })
    }

    #[test]
    fn test_users_example() {
        let users = relations(&[(1, &[1, 2, 3]), (2, &[2, 3, 4]), (3, &[5])]);
        let result = SimilarityEngine::default()
            .most_similar(EntityKind::User, &users)
            .unwrap();

        assert_eq!(result.kind, EntityKind::User);
        assert_eq!(result.pair(), (1, 2));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_score_is_symmetric() {
        let users = relations(&[(1, &[1, 2, 3, 9]), (2, &[2, 3, 4])]);
        let a = users.get(1).unwrap();
        let b = users.get(2).unwrap();
        assert_eq!(score(a, b), 2);
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn test_fewer_than_two_entities() {
        let engine = SimilarityEngine::default();
        assert!(engine
            .most_similar(EntityKind::User, &EntityRelationSet::new())
            .is_none());
        assert!(engine
            .most_similar(EntityKind::User, &relations(&[(1, &[1, 2])]))
            .is_none());
    }

    #[test]
    fn test_zero_score_is_a_result() {
        let companies = relations(&[(5, &[]), (3, &[]), (9, &[])]);
        let result = SimilarityEngine::default()
            .most_similar(EntityKind::Company, &companies)
            .unwrap();
        assert_eq!(result.pair(), (3, 5));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_tie_goes_to_smallest_pair() {
        // (2, 7) and (4, 9) both share two IDs, (2, 7) comes first
        let users = relations(&[
            (9, &[30, 31]),
            (4, &[30, 31]),
            (7, &[10, 11]),
            (2, &[10, 11]),
        ]);
        let result = SimilarityEngine::default()
            .most_similar(EntityKind::User, &users)
            .unwrap();
        assert_eq!(result.pair(), (2, 7));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_tie_on_first_id_goes_to_smaller_second() {
        let users = relations(&[(1, &[10, 11]), (8, &[10, 11]), (3, &[10, 11])]);
        let result = SimilarityEngine::default()
            .most_similar(EntityKind::User, &users)
            .unwrap();
        assert_eq!(result.pair(), (1, 3));
    }

    #[test]
    fn test_no_self_pairing() {
        let users = relations(&[(1, &[1, 2, 3, 4, 5]), (2, &[1])]);
        let result = SimilarityEngine::default()
            .most_similar(EntityKind::User, &users)
            .unwrap();
        assert_eq!(result.pair(), (1, 2));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut users = EntityRelationSet::new();
        for user in 0..60i64 {
            for job in 0..20i64 {
                if (user * 7 + job * 3) % 5 == 0 || (user + job) % 11 == 0 {
                    users.insert(user, job);
                }
            }
        }

        let sequential = SimilarityEngine::default()
            .most_similar(EntityKind::User, &users)
            .unwrap();
        let parallel = parallel_engine()
            .most_similar(EntityKind::User, &users)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_tie_break() {
        let users = relations(&[
            (9, &[30, 31]),
            (4, &[30, 31]),
            (7, &[10, 11]),
            (2, &[10, 11]),
        ]);
        let result = parallel_engine()
            .most_similar(EntityKind::User, &users)
            .unwrap();
        assert_eq!(result.pair(), (2, 7));
    }

    #[test]
    fn test_threshold_keeps_small_inputs_sequential() {
        let engine = SimilarityEngine::new(EngineConfig {
            parallel: true,
            ..EngineConfig::default()
        });
        let users = relations(&[(1, &[1]), (2, &[1])]);
        let result = engine.most_similar(EntityKind::User, &users).unwrap();
        assert_eq!(result.score, 1);
    }
}
