//! # likesim Similarity
//!
//! An all-pairs engine for finding the two most similar entities in an
//! [`EntityRelationSet`](likesim_core::EntityRelationSet).
//!
//! The similarity score of two entities is the number of related IDs they
//! share: jobs both users liked, or users who liked a job at both companies.
//! The same engine serves both comparisons, tagged by [`EntityKind`].
//!
//! ## Example
//!
//! ```rust
//! use likesim_core::{Reaction, ReactionIndex};
//! use likesim_similarity::{EntityKind, SimilarityEngine};
//!
//! let reactions = vec![
//!     Reaction::liked(1, 1), Reaction::liked(1, 2), Reaction::liked(1, 3),
//!     Reaction::liked(2, 2), Reaction::liked(2, 3), Reaction::liked(2, 4),
//!     Reaction::liked(3, 5),
//! ];
//! let index = ReactionIndex::build(&reactions);
//!
//! let engine = SimilarityEngine::default();
//! let best = engine
//!     .most_similar(EntityKind::User, index.liked_jobs_by_user())
//!     .unwrap();
//! assert_eq!((best.entity_a, best.entity_b, best.score), (1, 2, 2));
//! ```

pub mod engine;
pub mod result;

pub use engine::{score, EngineConfig, SimilarityEngine, DEFAULT_PARALLEL_THRESHOLD};
pub use result::{EntityKind, SimilarityResult};
