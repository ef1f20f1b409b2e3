//! # likesim
//!
//! Finds the most similar pair of users and the most similar pair of
//! companies in a log of user reactions to job postings.
//!
//! - Two users are as similar as the number of jobs they both liked.
//! - Two companies are as similar as the number of users who liked at least
//!   one job at each of them.
//!
//! ## Quick Start
//!
//! ### As a Binary
//!
//! ```bash
//! likesim --data-dir ./data
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use likesim::prelude::*;
//!
//! let reactions = vec![
//!     Reaction::liked(1, 1), Reaction::liked(1, 2),
//!     Reaction::liked(2, 1), Reaction::liked(2, 2),
//!     Reaction::liked(3, 3),
//! ];
//! let jobs = vec![Job::new(1, 10), Job::new(2, 20), Job::new(3, 20)];
//!
//! let report = analyze(&reactions, &jobs, EngineConfig::default());
//! let users = report.users.unwrap();
//! assert_eq!((users.entity_a, users.entity_b, users.score), (1, 2, 2));
//! let companies = report.companies.unwrap();
//! assert_eq!((companies.entity_a, companies.entity_b, companies.score), (10, 20, 2));
//! ```
//!
//! ## Crate Structure
//!
//! - `likesim-core` - Records, relation sets, reaction and company indexes
//! - `likesim-similarity` - The all-pairs similarity engine
//! - `likesim-storage` - CSV ingestion of the reactions and jobs files

mod report;

pub use report::{analyze, SimilarityReport};

// Re-export core types
pub use likesim_core::{
    CompanyId, CompanyIndex, EntityId, EntityRelationSet, Error, Job, JobId, Reaction,
    ReactionIndex, RelatedSet, Result, UserId,
};

// Re-export the engine
pub use likesim_similarity::{EngineConfig, EntityKind, SimilarityEngine, SimilarityResult};

// Re-export storage
pub use likesim_storage::{DataPaths, Dataset, DatasetLoader};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analyze, DataPaths, Dataset, DatasetLoader, EngineConfig, EntityKind, EntityRelationSet,
        Error, Job, Reaction, Result, SimilarityEngine, SimilarityReport, SimilarityResult,
    };
}
