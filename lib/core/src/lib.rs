//! # likesim Core
//!
//! Core library for likesim.
//!
//! This crate provides the records and indexes the similarity engine runs on:
//!
//! - [`Reaction`] / [`Job`] - Parsed input records
//! - [`EntityRelationSet`] - Entity to deduplicated related-ID sets, ascending by entity
//! - [`ReactionIndex`] - user -> liked jobs and job -> liking users
//! - [`CompanyIndex`] - company -> jobs and company -> users who liked any of its jobs
//!
//! ## Example
//!
//! ```rust
//! use likesim_core::{CompanyIndex, Job, Reaction, ReactionIndex};
//!
//! let reactions = vec![
//!     Reaction::liked(1, 10),
//!     Reaction::liked(2, 10),
//!     Reaction::disliked(2, 11),
//! ];
//! let jobs = vec![Job::new(10, 100), Job::new(11, 200)];
//!
//! let reaction_index = ReactionIndex::build(&reactions);
//! assert_eq!(reaction_index.users_by_job().related_len(10), 2);
//!
//! let company_index = CompanyIndex::build(&jobs, reaction_index.users_by_job());
//! assert_eq!(company_index.users_by_company().related_len(100), 2);
//! assert_eq!(company_index.users_by_company().related_len(200), 0);
//! ```

pub mod error;
pub mod record;
pub mod relation;
pub mod reaction_index;
pub mod company_index;

pub use error::{Error, Result};
pub use record::{CompanyId, Job, JobId, Reaction, UserId};
pub use relation::{EntityId, EntityRelationSet, RelatedId, RelatedSet};
pub use reaction_index::ReactionIndex;
pub use company_index::CompanyIndex;
