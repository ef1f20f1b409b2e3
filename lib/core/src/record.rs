// Parsed input records
use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type JobId = i64;
pub type CompanyId = i64;

/// A single user reaction to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub user_id: UserId,
    pub job_id: JobId,
    /// `true` when the user saved the job, `false` when they discarded it
    pub liked: bool,
    /// Reaction time, kept verbatim
    pub timestamp: String,
}

impl Reaction {
    #[inline]
    #[must_use]
    pub fn new(user_id: UserId, job_id: JobId, liked: bool, timestamp: impl Into<String>) -> Self {
        Self {
            user_id,
            job_id,
            liked,
            timestamp: timestamp.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn liked(user_id: UserId, job_id: JobId) -> Self {
        Self::new(user_id, job_id, true, String::new())
    }

    #[inline]
    #[must_use]
    pub fn disliked(user_id: UserId, job_id: JobId) -> Self {
        Self::new(user_id, job_id, false, String::new())
    }
}

/// A job posting and the company it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub company_id: CompanyId,
}

impl Job {
    #[inline]
    #[must_use]
    pub fn new(job_id: JobId, company_id: CompanyId) -> Self {
        Self { job_id, company_id }
    }
}
