// Company-level indexes derived from jobs and the liking-user index
use crate::record::{CompanyId, Job, JobId};
use crate::relation::EntityRelationSet;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Jobs grouped by company, and the users who liked any job at each company.
///
/// Duplicate job IDs resolve last-write-wins: the job is attributed only to
/// the company on its final occurrence.
#[derive(Debug, Clone, Default)]
pub struct CompanyIndex {
    jobs_by_company: EntityRelationSet,
    users_by_company: EntityRelationSet,
    duplicate_jobs: usize,
}

impl CompanyIndex {
    /// Build both company mappings from `jobs` and the job -> users relation
    pub fn build<'a, I>(jobs: I, users_by_job: &EntityRelationSet) -> Self
    where
        I: IntoIterator<Item = &'a Job>,
    {
        let mut company_by_job: BTreeMap<JobId, CompanyId> = BTreeMap::new();
        let mut companies: Vec<CompanyId> = Vec::new();
        let mut duplicate_jobs = 0;

        for job in jobs {
            companies.push(job.company_id);
            if let Some(previous) = company_by_job.insert(job.job_id, job.company_id) {
                duplicate_jobs += 1;
                warn!(
                    job_id = job.job_id,
                    previous_company = previous,
                    company = job.company_id,
                    "Duplicate job id, keeping last company"
                );
            }
        }

        let mut jobs_by_company = EntityRelationSet::new();
        // A company whose only job was reassigned still counts as an entity
        for company in companies {
            jobs_by_company.ensure_entity(company);
        }
        for (&job_id, &company_id) in &company_by_job {
            jobs_by_company.insert(company_id, job_id);
        }

        let mut users_by_company = EntityRelationSet::new();
        for (&company_id, job_ids) in &jobs_by_company {
            users_by_company.ensure_entity(company_id);
            for &job_id in job_ids.iter() {
                if let Some(users) = users_by_job.get(job_id) {
                    users_by_company.extend(company_id, users.iter());
                }
            }
        }

        info!(
            jobs = company_by_job.len(),
            companies = jobs_by_company.len(),
            duplicate_jobs,
            "Company index built"
        );

        Self {
            jobs_by_company,
            users_by_company,
            duplicate_jobs,
        }
    }

    /// company -> job IDs
    pub fn jobs_by_company(&self) -> &EntityRelationSet {
        &self.jobs_by_company
    }

    /// company -> users who liked at least one of its jobs
    pub fn users_by_company(&self) -> &EntityRelationSet {
        &self.users_by_company
    }

    pub fn duplicate_jobs(&self) -> usize {
        self.duplicate_jobs
    }

    pub fn into_parts(self) -> (EntityRelationSet, EntityRelationSet) {
        (self.jobs_by_company, self.users_by_company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction_index::ReactionIndex;
    use crate::record::Reaction;

    const A: i64 = 1;
    const B: i64 = 2;
    const C: i64 = 3;

    #[test]
    fn test_users_are_unioned_per_company() {
        let jobs = vec![Job::new(1, 100), Job::new(2, 100), Job::new(3, 200)];
        let reactions = vec![
            Reaction::liked(A, 1),
            Reaction::liked(B, 1),
            Reaction::liked(B, 2),
            Reaction::liked(C, 2),
            Reaction::liked(A, 3),
        ];
        let reactions = ReactionIndex::build(&reactions);
        let index = CompanyIndex::build(&jobs, reactions.users_by_job());

        let c1: Vec<_> = {
            let mut users: Vec<_> = index.users_by_company().get(100).unwrap().iter().copied().collect();
            users.sort();
            users
        };
        assert_eq!(c1, vec![A, B, C]);
        assert_eq!(index.users_by_company().related_len(200), 1);
        assert!(index.users_by_company().contains(200, A));
        assert_eq!(index.jobs_by_company().related_len(100), 2);
    }

    #[test]
    fn test_user_counted_once_per_company() {
        let jobs = vec![Job::new(1, 100), Job::new(2, 100), Job::new(3, 100)];
        let reactions = vec![
            Reaction::liked(A, 1),
            Reaction::liked(A, 2),
            Reaction::liked(A, 3),
        ];
        let reactions = ReactionIndex::build(&reactions);
        let index = CompanyIndex::build(&jobs, reactions.users_by_job());

        assert_eq!(index.users_by_company().related_len(100), 1);
    }

    #[test]
    fn test_company_without_likes_is_kept() {
        let jobs = vec![Job::new(1, 100), Job::new(2, 200)];
        let reactions = ReactionIndex::build(&vec![Reaction::liked(A, 1)]);
        let index = CompanyIndex::build(&jobs, reactions.users_by_job());

        assert_eq!(index.users_by_company().len(), 2);
        assert_eq!(index.users_by_company().related_len(200), 0);
        assert!(index.users_by_company().get(200).is_some());
    }

    #[test]
    fn test_duplicate_job_last_write_wins() {
        let jobs = vec![Job::new(1, 100), Job::new(1, 200)];
        let reactions = ReactionIndex::build(&vec![Reaction::liked(A, 1)]);
        let index = CompanyIndex::build(&jobs, reactions.users_by_job());

        assert_eq!(index.duplicate_jobs(), 1);
        assert_eq!(index.jobs_by_company().related_len(100), 0);
        assert!(index.jobs_by_company().contains(200, 1));
        assert_eq!(index.users_by_company().related_len(100), 0);
        assert!(index.users_by_company().contains(200, A));
    }

    #[test]
    fn test_company_sets_are_independent() {
        let jobs = vec![Job::new(1, 100), Job::new(2, 200)];
        let reactions = vec![Reaction::liked(A, 1), Reaction::liked(B, 2)];
        let reactions = ReactionIndex::build(&reactions);
        let (_, mut users_by_company) =
            CompanyIndex::build(&jobs, reactions.users_by_job()).into_parts();

        users_by_company.insert(100, C);
        assert_eq!(users_by_company.related_len(100), 2);
        assert_eq!(users_by_company.related_len(200), 1);
        assert_eq!(reactions.users_by_job().related_len(1), 1);
    }

    #[test]
    fn test_no_jobs() {
        let reactions = ReactionIndex::build(&vec![Reaction::liked(A, 1)]);
        let index = CompanyIndex::build(&Vec::<Job>::new(), reactions.users_by_job());
        assert!(index.users_by_company().is_empty());
        assert!(index.jobs_by_company().is_empty());
    }
}
