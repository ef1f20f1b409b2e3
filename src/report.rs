// Runs both comparisons over a loaded dataset
use likesim_core::{CompanyIndex, Job, Reaction, ReactionIndex};
use likesim_similarity::{EngineConfig, EntityKind, SimilarityEngine, SimilarityResult};

/// Outcome of both comparisons. `None` means fewer than two entities of that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityReport {
    pub users: Option<SimilarityResult>,
    pub companies: Option<SimilarityResult>,
}

impl SimilarityReport {
    /// One line per comparison, users first
    pub fn lines(&self) -> Vec<String> {
        [(EntityKind::User, &self.users), (EntityKind::Company, &self.companies)]
            .into_iter()
            .map(|(kind, result)| match result {
                Some(result) => result.to_string(),
                None => format!("Not enough {kind} entries to compare."),
            })
            .collect()
    }
}

/// Build the reaction and company indexes, then find the most similar
/// pair of users and the most similar pair of companies.
pub fn analyze(reactions: &[Reaction], jobs: &[Job], config: EngineConfig) -> SimilarityReport {
    let reaction_index = ReactionIndex::build(reactions);
    let company_index = CompanyIndex::build(jobs, reaction_index.users_by_job());

    let engine = SimilarityEngine::new(config);
    SimilarityReport {
        users: engine.most_similar(EntityKind::User, reaction_index.liked_jobs_by_user()),
        companies: engine.most_similar(EntityKind::Company, company_index.users_by_company()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_lines() {
        let report = analyze(&[], &[], EngineConfig::default());
        assert_eq!(report.users, None);
        assert_eq!(report.companies, None);
        assert_eq!(
            report.lines(),
            vec![
                "Not enough user entries to compare.".to_string(),
                "Not enough company entries to compare.".to_string(),
            ]
        );
    }
}
