// Liked-job and liking-user indexes built from reactions
use crate::record::Reaction;
use crate::relation::EntityRelationSet;
use tracing::info;

/// Both directions of the "user liked job" relation.
///
/// Dislikes are dropped on the way in. A dislike never retracts an earlier
/// like for the same pair, so input order does not change the result.
#[derive(Debug, Clone, Default)]
pub struct ReactionIndex {
    liked_jobs_by_user: EntityRelationSet,
    users_by_job: EntityRelationSet,
    reactions_seen: usize,
    likes_accepted: usize,
}

impl ReactionIndex {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index in a single pass over `reactions`
    pub fn build<'a, I>(reactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Reaction>,
    {
        let mut index = Self::new();
        for reaction in reactions {
            index.add(reaction);
        }

        info!(
            reactions = index.reactions_seen,
            likes = index.likes_accepted,
            users = index.liked_jobs_by_user.len(),
            jobs = index.users_by_job.len(),
            "Reaction index built"
        );
        index
    }

    pub fn add(&mut self, reaction: &Reaction) {
        self.reactions_seen += 1;
        if !reaction.liked {
            return;
        }

        self.likes_accepted += 1;
        self.liked_jobs_by_user.insert(reaction.user_id, reaction.job_id);
        self.users_by_job.insert(reaction.job_id, reaction.user_id);
    }

    /// user -> jobs the user liked
    pub fn liked_jobs_by_user(&self) -> &EntityRelationSet {
        &self.liked_jobs_by_user
    }

    /// job -> users who liked the job
    pub fn users_by_job(&self) -> &EntityRelationSet {
        &self.users_by_job
    }

    pub fn into_parts(self) -> (EntityRelationSet, EntityRelationSet) {
        (self.liked_jobs_by_user, self.users_by_job)
    }

    pub fn reactions_seen(&self) -> usize {
        self.reactions_seen
    }

    /// Liked reactions, duplicates included
    pub fn likes_accepted(&self) -> usize {
        self.likes_accepted
    }

    pub fn dislikes_ignored(&self) -> usize {
        self.reactions_seen - self.likes_accepted
    }
}
