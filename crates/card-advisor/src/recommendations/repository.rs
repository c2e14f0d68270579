use super::profile::{SessionId, UserProfile};

/// Storage for profiles collected by the conversation flow, keyed by session.
pub trait PreferenceRepository: Send + Sync {
    fn upsert(&self, session_id: &SessionId, profile: UserProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, session_id: &SessionId) -> Result<Option<UserProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
