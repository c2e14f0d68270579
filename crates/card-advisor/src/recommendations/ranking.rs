use crate::catalog::CardProfile;

use super::scoring::ScoreComponent;

pub const DEFAULT_LIMIT: usize = 5;

/// An eligible card paired with the score it earned for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCard<'a> {
    pub card: &'a CardProfile,
    pub score: u32,
    pub components: Vec<ScoreComponent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCards<'a> {
    pub cards: Vec<ScoredCard<'a>>,
    /// Number of cards that were scored, before truncation.
    pub total_eligible: usize,
}

/// Highest score first. The sort is stable, so equal scores keep their input (catalog) order.
pub fn rank<'a>(mut scored: Vec<ScoredCard<'a>>, limit: usize) -> RankedCards<'a> {
    let total_eligible = scored.len();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    RankedCards {
        cards: scored,
        total_eligible,
    }
}
