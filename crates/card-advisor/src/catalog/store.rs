use std::collections::HashSet;

use super::domain::{CardCategory, CardId, CardProfile};

/// Read-only snapshot of the card catalog, kept in name order so rankings break ties the same
/// way on every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardCatalog {
    cards: Vec<CardProfile>,
}

impl CardCatalog {
    pub fn new(mut cards: Vec<CardProfile>) -> Self {
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        Self { cards }
    }

    pub fn cards(&self) -> &[CardProfile] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn find(&self, id: CardId) -> Option<&CardProfile> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn by_category(&self, category: CardCategory) -> Vec<&CardProfile> {
        self.cards
            .iter()
            .filter(|card| card.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, issuer and reward type.
    pub fn search(&self, query: &str) -> Vec<&CardProfile> {
        let needle = query.trim().to_lowercase();
        self.cards
            .iter()
            .filter(|card| {
                card.name.to_lowercase().contains(&needle)
                    || card.issuer.to_lowercase().contains(&needle)
                    || card.reward_type.as_str().contains(&needle)
            })
            .collect()
    }

    /// Side-by-side lookup of specific cards, returned in name order.
    pub fn compare(&self, ids: &[CardId]) -> Result<Vec<&CardProfile>, CompareError> {
        let requested: HashSet<CardId> = ids.iter().copied().collect();
        if requested.len() < 2 {
            return Err(CompareError::TooFewCards);
        }

        let found: Vec<&CardProfile> = self
            .cards
            .iter()
            .filter(|card| requested.contains(&card.id))
            .collect();

        if found.len() != requested.len() {
            let mut missing: Vec<CardId> = requested
                .into_iter()
                .filter(|id| !found.iter().any(|card| card.id == *id))
                .collect();
            missing.sort();
            return Err(CompareError::NotFound(missing));
        }

        Ok(found)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("at least 2 card IDs are required for comparison")]
    TooFewCards,
    #[error("some cards not found: {0:?}")]
    NotFound(Vec<CardId>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CardCatalog {
        CardCatalog::standard()
    }

    #[test]
    fn keeps_cards_in_name_order() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.cards().iter().map(|card| card.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn search_matches_issuer_case_insensitively() {
        let catalog = catalog();
        let hits = catalog.search("hdfc");
        assert!(!hits.is_empty());
        assert!(hits
            .iter()
            .all(|card| card.issuer.to_lowercase().contains("hdfc")
                || card.name.to_lowercase().contains("hdfc")));
    }

    #[test]
    fn search_matches_reward_type() {
        let catalog = catalog();
        let hits = catalog.search("Miles");
        assert!(hits
            .iter()
            .any(|card| card.reward_type.as_str() == "miles"));
    }

    #[test]
    fn by_category_filters() {
        let catalog = catalog();
        let fuel = catalog.by_category(CardCategory::Fuel);
        assert!(!fuel.is_empty());
        assert!(fuel.iter().all(|card| card.category == CardCategory::Fuel));
    }

    #[test]
    fn compare_requires_two_distinct_ids() {
        let catalog = catalog();
        let id = catalog.cards()[0].id;
        assert_eq!(catalog.compare(&[id]), Err(CompareError::TooFewCards));
        assert_eq!(catalog.compare(&[id, id]), Err(CompareError::TooFewCards));
    }

    #[test]
    fn compare_reports_missing_ids() {
        let catalog = catalog();
        let id = catalog.cards()[0].id;
        assert_eq!(
            catalog.compare(&[id, CardId(9999)]),
            Err(CompareError::NotFound(vec![CardId(9999)]))
        );
    }

    #[test]
    fn compare_returns_cards_in_name_order() {
        let catalog = catalog();
        let first = catalog.cards()[0].id;
        let second = catalog.cards()[1].id;
        let compared = catalog.compare(&[second, first]).expect("both cards exist");
        assert_eq!(compared[0].id, first);
        assert_eq!(compared[1].id, second);
    }
}
