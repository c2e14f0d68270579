use crate::infra::{load_catalog, parse_credit_band};
use card_advisor::catalog::{CardCatalog, CardCategory, CardProfile};
use card_advisor::config::AppConfig;
use card_advisor::error::AppError;
use card_advisor::recommendations::rewards::format_rupees;
use card_advisor::recommendations::{
    CreditScoreBand, RecommendationEngine, RecommendationSet, RewardProjection, SpendingHabits,
    UserProfile,
};
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Monthly income in rupees
    #[arg(long)]
    pub(crate) income: Option<u32>,
    /// Highest annual fee you are willing to pay
    #[arg(long)]
    pub(crate) max_fee: Option<u32>,
    /// Credit band: excellent, good, fair, poor or unknown
    #[arg(long, value_parser = parse_credit_band)]
    pub(crate) credit_score: Option<CreditScoreBand>,
    /// Preferred benefit tag (repeatable), e.g. cashback or lounge_access
    #[arg(long)]
    pub(crate) benefit: Vec<String>,
    /// Monthly fuel spend
    #[arg(long)]
    pub(crate) fuel: Option<u32>,
    /// Monthly travel spend
    #[arg(long)]
    pub(crate) travel: Option<u32>,
    /// Monthly grocery spend
    #[arg(long)]
    pub(crate) groceries: Option<u32>,
    /// Monthly dining spend
    #[arg(long)]
    pub(crate) dining: Option<u32>,
    /// Monthly shopping spend
    #[arg(long)]
    pub(crate) shopping: Option<u32>,
    /// Number of cards to return (defaults to RECOMMENDATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<NonZeroUsize>,
    /// Card catalog CSV (defaults to CARD_CATALOG_PATH or the built-in catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the recommendation payload as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CardsArgs {
    /// Only list cards in this category (travel, shopping, fuel, dining, general)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Case-insensitive search over name, issuer and reward type
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Card catalog CSV (defaults to CARD_CATALOG_PATH or the built-in catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

impl RecommendArgs {
    fn profile(&self) -> UserProfile {
        let habits = SpendingHabits {
            fuel: self.fuel,
            travel: self.travel,
            groceries: self.groceries,
            dining: self.dining,
            shopping: self.shopping,
        };
        let spending_habits = (habits != SpendingHabits::default()).then_some(habits);
        let preferred_benefits = (!self.benefit.is_empty()).then(|| self.benefit.clone());

        UserProfile {
            monthly_income: self.income,
            spending_habits,
            preferred_benefits,
            existing_cards: None,
            credit_score: self.credit_score,
            preferred_card_type: None,
            max_annual_fee: self.max_fee,
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = args.catalog.clone().or(config.catalog.path);
    let catalog = load_catalog(catalog_path.as_deref())?;
    let engine = RecommendationEngine::new(args.limit.unwrap_or(config.recommendations.limit));

    let profile = args.profile();
    let set = engine.generate(&profile, catalog.cards());

    if args.json {
        let payload = serde_json::to_string_pretty(&set).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        print!("{}", render_recommendations(&set));
    }
    Ok(())
}

pub(crate) fn run_cards(args: CardsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = args.catalog.clone().or(config.catalog.path);
    let catalog = load_catalog(catalog_path.as_deref())?;

    print!("{}", render_cards(&select_cards(&catalog, &args)));
    Ok(())
}

fn select_cards<'a>(catalog: &'a CardCatalog, args: &CardsArgs) -> Vec<&'a CardProfile> {
    let mut cards: Vec<&CardProfile> = match &args.category {
        Some(raw) => match CardCategory::parse(raw) {
            Some(category) => catalog.by_category(category),
            None => Vec::new(),
        },
        None => catalog.cards().iter().collect(),
    };

    if let Some(query) = &args.search {
        let matches = catalog.search(query);
        cards.retain(|card| matches.iter().any(|candidate| candidate.id == card.id));
    }
    cards
}

pub(crate) fn render_recommendations(set: &RecommendationSet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Card recommendations ({} of {} eligible)\n",
        set.recommendations.len(),
        set.total_eligible
    ));
    if set.recommendations.is_empty() {
        out.push_str("- No cards match this profile\n");
        return out;
    }

    for (position, recommendation) in set.recommendations.iter().enumerate() {
        let card = &recommendation.card;
        out.push_str(&format!(
            "{}. {} ({}) score {}\n",
            position + 1,
            card.name,
            card.issuer,
            recommendation.score
        ));
        out.push_str(&format!(
            "   {} | {} rewards | annual fee {} | {}\n",
            card.category,
            card.reward_type,
            format_rupees(card.annual_fee),
            card.reward_rate
        ));
        for reason in &recommendation.reasons {
            out.push_str(&format!("   - {}\n", reason));
        }
        match &recommendation.estimated_rewards {
            RewardProjection::Estimated(estimate) => {
                let display = estimate.display();
                out.push_str(&format!(
                    "   Estimated rewards {} on {} yearly spend (net {})\n",
                    display.estimated_rewards, display.annual_spending, display.net_benefit
                ));
            }
            RewardProjection::Unavailable(reason) => {
                out.push_str(&format!("   Estimated rewards: {}\n", reason.message()));
            }
        }
    }
    out
}

pub(crate) fn render_cards(cards: &[&CardProfile]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} cards\n", cards.len()));
    for card in cards {
        out.push_str(&format!(
            "- [{}] {} ({}) | {} | {} | annual fee {} | min income {}\n",
            card.id,
            card.name,
            card.issuer,
            card.category,
            card.reward_type,
            format_rupees(card.annual_fee),
            format_rupees(f64::from(card.min_income))
        ));
    }
    out
}
