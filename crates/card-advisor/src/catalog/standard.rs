use super::domain::{CardCategory, CardId, CardProfile, RewardType};
use super::store::CardCatalog;

struct CardTemplate {
    id: u32,
    name: &'static str,
    issuer: &'static str,
    joining_fee: f64,
    annual_fee: f64,
    reward_type: RewardType,
    reward_rate: &'static str,
    eligibility_criteria: &'static str,
    perks: &'static str,
    min_income: u32,
    credit_score: u16,
    category: CardCategory,
}

const STANDARD_CARDS: &[CardTemplate] = &[
    CardTemplate {
        id: 1,
        name: "HDFC Regalia Gold",
        issuer: "HDFC Bank",
        joining_fee: 2500.0,
        annual_fee: 2500.0,
        reward_type: RewardType::Points,
        reward_rate: "2.6% on all spends, 5x on partner brands",
        eligibility_criteria: "Salaried with monthly income above 100000, age 21-60",
        perks: "Complimentary airport lounge access, travel points, milestone vouchers",
        min_income: 100000,
        credit_score: 750,
        category: CardCategory::Travel,
    },
    CardTemplate {
        id: 2,
        name: "SBI Cashback Card",
        issuer: "SBI Card",
        joining_fee: 999.0,
        annual_fee: 999.0,
        reward_type: RewardType::Cashback,
        reward_rate: "5% cashback on online spends",
        eligibility_criteria: "Salaried or self-employed, age 21-70",
        perks: "5% cashback on online shopping, 1% cashback offline, fuel surcharge waiver",
        min_income: 20000,
        credit_score: 700,
        category: CardCategory::Shopping,
    },
    CardTemplate {
        id: 3,
        name: "Axis Bank Atlas",
        issuer: "Axis Bank",
        joining_fee: 5000.0,
        annual_fee: 5000.0,
        reward_type: RewardType::Miles,
        reward_rate: "5 EDGE miles per 100 spent on travel",
        eligibility_criteria: "Monthly income above 150000, age 18-70",
        perks: "Lounge access, travel miles transfer to airline partners, travel insurance",
        min_income: 150000,
        credit_score: 760,
        category: CardCategory::Travel,
    },
    CardTemplate {
        id: 4,
        name: "IndianOil Citi Platinum",
        issuer: "Citibank",
        joining_fee: 1000.0,
        annual_fee: 1000.0,
        reward_type: RewardType::Rewards,
        reward_rate: "4 turbo points per 150 spent on fuel",
        eligibility_criteria: "Salaried, age 21 and above",
        perks: "Fuel surcharge waiver, free fuel via turbo points",
        min_income: 25000,
        credit_score: 680,
        category: CardCategory::Fuel,
    },
    CardTemplate {
        id: 5,
        name: "BPCL SBI Card Octane",
        issuer: "SBI Card",
        joining_fee: 1499.0,
        annual_fee: 1499.0,
        reward_type: RewardType::Rewards,
        reward_rate: "7.25% value back on BPCL fuel",
        eligibility_criteria: "Salaried or self-employed, age 21-70",
        perks: "Fuel rewards, 1% fuel surcharge waiver, domestic lounge access",
        min_income: 30000,
        credit_score: 720,
        category: CardCategory::Fuel,
    },
    CardTemplate {
        id: 6,
        name: "HDFC Swiggy Card",
        issuer: "HDFC Bank",
        joining_fee: 500.0,
        annual_fee: 500.0,
        reward_type: RewardType::Cashback,
        reward_rate: "10% cashback on Swiggy, 5% online, 1% other",
        eligibility_criteria: "Salaried with monthly income above 15000",
        perks: "Dining cashback, free Swiggy One membership",
        min_income: 15000,
        credit_score: 690,
        category: CardCategory::Dining,
    },
    CardTemplate {
        id: 7,
        name: "Amazon Pay ICICI",
        issuer: "ICICI Bank",
        joining_fee: 0.0,
        annual_fee: 0.0,
        reward_type: RewardType::Cashback,
        reward_rate: "5% cashback on Amazon for Prime members",
        eligibility_criteria: "Existing ICICI relationship preferred, age 18 and above",
        perks: "Lifetime free, cashback on groceries and bill payments",
        min_income: 0,
        credit_score: 650,
        category: CardCategory::Shopping,
    },
    CardTemplate {
        id: 8,
        name: "IDFC First Millennia",
        issuer: "IDFC First Bank",
        joining_fee: 0.0,
        annual_fee: 0.0,
        reward_type: RewardType::Points,
        reward_rate: "1.5% as reward points on online spends",
        eligibility_criteria: "Age 18 and above with a steady income",
        perks: "Lifetime free, movie ticket discounts, roadside assistance",
        min_income: 12000,
        credit_score: 620,
        category: CardCategory::General,
    },
    CardTemplate {
        id: 9,
        name: "Zomato RBL Edition",
        issuer: "RBL Bank",
        joining_fee: 500.0,
        annual_fee: 500.0,
        reward_type: RewardType::Rewards,
        reward_rate: "2% on dining orders",
        eligibility_criteria: "Salaried, age 21-60",
        perks: "Dining discounts, Zomato Gold membership",
        min_income: 18000,
        credit_score: 640,
        category: CardCategory::Dining,
    },
];

impl CardCatalog {
    /// Built-in catalog used when no card export is configured.
    pub fn standard() -> Self {
        let cards = STANDARD_CARDS
            .iter()
            .map(|template| CardProfile {
                id: CardId(template.id),
                name: template.name.to_string(),
                issuer: template.issuer.to_string(),
                joining_fee: template.joining_fee,
                annual_fee: template.annual_fee,
                reward_type: template.reward_type,
                reward_rate: template.reward_rate.to_string(),
                eligibility_criteria: template.eligibility_criteria.to_string(),
                perks: template.perks.to_string(),
                affiliate_link: None,
                image_url: None,
                min_income: template.min_income,
                credit_score: template.credit_score,
                category: template.category,
            })
            .collect();

        CardCatalog::new(cards)
    }
}
