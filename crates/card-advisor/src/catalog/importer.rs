use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::domain::{CardCategory, CardId, CardProfile, RewardType};
use super::store::CardCatalog;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: usize, reason: String },
    DuplicateId(CardId),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read card catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid card catalog CSV data: {}", err),
            CatalogImportError::InvalidRow { line, reason } => {
                write!(f, "invalid card on line {}: {}", line, reason)
            }
            CatalogImportError::DuplicateId(id) => {
                write!(f, "card id {} appears more than once in the catalog", id)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRow { .. } | CatalogImportError::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a catalog snapshot from a CSV export of the card store.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CardCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CardCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut cards = Vec::new();

        for (index, row) in csv_reader.deserialize::<CardRow>().enumerate() {
            // header occupies line 1
            let line = index + 2;
            let card = row?.into_card(line)?;
            if !seen.insert(card.id) {
                return Err(CatalogImportError::DuplicateId(card.id));
            }
            cards.push(card);
        }

        debug!(cards = cards.len(), "imported card catalog");
        Ok(CardCatalog::new(cards))
    }
}

#[derive(Debug, Deserialize)]
struct CardRow {
    id: u32,
    name: String,
    issuer: String,
    joining_fee: f64,
    annual_fee: f64,
    reward_type: RewardType,
    reward_rate: String,
    #[serde(default)]
    eligibility_criteria: String,
    #[serde(default)]
    perks: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    affiliate_link: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image_url: Option<String>,
    #[serde(default)]
    min_income: u32,
    #[serde(default)]
    credit_score: u16,
    category: CardCategory,
}

impl CardRow {
    fn into_card(self, line: usize) -> Result<CardProfile, CatalogImportError> {
        let invalid = |reason: String| CatalogImportError::InvalidRow { line, reason };

        if self.name.is_empty() {
            return Err(invalid("name is required".to_string()));
        }
        if !(self.joining_fee.is_finite() && self.joining_fee >= 0.0) {
            return Err(invalid(format!(
                "joining fee must be non-negative, got {}",
                self.joining_fee
            )));
        }
        if !(self.annual_fee.is_finite() && self.annual_fee >= 0.0) {
            return Err(invalid(format!(
                "annual fee must be non-negative, got {}",
                self.annual_fee
            )));
        }

        Ok(CardProfile {
            id: CardId(self.id),
            name: self.name,
            issuer: self.issuer,
            joining_fee: self.joining_fee,
            annual_fee: self.annual_fee,
            reward_type: self.reward_type,
            reward_rate: self.reward_rate,
            eligibility_criteria: self.eligibility_criteria,
            perks: self.perks,
            affiliate_link: self.affiliate_link,
            image_url: self.image_url,
            min_income: self.min_income,
            credit_score: self.credit_score,
            category: self.category,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,name,issuer,joining_fee,annual_fee,reward_type,reward_rate,eligibility_criteria,perks,affiliate_link,image_url,min_income,credit_score,category\n";

    #[test]
    fn imports_rows_sorted_by_name() {
        let csv = format!(
            "{HEADER}\
2,Zeta Fuel,Axis Bank,0,499,cashback,4% on fuel,Salaried,Fuel surcharge waiver,,,25000,680,fuel\n\
1,Alpha Travel,HDFC Bank,2500,2500,miles,3.3% on flights,Salaried,\"Lounge access, travel insurance\",https://example.test/apply,,75000,760,travel\n"
        );

        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let names: Vec<&str> = catalog.cards().iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Travel", "Zeta Fuel"]);

        let travel = catalog.find(CardId(1)).expect("travel card present");
        assert_eq!(travel.reward_type, RewardType::Miles);
        assert_eq!(travel.category, CardCategory::Travel);
        assert_eq!(travel.perks, "Lounge access, travel insurance");
        assert_eq!(
            travel.affiliate_link.as_deref(),
            Some("https://example.test/apply")
        );
        assert!(travel.image_url.is_none());
    }

    #[test]
    fn rejects_negative_fees_with_line_number() {
        let csv = format!(
            "{HEADER}1,Broken,Issuer,0,-10,points,1% everywhere,,,,,0,0,general\n"
        );

        match CatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::InvalidRow { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("annual fee"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let csv = format!(
            "{HEADER}\
7,One,Issuer,0,0,points,1%,,,,,0,0,general\n\
7,Two,Issuer,0,0,points,1%,,,,,0,0,general\n"
        );

        match CatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::DuplicateId(id)) => assert_eq!(id, CardId(7)),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_reward_type_is_a_csv_error() {
        let csv = format!("{HEADER}1,Odd,Issuer,0,0,vouchers,1%,,,,,0,0,general\n");

        assert!(matches!(
            CatalogImporter::from_reader(Cursor::new(csv)),
            Err(CatalogImportError::Csv(_))
        ));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = CatalogImporter::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, CatalogImportError::Io(_)));
    }
}
