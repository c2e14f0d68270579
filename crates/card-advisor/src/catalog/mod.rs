//! Card catalog snapshot: domain records, CSV import, and lookups.

pub mod domain;
mod importer;
mod standard;
mod store;

pub use domain::{CardCategory, CardId, CardProfile, RewardType};
pub use importer::{CatalogImportError, CatalogImporter};
pub use store::{CardCatalog, CompareError};
