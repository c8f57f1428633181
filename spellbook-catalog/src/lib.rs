/// Thin client for the remote spell API.
pub mod api;
/// Preloaded spell name catalog.
pub mod catalog;
/// Spell detail model and display shaping.
pub mod detail;
/// Typed catalog errors.
pub mod error;

pub use api::{DEFAULT_API_BASE_URL, SpellApi};
pub use catalog::{SpellCatalog, SpellRef};
pub use detail::SpellDetail;
pub use error::CatalogError;
