//! Thin client for the remote spell API.

use serde::Deserialize;
use tracing::info;

use crate::catalog::{SpellCatalog, SpellRef};
use crate::detail::SpellDetail;
use crate::error::CatalogError;

/// Public D&D 5e API base.
pub const DEFAULT_API_BASE_URL: &str = "https://www.dnd5eapi.co/api";

#[derive(Debug, Deserialize)]
struct SpellIndexResponse {
    count: usize,
    results: Vec<SpellRef>,
}

/// Clonable handle on the remote spell API.
#[derive(Clone, Debug)]
pub struct SpellApi {
    client: reqwest::Client,
    base_url: String,
}

impl SpellApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the full spell index; the result seeds the immutable catalog.
    ///
    /// Called once at startup. No retry here: a failed fetch fails startup.
    pub async fn fetch_catalog(&self) -> Result<SpellCatalog, CatalogError> {
        let url = format!("{}/spells", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let index: SpellIndexResponse = response.json().await?;
        info!(count = index.count, "spell catalog loaded");

        Ok(SpellCatalog::new(index.results))
    }

    /// Fetch the detail record for one spell by API index.
    pub async fn fetch_spell(&self, index: &str) -> Result<SpellDetail, CatalogError> {
        let url = format!("{}/spells/{}", self.base_url, index);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::UnknownSpell(index.to_owned()));
        }

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
