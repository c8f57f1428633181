use std::sync::Arc;

use twilight_http::Client;

use spellbook_catalog::{SpellApi, SpellCatalog};
use spellbook_utils::pagination::SessionRegistry;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state. The
/// catalog is loaded once at startup and never mutated; the session registry
/// owns all live pagination state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub catalog: Arc<SpellCatalog>,
    pub api: SpellApi,
    pub sessions: SessionRegistry,
}

impl Context {
    /// Create a new application context.
    pub fn new(
        http: Arc<Client>,
        catalog: Arc<SpellCatalog>,
        api: SpellApi,
        sessions: SessionRegistry,
    ) -> Self {
        Self {
            http,
            catalog,
            api,
            sessions,
        }
    }
}
