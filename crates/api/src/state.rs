//! Shared application state.

use std::path::PathBuf;

use generation::{GenerationClient, MarketingGenerator};

use crate::auth::DemoAccount;

/// Immutable state handed to every handler.
///
/// Built once at startup; nothing in it changes while the server runs.
pub struct AppState<C: GenerationClient> {
    pub account: DemoAccount,
    pub generator: MarketingGenerator<C>,
    pub index_path: PathBuf,
}

impl<C: GenerationClient> AppState<C> {
    /// State with the default demo account.
    pub fn new(client: C, index_path: impl Into<PathBuf>) -> Self {
        Self {
            account: DemoAccount::default(),
            generator: MarketingGenerator::new(client),
            index_path: index_path.into(),
        }
    }
}
