//! Lookup service.
//!
//! Glues the pieces together for a command handler: resolve the user's
//! input, fetch both upstream payloads, derive the report.

use crate::client::SteamClient;
use crate::error::Error;
use crate::report::{derive, PlayerReport};
use crate::steam_id::resolve;

/// Answers "stats for <profile>" requests.
#[derive(Debug, Clone)]
pub struct StatsService {
    client: SteamClient,
}

impl StatsService {
    pub fn new(client: SteamClient) -> Self {
        Self { client }
    }

    /// Resolve `input`, fetch its data and derive a report.
    ///
    /// Surrounding whitespace is trimmed before resolution.
    #[tracing::instrument(skip(self))]
    pub async fn report(&self, input: &str) -> Result<PlayerReport, Error> {
        let steam_id = resolve(input.trim())?;
        tracing::info!(%steam_id, "resolved profile reference");

        let (profile, counters) = self.client.fetch(&steam_id).await?;
        Ok(derive(&counters, profile).with_steam_id(steam_id))
    }
}
