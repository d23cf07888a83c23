//! Steam Web API transport.
//!
//! `SteamClient` fetches the two inputs a report needs: the player summary
//! (display name and avatar) and the per-game stat counters.

use crate::config::ClientConfig;
use crate::counters::CounterSet;
use crate::error::ClientError;
use crate::profile::DisplayProfile;
use crate::steam_id::SteamId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const PLAYER_SUMMARIES: &str = "GetPlayerSummaries";
const USER_STATS: &str = "GetUserStatsForGame";

#[derive(Debug, Deserialize)]
struct SummariesEnvelope {
    response: SummariesResponse,
}

#[derive(Debug, Deserialize)]
struct SummariesResponse {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummary {
    personaname: String,
    #[serde(default)]
    avatarfull: String,
    #[serde(default)]
    profileurl: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    playerstats: PlayerStats,
}

#[derive(Debug, Deserialize)]
struct PlayerStats {
    #[serde(default)]
    stats: Vec<StatEntry>,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    name: String,
    value: f64,
}

/// Async client for the two Steam Web API endpoints used by reports.
#[derive(Debug, Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SteamClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("csstat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Display name and avatar for `id`.
    pub async fn player_summary(&self, id: &SteamId) -> Result<DisplayProfile, ClientError> {
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v2/", self.config.base_url);
        let envelope: SummariesEnvelope = self
            .get_json(PLAYER_SUMMARIES, &url, &[("steamids", id.as_str())])
            .await?;

        let player = envelope
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::PlayerNotFound(id.to_string()))?;

        Ok(DisplayProfile {
            display_name: player.personaname,
            avatar_url: player.avatarfull,
            profile_url: player.profileurl,
        })
    }

    /// Raw stat counters for `id` in the configured game.
    pub async fn user_stats(&self, id: &SteamId) -> Result<CounterSet, ClientError> {
        let url = format!(
            "{}/ISteamUserStats/GetUserStatsForGame/v2/",
            self.config.base_url
        );
        let app_id = self.config.app_id.to_string();
        let envelope: StatsEnvelope = self
            .get_json(
                USER_STATS,
                &url,
                &[("steamid", id.as_str()), ("appid", app_id.as_str())],
            )
            .await?;

        Ok(envelope
            .playerstats
            .stats
            .into_iter()
            .map(|entry| (entry.name, entry.value))
            .collect())
    }

    /// Both inputs of a report, fetched concurrently.
    pub async fn fetch(&self, id: &SteamId) -> Result<(DisplayProfile, CounterSet), ClientError> {
        let (profile, counters) = tokio::join!(self.player_summary(id), self.user_stats(id));
        Ok((profile?, counters?))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        tracing::debug!(endpoint, url, "steam api request");

        let response = self
            .http
            .get(url)
            .query(&[("key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "steam api request failed");
            return Err(ClientError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ClientError::Decode { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_summaries() {
        let body = r#"{"response":{"players":[{"steamid":"76561197960287930",
            "personaname":"Rabscuttle","avatarfull":"https://a/full.jpg",
            "profileurl":"https://steamcommunity.com/id/gabelogannewell/"}]}}"#;
        let envelope: SummariesEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.response.players.len(), 1);
        assert_eq!(envelope.response.players[0].personaname, "Rabscuttle");
    }

    #[test]
    fn test_decode_stats_without_stats_field() {
        let envelope: StatsEnvelope =
            serde_json::from_str(r#"{"playerstats":{"steamID":"76561197960287930"}}"#).unwrap();
        assert!(envelope.playerstats.stats.is_empty());
    }

    #[test]
    fn test_client_builds_from_config() {
        let client = SteamClient::new(ClientConfig::new("abc")).unwrap();
        assert_eq!(client.config().app_id, 730);
    }
}
