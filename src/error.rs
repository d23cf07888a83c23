//! Error types.
//!
//! Each concern has its own enum: [`ResolveError`] for profile references,
//! [`ConfigError`] for configuration loading and [`ClientError`] for the
//! Steam Web API transport. [`Error`] wraps all three, plus report
//! encoding failures, for callers that only want a single type.

use thiserror::Error;

/// Why a profile reference could not be turned into a [`SteamId`](crate::SteamId).
///
/// # Examples
///
/// ```rust
/// use csstat::{resolve, ResolveError};
///
/// let err = resolve("https://steamcommunity.com/id/gaben").unwrap_err();
/// assert_eq!(err, ResolveError::AliasUnresolvable("gaben".to_string()));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A custom `/id/<alias>` URL was recognized.
    ///
    /// Aliases need a vanity-URL lookup this crate does not perform.
    #[error("custom profile alias '{0}' must be converted to a 17-digit Steam ID")]
    AliasUnresolvable(String),

    /// The input matched none of the accepted forms.
    #[error("unrecognized profile reference: {0:?}")]
    UnrecognizedFormat(String),
}

impl ResolveError {
    /// Stable kind tag, usable by callers that branch on the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::AliasUnresolvable(_) => "alias-unresolvable",
            ResolveError::UnrecognizedFormat(_) => "unrecognized-format",
        }
    }

    /// User-facing hint for what to send instead.
    pub fn guidance(&self) -> &'static str {
        match self {
            ResolveError::AliasUnresolvable(_) => {
                "That looks like a custom profile URL. Convert it to a 17-digit Steam ID \
                 (for example with https://steamid.io) and try again."
            }
            ResolveError::UnrecognizedFormat(_) => {
                "Send a 17-digit Steam ID or a profile URL such as \
                 https://steamcommunity.com/profiles/76561197960287930"
            }
        }
    }
}

/// Configuration could not be loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable is set but not usable.
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Failures of the Steam Web API transport.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, timeout, or the client could not be built.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// The stats endpoint answers 403 for private profiles.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The summary endpoint returned no player for the id.
    #[error("no Steam player found for {0}")]
    PlayerNotFound(String),

    /// The body was not the expected JSON shape.
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Any failure along the lookup path.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// A report could not be encoded as JSON.
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_kinds() {
        let alias = ResolveError::AliasUnresolvable("gaben".into());
        let unknown = ResolveError::UnrecognizedFormat("nope".into());
        assert_eq!(alias.kind(), "alias-unresolvable");
        assert_eq!(unknown.kind(), "unrecognized-format");
        assert_ne!(alias.guidance(), unknown.guidance());
    }

    #[test]
    fn test_error_display() {
        let err = ResolveError::AliasUnresolvable("gaben".into());
        assert!(err.to_string().contains("gaben"));

        let err = ClientError::Status {
            endpoint: "GetUserStatsForGame",
            status: 403,
        };
        assert_eq!(err.to_string(), "GetUserStatsForGame returned status 403");
    }

    #[test]
    fn test_wrapped_error_is_transparent() {
        let err: Error = ConfigError::Missing("STEAM_API_KEY").into();
        assert_eq!(
            err.to_string(),
            "missing required environment variable STEAM_API_KEY"
        );
    }

    #[test]
    fn test_encode_error_is_reported() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Encode(_)));
        assert!(err.to_string().starts_with("failed to encode report: "));
    }
}
