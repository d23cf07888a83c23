//! Steam identifier module.
//!
//! Provides the `SteamId` type, the canonical 17-digit profile identifier,
//! and [`resolve`], which normalizes the reference forms users paste into
//! chat into a `SteamId`.

use crate::error::ResolveError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;

/// Number of decimal digits in a canonical Steam ID.
pub const STEAM_ID_LEN: usize = 17;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?steamcommunity\.com/profiles/([0-9]{17})/?$")
        .expect("profile url pattern is valid")
});

static ALIAS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?steamcommunity\.com/id/([^/\s]+)/?$")
        .expect("alias url pattern is valid")
});

/// Canonical 17-digit Steam ID.
///
/// Every value holds exactly 17 ASCII digits. Values come from [`resolve`]
/// or [`SteamId::parse`].
///
/// # Examples
///
/// ```rust
/// use csstat::SteamId;
///
/// let id = SteamId::parse("76561197960287930").unwrap();
/// assert_eq!(id.as_str(), "76561197960287930");
/// assert!(SteamId::parse("12345").is_none());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SteamId(String);

impl SteamId {
    /// Accept `s` only if it is already exactly 17 digits.
    pub fn parse(s: &str) -> Option<Self> {
        is_canonical(s).then(|| Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric-profile URL on steamcommunity.com.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csstat::SteamId;
    ///
    /// let id = SteamId::parse("76561197960287930").unwrap();
    /// assert_eq!(
    ///     id.profile_url(),
    ///     "https://steamcommunity.com/profiles/76561197960287930"
    /// );
    /// ```
    pub fn profile_url(&self) -> String {
        format!("https://steamcommunity.com/profiles/{}", self.0)
    }
}

fn is_canonical(s: &str) -> bool {
    s.len() == STEAM_ID_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve a profile reference into a [`SteamId`].
///
/// Forms are tried in order:
/// 1. exactly 17 digits, returned unchanged
/// 2. `steamcommunity.com/profiles/<17 digits>`, optional trailing `/`
/// 3. `steamcommunity.com/id/<alias>`, optional trailing `/`, which fails
///    with [`ResolveError::AliasUnresolvable`]
///
/// Anything else fails with [`ResolveError::UnrecognizedFormat`]. The input
/// is not trimmed or case-folded.
///
/// # Examples
///
/// ```rust
/// use csstat::{resolve, ResolveError};
///
/// let id = resolve("https://steamcommunity.com/profiles/76561197960287930/").unwrap();
/// assert_eq!(id.as_str(), "76561197960287930");
///
/// assert!(matches!(resolve("12345"), Err(ResolveError::UnrecognizedFormat(_))));
/// ```
pub fn resolve(input: &str) -> Result<SteamId, ResolveError> {
    if let Some(id) = SteamId::parse(input) {
        return Ok(id);
    }

    if let Some(caps) = PROFILE_URL.captures(input) {
        return Ok(SteamId(caps[1].to_owned()));
    }

    if let Some(caps) = ALIAS_URL.captures(input) {
        return Err(ResolveError::AliasUnresolvable(caps[1].to_owned()));
    }

    Err(ResolveError::UnrecognizedFormat(input.to_owned()))
}

impl std::str::FromStr for SteamId {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl AsRef<str> for SteamId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SteamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SteamId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SteamId::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("not a 17-digit Steam ID: {s:?}")))
    }
}
