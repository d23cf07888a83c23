//! Player display profile.

use serde::{Deserialize, Serialize};

/// The parts of a player summary a presentation layer needs.
///
/// Passed through the deriver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProfile {
    pub display_name: String,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

impl DisplayProfile {
    pub fn new(display_name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar_url: avatar_url.into(),
            profile_url: None,
        }
    }

    pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_omitted_when_absent() {
        let profile = DisplayProfile::new("gaben", "https://avatars/a.jpg");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["display_name"], "gaben");
        assert!(json.get("profile_url").is_none());
    }
}
