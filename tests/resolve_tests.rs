//! Tests for profile reference resolution.

use csstat::*;

const IDS: [&str; 3] = [
    "76561197960287930",
    "76561198000000001",
    "00000000000000000",
];

/// Any 17-digit string resolves to itself.
#[test]
fn test_raw_ids_are_identity() {
    for id in IDS {
        assert_eq!(resolve(id).unwrap().as_str(), id);
    }
}

/// Profile URLs resolve with and without a trailing slash.
#[test]
fn test_profile_urls() {
    for id in IDS {
        let bare = format!("https://steamcommunity.com/profiles/{id}");
        let slashed = format!("{bare}/");
        assert_eq!(resolve(&bare).unwrap().as_str(), id);
        assert_eq!(resolve(&slashed).unwrap().as_str(), id);
    }
}

/// Custom alias URLs are recognized but cannot be resolved.
#[test]
fn test_alias_urls() {
    for alias in ["gaben", "s1mple", "some_player-99"] {
        for input in [
            format!("https://steamcommunity.com/id/{alias}"),
            format!("https://steamcommunity.com/id/{alias}/"),
        ] {
            let err = resolve(&input).unwrap_err();
            assert_eq!(err, ResolveError::AliasUnresolvable(alias.to_string()));
            assert_eq!(err.kind(), "alias-unresolvable");
        }
    }
}

/// Inputs matching no accepted form.
#[test]
fn test_unrecognized() {
    for input in ["not a steam id", "12345", "https://steamcommunity.com/"] {
        let err = resolve(input).unwrap_err();
        assert_eq!(err.kind(), "unrecognized-format", "{input}");
    }
}

/// The caller is responsible for trimming.
#[test]
fn test_no_trimming() {
    assert!(resolve("76561197960287930\n").is_err());
    assert!(resolve(" 76561197960287930").is_err());
}

/// Profile URLs only accept ASCII digits, so every resolved id round-trips.
#[test]
fn test_profile_url_rejects_non_ascii_digits() {
    for input in [
        "https://steamcommunity.com/profiles/７６５６１１９７９６０２８７９３０",
        "https://steamcommunity.com/profiles/٧٦٥٦١١٩٧٩٦٠٢٨٧٩٣٠",
    ] {
        let err = resolve(input).unwrap_err();
        assert_eq!(err.kind(), "unrecognized-format", "{input}");
    }

    let id = resolve("https://steamcommunity.com/profiles/76561197960287930").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(serde_json::from_str::<SteamId>(&json).unwrap(), id);
}
