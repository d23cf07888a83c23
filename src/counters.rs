//! Raw stat counters module.
//!
//! A `CounterSet` is the bag of named numeric counters returned by the
//! stats provider. Lookups of absent counters return `0.0`, so a counter
//! that was never recorded reads the same as one that is zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counter names used by the Counter-Strike stats endpoint.
///
/// These are wire keys and must match the upstream names exactly.
pub mod names {
    pub const TOTAL_KILLS: &str = "total_kills";
    pub const TOTAL_DEATHS: &str = "total_deaths";
    pub const TOTAL_KILLS_HEADSHOT: &str = "total_kills_headshot";
    pub const TOTAL_SHOTS_HIT: &str = "total_shots_hit";
    pub const TOTAL_SHOTS_FIRED: &str = "total_shots_fired";
    pub const TOTAL_MATCHES_WON: &str = "total_matches_won";
    pub const TOTAL_MATCHES_PLAYED: &str = "total_matches_played";
    pub const TOTAL_MVPS: &str = "total_mvps";
    pub const TOTAL_TIME_PLAYED: &str = "total_time_played";
    pub const TOTAL_PLANTED_BOMBS: &str = "total_planted_bombs";
    pub const TOTAL_DEFUSED_BOMBS: &str = "total_defused_bombs";
    pub const TOTAL_DAMAGE_DONE: &str = "total_damage_done";
    pub const TOTAL_MONEY_EARNED: &str = "total_money_earned";
    pub const TOTAL_KILLS_KNIFE: &str = "total_kills_knife";
    pub const TOTAL_KILLS_HEGRENADE: &str = "total_kills_hegrenade";

    /// Weapon kill counters shown in the popular-weapons group, with labels.
    pub const POPULAR_WEAPONS: [(&str, &str); 5] = [
        ("total_kills_ak47", "AK-47"),
        ("total_kills_m4a1", "M4A4"),
        ("total_kills_awp", "AWP"),
        ("total_kills_deagle", "Desert Eagle"),
        ("total_kills_glock", "Glock-18"),
    ];

    /// Map win counters shown in the map-wins group, with labels.
    pub const MAP_WINS: [(&str, &str); 5] = [
        ("total_wins_map_de_dust2", "Dust II"),
        ("total_wins_map_de_inferno", "Inferno"),
        ("total_wins_map_de_nuke", "Nuke"),
        ("total_wins_map_de_train", "Train"),
        ("total_wins_map_de_cbble", "Cobblestone"),
    ];
}

/// Named numeric counters for one player and game.
///
/// # Examples
///
/// ```rust
/// use csstat::CounterSet;
///
/// let counters: CounterSet = [("total_kills", 1500.0), ("total_deaths", 1000.0)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(counters.lookup("total_kills"), 1500.0);
/// assert_eq!(counters.lookup("total_mvps"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterSet {
    values: HashMap<String, f64>,
}

impl CounterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a counter.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Value of `name`, or `0.0` when the counter is absent.
    pub fn lookup(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, f64>> for CounterSet {
    fn from(values: HashMap<String, f64>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CounterSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Value of `name` in `counters`, or `0.0` when absent.
pub fn lookup(counters: &CounterSet, name: &str) -> f64 {
    counters.lookup(name)
}
