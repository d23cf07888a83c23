//! Derived report module.
//!
//! Contains [`derive`], which turns raw counters into a [`PlayerReport`]:
//! six fixed groups of display-ready metrics plus the player's display
//! profile.

use crate::counters::{names, CounterSet};
use crate::format::{duration, percent, ratio, thousands};
use crate::profile::DisplayProfile;
use crate::steam_id::SteamId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The metric groups of a report, in presentation order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    General,
    Combat,
    Match,
    WeaponCore,
    WeaponPopular,
    MapWins,
}

impl GroupKind {
    pub const ALL: [GroupKind; 6] = [
        GroupKind::General,
        GroupKind::Combat,
        GroupKind::Match,
        GroupKind::WeaponCore,
        GroupKind::WeaponPopular,
        GroupKind::MapWins,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GroupKind::General => "General",
            GroupKind::Combat => "Combat",
            GroupKind::Match => "Matches",
            GroupKind::WeaponCore => "Weapons",
            GroupKind::WeaponPopular => "Popular Weapons (kills)",
            GroupKind::MapWins => "Map Wins",
        }
    }
}

/// Field labels used in the report groups.
pub mod labels {
    pub const TIME_PLAYED: &str = "Time Played";
    pub const BOMBS_PLANTED: &str = "Bombs Planted";
    pub const BOMBS_DEFUSED: &str = "Bombs Defused";
    pub const DAMAGE_DONE: &str = "Damage Done";
    pub const MONEY_EARNED: &str = "Money Earned";

    pub const KILLS: &str = "Kills";
    pub const DEATHS: &str = "Deaths";
    pub const HEADSHOTS: &str = "Headshot Kills";
    pub const ACCURACY: &str = "Accuracy";
    pub const KD_RATIO: &str = "K/D Ratio";

    pub const MATCHES_PLAYED: &str = "Matches Played";
    pub const MATCHES_WON: &str = "Matches Won";
    pub const MVPS: &str = "MVPs";
    pub const WIN_RATE: &str = "Win Rate";

    pub const SHOTS_FIRED: &str = "Shots Fired";
    pub const SHOTS_HIT: &str = "Shots Hit";
    pub const KNIFE_KILLS: &str = "Knife Kills";
    pub const GRENADE_KILLS: &str = "Grenade Kills";
}

/// One labelled, formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// A titled list of metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricGroup {
    pub kind: GroupKind,
    pub metrics: Vec<Metric>,
}

impl MetricGroup {
    fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            metrics: Vec::new(),
        }
    }

    fn push(&mut self, label: impl Into<String>, value: String) {
        self.metrics.push(Metric {
            label: label.into(),
            value,
        });
    }

    /// Formatted value for `label`, if the group has it.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }
}

/// Display-ready statistics for one player.
///
/// Produced fresh by [`derive`] and not meant to be mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use csstat::report::{derive, labels, GroupKind};
/// use csstat::{CounterSet, DisplayProfile};
///
/// let counters: CounterSet = [("total_kills", 150.0), ("total_deaths", 100.0)]
///     .into_iter()
///     .collect();
/// let report = derive(&counters, DisplayProfile::new("gaben", ""));
///
/// assert_eq!(report.metric(GroupKind::Combat, labels::KD_RATIO), Some("1.50"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<SteamId>,
    pub profile: DisplayProfile,
    pub groups: Vec<MetricGroup>,
}

impl PlayerReport {
    pub fn with_steam_id(mut self, steam_id: SteamId) -> Self {
        self.steam_id = Some(steam_id);
        self
    }

    pub fn group(&self, kind: GroupKind) -> Option<&MetricGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    pub fn metric(&self, kind: GroupKind, label: &str) -> Option<&str> {
        self.group(kind).and_then(|g| g.get(label))
    }
}

impl fmt::Display for PlayerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CS:GO stats for {}", self.profile.display_name)?;
        if let Some(id) = &self.steam_id {
            write!(f, " ({id})")?;
        }
        writeln!(f)?;
        for group in &self.groups {
            writeln!(f)?;
            writeln!(f, "{}", group.kind.title())?;
            for metric in &group.metrics {
                writeln!(f, "  {}: {}", metric.label, metric.value)?;
            }
        }
        Ok(())
    }
}

/// Build a [`PlayerReport`] from raw counters.
///
/// Total over its inputs: absent counters read as `0` and divisions are not
/// guarded, so a zero denominator yields `NaN`/`inf` in the rendered value.
pub fn derive(counters: &CounterSet, profile: DisplayProfile) -> PlayerReport {
    tracing::debug!(counters = counters.len(), player = %profile.display_name, "deriving report");

    let count = |name: &str| thousands(counters.lookup(name));

    let mut general = MetricGroup::new(GroupKind::General);
    general.push(
        labels::TIME_PLAYED,
        duration(counters.lookup(names::TOTAL_TIME_PLAYED)),
    );
    general.push(labels::BOMBS_PLANTED, count(names::TOTAL_PLANTED_BOMBS));
    general.push(labels::BOMBS_DEFUSED, count(names::TOTAL_DEFUSED_BOMBS));
    general.push(labels::DAMAGE_DONE, count(names::TOTAL_DAMAGE_DONE));
    general.push(labels::MONEY_EARNED, count(names::TOTAL_MONEY_EARNED));

    let mut combat = MetricGroup::new(GroupKind::Combat);
    combat.push(labels::KILLS, count(names::TOTAL_KILLS));
    combat.push(labels::DEATHS, count(names::TOTAL_DEATHS));
    combat.push(labels::HEADSHOTS, count(names::TOTAL_KILLS_HEADSHOT));
    combat.push(
        labels::ACCURACY,
        percent(
            counters.lookup(names::TOTAL_SHOTS_HIT),
            counters.lookup(names::TOTAL_SHOTS_FIRED),
        ),
    );
    combat.push(
        labels::KD_RATIO,
        ratio(
            counters.lookup(names::TOTAL_KILLS),
            counters.lookup(names::TOTAL_DEATHS),
        ),
    );

    let mut matches = MetricGroup::new(GroupKind::Match);
    matches.push(labels::MATCHES_PLAYED, count(names::TOTAL_MATCHES_PLAYED));
    matches.push(labels::MATCHES_WON, count(names::TOTAL_MATCHES_WON));
    matches.push(labels::MVPS, count(names::TOTAL_MVPS));
    matches.push(
        labels::WIN_RATE,
        percent(
            counters.lookup(names::TOTAL_MATCHES_WON),
            counters.lookup(names::TOTAL_MATCHES_PLAYED),
        ),
    );

    let mut weapons = MetricGroup::new(GroupKind::WeaponCore);
    weapons.push(labels::SHOTS_FIRED, count(names::TOTAL_SHOTS_FIRED));
    weapons.push(labels::SHOTS_HIT, count(names::TOTAL_SHOTS_HIT));
    weapons.push(labels::KNIFE_KILLS, count(names::TOTAL_KILLS_KNIFE));
    weapons.push(labels::GRENADE_KILLS, count(names::TOTAL_KILLS_HEGRENADE));

    let mut popular = MetricGroup::new(GroupKind::WeaponPopular);
    for (name, label) in names::POPULAR_WEAPONS {
        popular.push(label, count(name));
    }

    let mut maps = MetricGroup::new(GroupKind::MapWins);
    for (name, label) in names::MAP_WINS {
        maps.push(label, count(name));
    }

    PlayerReport {
        steam_id: None,
        profile,
        groups: vec![general, combat, matches, weapons, popular, maps],
    }
}
