use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::tier::{Tier, classify};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageStatus {
    pub title: String,
    #[serde(rename = "status")]
    pub tier: Tier,
    pub total: u32,
    pub occupied: u32,
}

impl GarageStatus {
    pub fn new(title: impl Into<String>, occupied: u32, total: u32) -> Self {
        Self {
            title: title.into(),
            tier: classify(occupied, total),
            total,
            occupied,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.occupied)
    }
}

/// Tier of every monitored garage at a point in time. This is what gets
/// persisted between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "parkings")]
    pub garages: Vec<GarageStatus>,
}

impl Snapshot {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            garages: Vec::new(),
        }
    }

    /// Appends `status` unless a garage with the same title is already
    /// present. Returns whether the status was added.
    pub fn push(&mut self, status: GarageStatus) -> bool {
        if self.garages.iter().any(|g| g.title == status.title) {
            return false;
        }
        self.garages.push(status);
        true
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn index(&self) -> StatusIndex<'_> {
        StatusIndex::from_snapshot(self)
    }
}

/// Title to tier lookup over a snapshot.
///
/// A title that is not in the index is absent: change detection treats an
/// absent garage as changed.
#[derive(Debug, Default)]
pub struct StatusIndex<'a> {
    tiers: HashMap<&'a str, Tier>,
}

impl<'a> StatusIndex<'a> {
    pub fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        let mut tiers = HashMap::with_capacity(snapshot.garages.len());
        for garage in &snapshot.garages {
            tiers.entry(garage.title.as_str()).or_insert(garage.tier);
        }
        Self { tiers }
    }

    pub fn get(&self, title: &str) -> Option<Tier> {
        self.tiers.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeReason {
    NoPreviousSnapshot,
    NewDay { previous: NaiveDate, current: NaiveDate },
    GarageCountChanged { previous: usize, current: usize },
    GarageAdded { title: String },
    TierChanged { title: String, previous: Tier, current: Tier },
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeReason::NoPreviousSnapshot => f.write_str("no previous snapshot"),
            ChangeReason::NewDay { previous, current } => {
                write!(f, "new day ({previous} -> {current})")
            }
            ChangeReason::GarageCountChanged { previous, current } => {
                write!(f, "garage count changed ({previous} -> {current})")
            }
            ChangeReason::GarageAdded { title } => write!(f, "garage {title} not in previous snapshot"),
            ChangeReason::TierChanged {
                title,
                previous,
                current,
            } => write!(f, "garage {title} went from {previous} to {current}"),
        }
    }
}

/// Decides whether `current` differs enough from `previous` to notify.
/// Returns the first reason found, or `None` when nothing changed.
pub fn detect_change(previous: Option<&Snapshot>, current: &Snapshot) -> Option<ChangeReason> {
    let Some(previous) = previous else {
        return Some(ChangeReason::NoPreviousSnapshot);
    };

    if previous.date() != current.date() {
        return Some(ChangeReason::NewDay {
            previous: previous.date(),
            current: current.date(),
        });
    }

    if previous.garages.len() != current.garages.len() {
        return Some(ChangeReason::GarageCountChanged {
            previous: previous.garages.len(),
            current: current.garages.len(),
        });
    }

    let index = previous.index();
    for garage in &current.garages {
        match index.get(&garage.title) {
            None => {
                return Some(ChangeReason::GarageAdded {
                    title: garage.title.clone(),
                });
            }
            Some(tier) if tier != garage.tier => {
                return Some(ChangeReason::TierChanged {
                    title: garage.title.clone(),
                    previous: tier,
                    current: garage.tier,
                });
            }
            Some(_) => {}
        }
    }

    None
}

pub fn has_changed(previous: Option<&Snapshot>, current: &Snapshot) -> bool {
    detect_change(previous, current).is_some()
}
