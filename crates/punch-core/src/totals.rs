//! Per-activity accumulated time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Activity;

/// Accumulated seconds per activity, kept in configured display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    entries: Vec<TotalEntry>,
}

/// Seconds accumulated for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalEntry {
    pub activity: Activity,
    pub seconds: u64,
}

impl Totals {
    /// Zeroed totals for the given activities.
    pub fn new(activities: &[Activity]) -> Self {
        Self {
            entries: activities
                .iter()
                .map(|activity| TotalEntry {
                    activity: activity.clone(),
                    seconds: 0,
                })
                .collect(),
        }
    }

    /// Seconds recorded for `activity`; zero for unknown activities.
    pub fn get(&self, activity: &Activity) -> u64 {
        self.entries
            .iter()
            .find(|entry| &entry.activity == activity)
            .map_or(0, |entry| entry.seconds)
    }

    /// Credits `seconds` to `activity`. Returns false if it is not tracked.
    pub fn add(&mut self, activity: &Activity, seconds: u64) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| &entry.activity == activity)
        {
            Some(entry) => {
                entry.seconds = entry.seconds.saturating_add(seconds);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.seconds = 0;
        }
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.seconds).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TotalEntry> {
        self.entries.iter()
    }

    /// Rebuilds totals for `activities`, taking values from `saved` where the
    /// activity is still configured.
    pub fn aligned_to(saved: &Self, activities: &[Activity]) -> Self {
        let mut totals = Self::new(activities);
        for entry in &saved.entries {
            totals.add(&entry.activity, entry.seconds);
        }
        totals
    }
}

/// The part of a timer session that lives only in memory: totals and the
/// date of the last interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub last_active_date: NaiveDate,
    pub daily: Totals,
    pub weekly: Totals,
}
