//! Core type definitions with validation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject label used for log entries that apply to every activity.
pub const ALL_ACTIVITIES: &str = "All Activities";

/// Activities tracked when no configuration overrides them.
pub const DEFAULT_ACTIVITIES: [&str; 4] = ["Coding", "Writing", "Learning", "Comms"];

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The name collides with the administrative sentinel.
    #[error("\"{name}\" is reserved and cannot be used as an activity name")]
    Reserved { name: String },

    /// The same activity was configured more than once.
    #[error("activity \"{name}\" is configured more than once")]
    Duplicate { name: String },

    /// No activities were configured.
    #[error("at least one activity must be configured")]
    NoActivities,
}

/// A validated activity name.
///
/// Activity names are non-empty, trimmed strings and may not collide with
/// [`ALL_ACTIVITIES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Activity(String);

impl Activity {
    /// Creates a new activity after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "activity name",
            });
        }
        if trimmed == ALL_ACTIVITIES {
            return Err(ValidationError::Reserved {
                name: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Activity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Activity> for String {
    fn from(activity: Activity) -> Self {
        activity.0
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Activity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a configured list of activity names, preserving order.
pub fn parse_activities<I, S>(names: I) -> Result<Vec<Activity>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut activities = Vec::new();
    for name in names {
        let activity = Activity::new(name)?;
        if !seen.insert(activity.clone()) {
            return Err(ValidationError::Duplicate {
                name: activity.0,
            });
        }
        activities.push(activity);
    }
    if activities.is_empty() {
        return Err(ValidationError::NoActivities);
    }
    Ok(activities)
}

/// Returns the built-in activity set.
pub fn default_activities() -> Vec<Activity> {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|name| Activity((*name).to_string()))
        .collect()
}
