//! The persisted timer state.

use chrono::{DateTime, Local};

use crate::types::Activity;

/// Whether a timer is running, and since when.
///
/// The activity and its start instant are only ever present together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running {
        activity: Activity,
        started_at: DateTime<Local>,
    },
}

impl TimerState {
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// The running activity, if any.
    pub const fn activity(&self) -> Option<&Activity> {
        match self {
            Self::Idle => None,
            Self::Running { activity, .. } => Some(activity),
        }
    }

    /// The instant the running timer started, if any.
    pub const fn started_at(&self) -> Option<DateTime<Local>> {
        match self {
            Self::Idle => None,
            Self::Running { started_at, .. } => Some(*started_at),
        }
    }
}
