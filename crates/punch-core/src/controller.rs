//! The timer state machine.
//!
//! A [`TimerController`] owns the running timer, the daily and weekly totals,
//! and the date of the last interaction. Every transition is written through
//! to the [`EventLog`] and [`PersistentState`] it was opened with.
//!
//! # Transitions
//!
//! | Operation              | From    | To      | Log entry  | Totals          |
//! |------------------------|---------|---------|------------|-----------------|
//! | `start`                | Idle    | Running | Start      | -               |
//! | `stop`                 | Running | Idle    | Stop       | credited        |
//! | `stop`                 | Idle    | Idle    | -          | -               |
//! | `check_day_rollover`   | any     | Idle    | -          | daily zeroed    |
//! | `reset_day`            | any     | same    | Reset Day  | daily zeroed    |
//! | `reset_week`           | any     | same    | Reset Week | weekly zeroed   |
//!
//! Starting while another timer runs is rejected with
//! [`TimerError::AlreadyRunning`]; [`TimerController::switch_to`] stops the
//! current timer explicitly first.

use chrono::{DateTime, Local, NaiveDate};

use crate::clock::{Clock, SystemClock};
use crate::error::TimerError;
use crate::event::{EventKind, LogEntry};
use crate::state::TimerState;
use crate::store::{EventLog, PersistentState};
use crate::totals::{SessionSnapshot, Totals};
use crate::types::Activity;

/// A timer that was just stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoppedTimer {
    pub activity: Activity,
    pub elapsed_secs: u64,
}

/// Display view of the running timer, recomputed on every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTimer {
    pub activity: Activity,
    pub started_at: DateTime<Local>,
    pub elapsed_secs: u64,
}

/// Tracks one active activity at a time and the time accumulated per activity.
pub struct TimerController<L, S, C = SystemClock> {
    activities: Vec<Activity>,
    log: L,
    store: S,
    clock: C,
    state: TimerState,
    daily: Totals,
    weekly: Totals,
    last_active_date: NaiveDate,
}

impl<L, S, C> TimerController<L, S, C>
where
    L: EventLog,
    S: PersistentState,
    C: Clock,
{
    /// Opens a session: initializes the log and restores the running timer.
    ///
    /// A saved timer for an activity that is no longer configured is
    /// discarded.
    pub fn open(
        activities: Vec<Activity>,
        mut log: L,
        mut store: S,
        clock: C,
    ) -> Result<Self, TimerError> {
        log.initialize()?;

        let mut state = store.load()?;
        if let Some(activity) = state.activity() {
            if !activities.contains(activity) {
                tracing::warn!(%activity, "saved timer is for an unconfigured activity; resetting to idle");
                state = TimerState::Idle;
                store.save(&state)?;
            }
        }

        let last_active_date = clock.now().date_naive();
        let daily = Totals::new(&activities);
        let weekly = Totals::new(&activities);

        Ok(Self {
            activities,
            log,
            store,
            clock,
            state,
            daily,
            weekly,
            last_active_date,
        })
    }

    /// Looks up a configured activity by name, ignoring ASCII case.
    pub fn activity(&self, name: &str) -> Result<Activity, TimerError> {
        let name = name.trim();
        self.activities
            .iter()
            .find(|activity| activity.as_str().eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| TimerError::UnknownActivity(name.to_string()))
    }

    /// Starts a timer for `name`. Only allowed while idle.
    pub fn start(&mut self, name: &str) -> Result<(), TimerError> {
        let activity = self.activity(name)?;
        if let Some(active) = self.state.activity() {
            return Err(TimerError::AlreadyRunning {
                active: active.clone(),
                requested: activity,
            });
        }

        let now = self.clock.now();
        let state = TimerState::Running {
            activity: activity.clone(),
            started_at: now,
        };
        self.log
            .append(&LogEntry::new(activity.clone(), EventKind::Start, None, now))?;
        self.store.save(&state)?;

        self.state = state;
        self.last_active_date = now.date_naive();
        tracing::info!(%activity, "timer started");
        Ok(())
    }

    /// Stops the running timer and credits its elapsed time.
    ///
    /// Returns `None` without touching the log when no timer is running.
    pub fn stop(&mut self) -> Result<Option<StoppedTimer>, TimerError> {
        let TimerState::Running {
            activity,
            started_at,
        } = &self.state
        else {
            tracing::debug!("stop requested while idle");
            return Ok(None);
        };
        let activity = activity.clone();
        let now = self.clock.now();
        let elapsed_secs = elapsed_between(*started_at, now);

        self.log.append(&LogEntry::new(
            activity.clone(),
            EventKind::Stop,
            Some(elapsed_secs),
            now,
        ))?;
        self.store.save(&TimerState::Idle)?;

        self.state = TimerState::Idle;
        self.daily.add(&activity, elapsed_secs);
        self.weekly.add(&activity, elapsed_secs);
        tracing::info!(%activity, elapsed_secs, "timer stopped");
        Ok(Some(StoppedTimer {
            activity,
            elapsed_secs,
        }))
    }

    /// Stops whatever is running, then starts `name`.
    pub fn switch_to(&mut self, name: &str) -> Result<Option<StoppedTimer>, TimerError> {
        // Resolve first so a typo does not stop the current timer.
        self.activity(name)?;
        let stopped = self.stop()?;
        self.start(name)?;
        Ok(stopped)
    }

    /// Live elapsed time of the running timer. Never changes any totals.
    pub fn tick(&self) -> Option<LiveTimer> {
        match &self.state {
            TimerState::Idle => None,
            TimerState::Running {
                activity,
                started_at,
            } => Some(LiveTimer {
                activity: activity.clone(),
                started_at: *started_at,
                elapsed_secs: elapsed_between(*started_at, self.clock.now()),
            }),
        }
    }

    /// Starts a new day if the calendar date changed since the last
    /// interaction.
    ///
    /// Daily totals are zeroed and a timer left running is dropped. The
    /// discarded session is neither credited nor logged. Returns true if the
    /// date changed.
    pub fn check_day_rollover(&mut self) -> Result<bool, TimerError> {
        let today = self.clock.now().date_naive();
        if today == self.last_active_date {
            return Ok(false);
        }

        if let Some(activity) = self.state.activity() {
            tracing::info!(
                %activity,
                last_active = %self.last_active_date,
                %today,
                "date changed; discarding running timer"
            );
            self.store.save(&TimerState::Idle)?;
            self.state = TimerState::Idle;
        }
        self.daily.reset();
        self.last_active_date = today;
        tracing::info!(%today, "new day; daily totals reset");
        Ok(true)
    }

    /// Zeroes the daily totals. A running timer keeps running.
    pub fn reset_day(&mut self) -> Result<(), TimerError> {
        self.log
            .append(&LogEntry::administrative(EventKind::ResetDay, self.clock.now()))?;
        self.daily.reset();
        tracing::info!("daily totals reset");
        Ok(())
    }

    /// Zeroes the weekly totals. A running timer keeps running.
    pub fn reset_week(&mut self) -> Result<(), TimerError> {
        self.log
            .append(&LogEntry::administrative(EventKind::ResetWeek, self.clock.now()))?;
        self.weekly.reset();
        tracing::info!("weekly totals reset");
        Ok(())
    }

    /// Erases the event log. Totals are left as they are.
    pub fn erase_all(&mut self) -> Result<(), TimerError> {
        self.log.erase(self.clock.now())?;
        tracing::info!("event log erased");
        Ok(())
    }

    /// Removes the most recent log entry, returning it.
    pub fn remove_last_entry(&mut self) -> Result<Option<LogEntry>, TimerError> {
        let removed = self.log.remove_last()?;
        if let Some(entry) = &removed {
            tracing::info!(event = %entry.event, subject = %entry.subject, "removed last log entry");
        }
        Ok(removed)
    }

    /// Every log entry, oldest first.
    pub fn entries(&self) -> Result<Vec<LogEntry>, TimerError> {
        Ok(self.log.read_all()?)
    }

    /// The last `limit` log entries, oldest first.
    pub fn recent_entries(&self, limit: usize) -> Result<Vec<LogEntry>, TimerError> {
        let mut entries = self.log.read_all()?;
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            last_active_date: self.last_active_date,
            daily: self.daily.clone(),
            weekly: self.weekly.clone(),
        }
    }

    /// Restores totals and the last active date from an earlier session.
    ///
    /// Activities that are no longer configured are dropped.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) {
        self.daily = Totals::aligned_to(&snapshot.daily, &self.activities);
        self.weekly = Totals::aligned_to(&snapshot.weekly, &self.activities);
        self.last_active_date = snapshot.last_active_date;
    }

    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    pub const fn daily_totals(&self) -> &Totals {
        &self.daily
    }

    pub const fn weekly_totals(&self) -> &Totals {
        &self.weekly
    }

    pub const fn last_active_date(&self) -> NaiveDate {
        self.last_active_date
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

/// Whole seconds from `start` to `now`, truncated. A clock that moved
/// backwards yields zero.
fn elapsed_between(start: DateTime<Local>, now: DateTime<Local>) -> u64 {
    let seconds = (now - start).num_seconds();
    u64::try_from(seconds).unwrap_or_else(|_| {
        tracing::warn!(seconds, "clock moved backwards; clamping elapsed time to zero");
        0
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::clock::ManualClock;
    use crate::error::StoreError;
    use crate::event::Subject;
    use crate::types::default_activities;

    #[derive(Clone, Default)]
    struct MemoryLog {
        entries: Rc<RefCell<Vec<LogEntry>>>,
        fail_appends: Rc<RefCell<bool>>,
    }

    impl EventLog for MemoryLog {
        fn initialize(&mut self) -> Result<(), StoreError> {
            Ok(())
        }

        fn append(&mut self, entry: &LogEntry) -> Result<(), StoreError> {
            if *self.fail_appends.borrow() {
                return Err(StoreError::io(
                    "memory.csv",
                    std::io::Error::other("disk full"),
                ));
            }
            self.entries.borrow_mut().push(entry.clone());
            Ok(())
        }

        fn read_all(&self) -> Result<Vec<LogEntry>, StoreError> {
            Ok(self.entries.borrow().clone())
        }

        fn remove_last(&mut self) -> Result<Option<LogEntry>, StoreError> {
            Ok(self.entries.borrow_mut().pop())
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            self.entries.borrow_mut().clear();
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MemoryState {
        saved: Rc<RefCell<TimerState>>,
    }

    impl PersistentState for MemoryState {
        fn load(&self) -> Result<TimerState, StoreError> {
            Ok(self.saved.borrow().clone())
        }

        fn save(&mut self, state: &TimerState) -> Result<(), StoreError> {
            *self.saved.borrow_mut() = state.clone();
            Ok(())
        }
    }

    struct Fixture {
        log: MemoryLog,
        state: MemoryState,
        clock: ManualClock,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                log: MemoryLog::default(),
                state: MemoryState::default(),
                clock: ManualClock::new(day(1, 9)),
            }
        }

        fn open(&self) -> TimerController<MemoryLog, MemoryState, &ManualClock> {
            TimerController::open(
                default_activities(),
                self.log.clone(),
                self.state.clone(),
                &self.clock,
            )
            .unwrap()
        }

        fn events(&self) -> Vec<EventKind> {
            self.log.entries.borrow().iter().map(|e| e.event).collect()
        }
    }

    fn day(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
    }

    fn activity(name: &str) -> Activity {
        Activity::new(name).unwrap()
    }

    #[test]
    fn start_then_stop_credits_elapsed_time() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        fixture.clock.advance(Duration::seconds(125));
        let stopped = controller.stop().unwrap().unwrap();

        assert_eq!(stopped.activity, activity("Coding"));
        assert_eq!(stopped.elapsed_secs, 125);
        assert_eq!(controller.daily_totals().get(&activity("Coding")), 125);
        assert_eq!(controller.weekly_totals().get(&activity("Coding")), 125);
        assert_eq!(fixture.events(), [EventKind::Start, EventKind::Stop]);

        let entries = fixture.log.entries.borrow();
        assert_eq!(entries[0].elapsed_display(), "N/A");
        assert_eq!(entries[1].elapsed_display(), "2m 5s");
        assert_eq!(entries[1].subject, Subject::Activity(activity("Coding")));
    }

    #[test]
    fn elapsed_time_truncates_fractional_seconds() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Writing").unwrap();
        fixture.clock.advance(Duration::milliseconds(2_999));
        let stopped = controller.stop().unwrap().unwrap();
        assert_eq!(stopped.elapsed_secs, 2);
    }

    #[test]
    fn sessions_accumulate() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        for seconds in [30, 45] {
            controller.start("Learning").unwrap();
            fixture.clock.advance(Duration::seconds(seconds));
            controller.stop().unwrap();
        }
        assert_eq!(controller.daily_totals().get(&activity("Learning")), 75);
    }

    #[test]
    fn stop_while_idle_is_a_no_op() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        assert_eq!(controller.stop().unwrap(), None);
        assert!(fixture.events().is_empty());
        assert_eq!(controller.daily_totals().total(), 0);
    }

    #[test]
    fn start_persists_running_state() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("comms").unwrap();
        assert_eq!(
            *fixture.state.saved.borrow(),
            TimerState::Running {
                activity: activity("Comms"),
                started_at: day(1, 9),
            }
        );

        controller.stop().unwrap();
        assert_eq!(*fixture.state.saved.borrow(), TimerState::Idle);
    }

    #[test]
    fn start_while_running_is_rejected() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        let err = controller.start("Writing").unwrap_err();
        assert!(matches!(
            err,
            TimerError::AlreadyRunning { ref active, ref requested }
                if *active == activity("Coding") && *requested == activity("Writing")
        ));
        assert_eq!(controller.state().activity(), Some(&activity("Coding")));
        assert_eq!(fixture.events(), [EventKind::Start]);
    }

    #[test]
    fn start_unknown_activity_is_rejected() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        let err = controller.start("Gardening").unwrap_err();
        assert!(matches!(err, TimerError::UnknownActivity(name) if name == "Gardening"));
        assert!(!controller.state().is_running());
    }

    #[test]
    fn switch_stops_current_timer_first() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        fixture.clock.advance(Duration::seconds(60));
        let stopped = controller.switch_to("Writing").unwrap().unwrap();

        assert_eq!(stopped.activity, activity("Coding"));
        assert_eq!(controller.state().activity(), Some(&activity("Writing")));
        assert_eq!(controller.daily_totals().get(&activity("Coding")), 60);
        assert_eq!(
            fixture.events(),
            [EventKind::Start, EventKind::Stop, EventKind::Start]
        );
    }

    #[test]
    fn switch_to_unknown_activity_keeps_current_timer() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        assert!(controller.switch_to("Nope").is_err());
        assert_eq!(controller.state().activity(), Some(&activity("Coding")));
    }

    #[test]
    fn tick_reports_live_elapsed_without_crediting() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        assert_eq!(controller.tick(), None);
        controller.start("Coding").unwrap();
        fixture.clock.advance(Duration::seconds(42));

        let live = controller.tick().unwrap();
        assert_eq!(live.elapsed_secs, 42);
        assert_eq!(live.started_at, day(1, 9));
        assert_eq!(controller.daily_totals().total(), 0);
    }

    #[test]
    fn backwards_clock_is_clamped_to_zero() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        fixture.clock.advance(Duration::seconds(-30));

        assert_eq!(controller.tick().unwrap().elapsed_secs, 0);
        let stopped = controller.stop().unwrap().unwrap();
        assert_eq!(stopped.elapsed_secs, 0);
        assert_eq!(controller.daily_totals().total(), 0);
        assert_eq!(fixture.log.entries.borrow()[1].elapsed_display(), "0s");
    }

    #[test]
    fn day_rollover_discards_running_timer_and_zeroes_daily_totals() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        fixture.clock.advance(Duration::seconds(600));
        controller.stop().unwrap();
        controller.start("Coding").unwrap();

        fixture.clock.set(day(2, 8));
        assert!(controller.check_day_rollover().unwrap());

        assert_eq!(*controller.state(), TimerState::Idle);
        assert_eq!(*fixture.state.saved.borrow(), TimerState::Idle);
        assert_eq!(controller.daily_totals().get(&activity("Coding")), 0);
        assert_eq!(controller.weekly_totals().get(&activity("Coding")), 600);
        assert_eq!(controller.last_active_date(), day(2, 8).date_naive());
        assert_eq!(
            fixture.events(),
            [EventKind::Start, EventKind::Stop, EventKind::Start]
        );
    }

    #[test]
    fn day_rollover_is_a_no_op_on_the_same_day() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        fixture.clock.set(day(1, 23));
        assert!(!controller.check_day_rollover().unwrap());
        assert!(controller.state().is_running());
    }

    #[test]
    fn day_rollover_while_idle_updates_date() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        fixture.clock.set(day(3, 10));
        assert!(controller.check_day_rollover().unwrap());
        assert_eq!(controller.last_active_date(), day(3, 10).date_naive());
        assert!(fixture.events().is_empty());
    }

    #[test]
    fn day_rollover_does_not_credit_discarded_session() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Writing").unwrap();
        fixture.clock.set(day(2, 9));
        assert!(controller.check_day_rollover().unwrap());

        assert_eq!(controller.daily_totals().total(), 0);
        assert_eq!(controller.weekly_totals().total(), 0);
        assert_eq!(fixture.events(), [EventKind::Start]);
    }

    #[test]
    fn reset_day_zeroes_daily_totals_but_keeps_timer() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Comms").unwrap();
        fixture.clock.advance(Duration::seconds(90));
        controller.stop().unwrap();
        controller.start("Writing").unwrap();

        controller.reset_day().unwrap();

        assert_eq!(controller.daily_totals().total(), 0);
        assert_eq!(controller.weekly_totals().get(&activity("Comms")), 90);
        assert_eq!(controller.state().activity(), Some(&activity("Writing")));

        let entries = fixture.log.entries.borrow();
        let last = entries.last().unwrap();
        assert_eq!(last.event, EventKind::ResetDay);
        assert_eq!(last.subject, Subject::AllActivities);
    }

    #[test]
    fn reset_week_zeroes_weekly_totals_only() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Comms").unwrap();
        fixture.clock.advance(Duration::seconds(90));
        controller.stop().unwrap();
        controller.reset_week().unwrap();

        assert_eq!(controller.weekly_totals().total(), 0);
        assert_eq!(controller.daily_totals().get(&activity("Comms")), 90);
        assert_eq!(fixture.events().last(), Some(&EventKind::ResetWeek));
    }

    #[test]
    fn erase_all_leaves_only_erase_entry_and_keeps_totals() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        fixture.clock.advance(Duration::seconds(10));
        controller.stop().unwrap();
        controller.erase_all().unwrap();

        let entries = controller.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, EventKind::EraseLog);
        assert_eq!(entries[0].subject, Subject::AllActivities);
        assert_eq!(controller.daily_totals().get(&activity("Coding")), 10);
    }

    #[test]
    fn remove_last_entry_drops_most_recent() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        assert_eq!(controller.remove_last_entry().unwrap(), None);

        controller.start("Coding").unwrap();
        controller.stop().unwrap();
        let removed = controller.remove_last_entry().unwrap().unwrap();
        assert_eq!(removed.event, EventKind::Stop);
        assert_eq!(fixture.events(), [EventKind::Start]);
    }

    #[test]
    fn recent_entries_returns_tail_in_order() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Coding").unwrap();
        controller.stop().unwrap();
        controller.reset_day().unwrap();

        let recent = controller.recent_entries(2).unwrap();
        let events: Vec<_> = recent.iter().map(|e| e.event).collect();
        assert_eq!(events, [EventKind::Stop, EventKind::ResetDay]);
        assert_eq!(controller.recent_entries(10).unwrap().len(), 3);
    }

    #[test]
    fn failed_append_leaves_state_unchanged() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        *fixture.log.fail_appends.borrow_mut() = true;
        let err = controller.start("Coding").unwrap_err();
        assert!(matches!(err, TimerError::Store(StoreError::Io { .. })));
        assert_eq!(*controller.state(), TimerState::Idle);
        assert_eq!(*fixture.state.saved.borrow(), TimerState::Idle);
    }

    #[test]
    fn open_restores_running_timer() {
        let fixture = Fixture::new();
        {
            let mut controller = fixture.open();
            controller.start("Learning").unwrap();
        }

        fixture.clock.advance(Duration::seconds(30));
        let mut controller = fixture.open();
        assert_eq!(controller.tick().unwrap().elapsed_secs, 30);
        let stopped = controller.stop().unwrap().unwrap();
        assert_eq!(stopped.activity, activity("Learning"));
    }

    #[test]
    fn open_discards_timer_for_unconfigured_activity() {
        let fixture = Fixture::new();
        *fixture.state.saved.borrow_mut() = TimerState::Running {
            activity: activity("Gardening"),
            started_at: day(1, 8),
        };

        let controller = fixture.open();
        assert_eq!(*controller.state(), TimerState::Idle);
        assert_eq!(*fixture.state.saved.borrow(), TimerState::Idle);
    }

    #[test]
    fn snapshot_restore_carries_totals_and_date() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();

        controller.start("Writing").unwrap();
        fixture.clock.advance(Duration::seconds(300));
        controller.stop().unwrap();
        let snapshot = controller.snapshot();

        let mut reopened = fixture.open();
        reopened.restore(&snapshot);
        assert_eq!(reopened.daily_totals().get(&activity("Writing")), 300);
        assert_eq!(reopened.weekly_totals().get(&activity("Writing")), 300);
        assert_eq!(reopened.last_active_date(), day(1, 9).date_naive());
    }

    #[test]
    fn restored_date_drives_rollover() {
        let fixture = Fixture::new();
        let mut controller = fixture.open();
        controller.start("Coding").unwrap();
        let snapshot = controller.snapshot();

        fixture.clock.set(day(2, 9));
        let mut reopened = fixture.open();
        reopened.restore(&snapshot);
        assert!(reopened.state().is_running());
        assert!(reopened.check_day_rollover().unwrap());
        assert!(!reopened.state().is_running());
    }
}
