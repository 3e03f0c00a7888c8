//! One-shot deadlines for the page's timed effects.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

pub const ERROR_DISPLAY: Duration = Duration::seconds(5);
pub const SHAKE_DURATION: Duration = Duration::milliseconds(500);
pub const REDIRECT_DELAY: Duration = Duration::milliseconds(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    HideError,
    StopShake,
    Redirect,
}

/// At most one pending deadline per kind; scheduling a kind again moves its
/// deadline instead of adding a second one.
#[derive(Debug, Clone, Default)]
pub struct FeedbackTimers {
    deadlines: HashMap<TimerKind, DateTime<Utc>>,
}

impl FeedbackTimers {
    pub fn schedule(&mut self, kind: TimerKind, at: DateTime<Utc>) {
        self.deadlines.insert(kind, at);
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.deadlines.remove(&kind);
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<DateTime<Utc>> {
        self.deadlines.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<TimerKind> {
        let mut due: Vec<(TimerKind, DateTime<Utc>)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(kind, at)| (*kind, *at))
            .collect();
        due.sort_by_key(|(_, at)| *at);

        for (kind, _) in &due {
            self.deadlines.remove(kind);
        }
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescheduling_replaces_deadline() {
        let start = Utc::now();
        let mut timers = FeedbackTimers::default();

        timers.schedule(TimerKind::HideError, start + ERROR_DISPLAY);
        timers.schedule(TimerKind::HideError, start + Duration::seconds(8));

        assert!(timers.take_due(start + Duration::seconds(6)).is_empty());
        assert_eq!(
            timers.take_due(start + Duration::seconds(8)),
            vec![TimerKind::HideError]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn test_due_timers_fire_in_deadline_order() {
        let start = Utc::now();
        let mut timers = FeedbackTimers::default();
        timers.schedule(TimerKind::HideError, start + ERROR_DISPLAY);
        timers.schedule(TimerKind::StopShake, start + SHAKE_DURATION);

        assert_eq!(
            timers.take_due(start + Duration::seconds(10)),
            vec![TimerKind::StopShake, TimerKind::HideError]
        );
    }
}
