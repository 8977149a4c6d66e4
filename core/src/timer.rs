use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Elapsed-time collaborator driven by a [`BoardSession`](crate::BoardSession).
///
/// The session resets it on every new grid and stops it the moment the match
/// is won or lost. A fresh session leaves it stopped until
/// [`BoardSession::start`](crate::BoardSession::start); a reset restarts it.
pub trait Timer {
    fn start(&mut self);
    fn stop(&mut self);
    fn reset(&mut self);
    fn is_running(&self) -> bool;
    fn elapsed(&self) -> Duration;
}

/// Wall-clock stopwatch that can be paused and resumed.
#[derive(Clone, Debug, PartialEq)]
pub struct Stopwatch {
    accumulated: TimeDelta,
    started_at: Option<DateTime<Utc>>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            accumulated: TimeDelta::zero(),
            started_at: None,
        }
    }

    pub fn start_at(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop_at(&mut self, now: DateTime<Utc>) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now - started_at;
        }
    }

    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        let running = self
            .started_at
            .map_or_else(TimeDelta::zero, |started_at| now - started_at);
        (self.accumulated + running).to_std().unwrap_or_default()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for Stopwatch {
    fn start(&mut self) {
        self.start_at(Utc::now());
    }

    fn stop(&mut self) {
        self.stop_at(Utc::now());
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn elapsed(&self) -> Duration {
        self.elapsed_at(Utc::now())
    }
}

/// Formats a duration the way the status line and leaderboard show it, e.g.
/// `1m05.3s` or `42.0s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let tenths = elapsed.as_millis() / 100;
    let (minutes, tenths) = (tenths / 600, tenths % 600);
    let (secs, tenths) = (tenths / 10, tenths % 10);
    if minutes > 0 {
        format!("{minutes}m{secs:02}.{tenths}s")
    } else {
        format!("{secs}.{tenths}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn stopped_stopwatch_freezes_elapsed() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start_at(at(0));
        stopwatch.stop_at(at(12));

        assert_eq!(stopwatch.elapsed_at(at(100)), Duration::from_secs(12));
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn resumed_stopwatch_accumulates() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start_at(at(0));
        stopwatch.stop_at(at(5));
        stopwatch.start_at(at(10));

        assert!(stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_at(at(13)), Duration::from_secs(8));
    }

    #[test]
    fn start_while_running_keeps_first_start() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start_at(at(0));
        stopwatch.start_at(at(4));

        assert_eq!(stopwatch.elapsed_at(at(6)), Duration::from_secs(6));
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start_at(at(0));
        stopwatch.reset();

        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_at(at(30)), Duration::ZERO);
    }

    #[test]
    fn formats_minutes_and_tenths() {
        assert_eq!(format_elapsed(Duration::from_millis(42_050)), "42.0s");
        assert_eq!(format_elapsed(Duration::from_millis(65_300)), "1m05.3s");
        assert_eq!(format_elapsed(Duration::ZERO), "0.0s");
    }
}
