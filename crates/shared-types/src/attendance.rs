//! Daily check-in/check-out tracking.
//!
//! The session is a two-state machine. Elapsed time is never stored as a
//! running counter: while checked in it is derived from the check-in
//! instant and the caller-supplied clock, and checking out freezes it.
//! Keeping the clock out of the type makes the transitions testable
//! without real time.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceState {
    #[default]
    CheckedOut,
    CheckedIn,
}

/// One person's attendance for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSession {
    state: AttendanceState,
    checked_in_at: Option<DateTime<Utc>>,
    checked_out_at: Option<DateTime<Utc>>,
}

impl AttendanceSession {
    pub fn state(&self) -> AttendanceState {
        self.state
    }

    pub fn is_checked_in(&self) -> bool {
        self.state == AttendanceState::CheckedIn
    }

    pub fn checked_in_at(&self) -> Option<DateTime<Utc>> {
        self.checked_in_at
    }

    pub fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    /// Start a working session. A no-op while already checked in; checking
    /// in again after a checkout starts a fresh session and discards the
    /// frozen time of the previous one.
    pub fn check_in(&mut self, now: DateTime<Utc>) {
        if self.state == AttendanceState::CheckedIn {
            return;
        }
        self.state = AttendanceState::CheckedIn;
        self.checked_in_at = Some(now);
        self.checked_out_at = None;
    }

    /// End the working session, freezing the elapsed time. A no-op while
    /// checked out.
    pub fn check_out(&mut self, now: DateTime<Utc>) {
        if self.state == AttendanceState::CheckedOut {
            return;
        }
        self.state = AttendanceState::CheckedOut;
        self.checked_out_at = Some(now);
    }

    /// Time worked in the current or most recently closed session. Live
    /// while checked in, frozen after checkout, zero before the first
    /// check-in.
    pub fn worked(&self, now: DateTime<Utc>) -> TimeDelta {
        match (self.checked_in_at, self.checked_out_at) {
            (Some(start), None) => now - start,
            (Some(start), Some(end)) => end - start,
            _ => TimeDelta::zero(),
        }
    }

    /// The worked time rendered as `"{h}h {m}m"`.
    pub fn format_worked(&self, now: DateTime<Utc>) -> String {
        let worked = self.worked(now);
        let minutes = worked.num_minutes().max(0);
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        "2024-12-17T00:00:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap()
            .with_timezone(&Utc)
            + TimeDelta::hours(hour as i64)
            + TimeDelta::minutes(minute as i64)
    }

    #[test]
    fn fresh_session_reports_zero() {
        let session = AttendanceSession::default();
        assert_eq!(session.state(), AttendanceState::CheckedOut);
        assert_eq!(session.worked(at(9, 0)), TimeDelta::zero());
        assert_eq!(session.format_worked(at(9, 0)), "0h 0m");
    }

    #[test]
    fn elapsed_is_derived_while_checked_in() {
        let mut session = AttendanceSession::default();
        session.check_in(at(9, 0));
        assert!(session.is_checked_in());
        assert_eq!(session.worked(at(9, 1)), TimeDelta::minutes(1));
        assert_eq!(session.worked(at(12, 30)), TimeDelta::minutes(210));
        assert_eq!(session.format_worked(at(12, 30)), "3h 30m");
    }

    #[test]
    fn checkout_freezes_elapsed() {
        let mut session = AttendanceSession::default();
        session.check_in(at(9, 0));
        session.check_out(at(17, 15));
        assert!(!session.is_checked_in());
        // later clock readings do not move the frozen value
        assert_eq!(session.worked(at(23, 0)), TimeDelta::minutes(495));
        assert_eq!(session.format_worked(at(23, 0)), "8h 15m");
    }

    #[test]
    fn repeated_transitions_in_same_state_are_noops() {
        let mut session = AttendanceSession::default();
        session.check_out(at(8, 0));
        assert_eq!(session.worked(at(9, 0)), TimeDelta::zero());

        session.check_in(at(9, 0));
        session.check_in(at(10, 0));
        assert_eq!(session.checked_in_at(), Some(at(9, 0)));
    }

    #[test]
    fn rechecking_in_starts_a_fresh_session() {
        let mut session = AttendanceSession::default();
        session.check_in(at(9, 0));
        session.check_out(at(12, 0));
        session.check_in(at(13, 0));
        assert_eq!(session.worked(at(13, 45)), TimeDelta::minutes(45));
    }
}
