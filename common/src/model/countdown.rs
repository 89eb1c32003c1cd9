/// Length of a demo analytics session.
pub const DEMO_SESSION_MS: u64 = 30 * 60 * 1000;

/// How long before the deadline the warning sheet appears.
pub const WARNING_WINDOW_MS: u64 = 5 * 60 * 1000;

/// Where the session currently stands relative to its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Running,
    Warning,
    Expired,
}

/// Deadline of the current demo session, as milliseconds since the epoch.
///
/// The value is persisted across reloads (stored as a decimal string), so
/// everything here takes the current time as an argument instead of
/// reading a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCountdown {
    deadline_ms: u64,
}

impl DemoCountdown {
    /// Starts a fresh session ending [`DEMO_SESSION_MS`] after `now_ms`.
    pub fn starting_at(now_ms: u64) -> Self {
        DemoCountdown {
            deadline_ms: now_ms + DEMO_SESSION_MS,
        }
    }

    /// Restores a persisted deadline. Rejects strings that do not parse
    /// as a millisecond timestamp.
    pub fn from_stored(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .map(|deadline_ms| DemoCountdown { deadline_ms })
    }

    /// String form for persistence; inverse of [`DemoCountdown::from_stored`].
    pub fn to_stored(&self) -> String {
        self.deadline_ms.to_string()
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }

    pub fn phase(&self, now_ms: u64) -> CountdownPhase {
        let remaining = self.remaining_ms(now_ms);
        if remaining == 0 {
            CountdownPhase::Expired
        } else if remaining <= WARNING_WINDOW_MS {
            CountdownPhase::Warning
        } else {
            CountdownPhase::Running
        }
    }

    /// Remaining time as `MM:SS`, rounding up so the display only shows
    /// 00:00 once the session is actually over.
    pub fn format_remaining(&self, now_ms: u64) -> String {
        let seconds = self.remaining_ms(now_ms).div_ceil(1000);
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_runs_for_the_full_demo_length() {
        let countdown = DemoCountdown::starting_at(1_000);
        assert_eq!(countdown.remaining_ms(1_000), DEMO_SESSION_MS);
        assert_eq!(countdown.phase(1_000), CountdownPhase::Running);
        assert_eq!(countdown.format_remaining(1_000), "30:00");
    }

    #[test]
    fn warning_phase_opens_at_the_window_edge() {
        let countdown = DemoCountdown::starting_at(0);
        let edge = DEMO_SESSION_MS - WARNING_WINDOW_MS;
        assert_eq!(countdown.phase(edge - 1), CountdownPhase::Running);
        assert_eq!(countdown.phase(edge), CountdownPhase::Warning);
        assert_eq!(countdown.format_remaining(edge), "05:00");
    }

    #[test]
    fn expired_sessions_clamp_to_zero() {
        let countdown = DemoCountdown::starting_at(0);
        assert_eq!(countdown.phase(DEMO_SESSION_MS), CountdownPhase::Expired);
        assert_eq!(countdown.remaining_ms(DEMO_SESSION_MS + 5_000), 0);
        assert_eq!(countdown.format_remaining(DEMO_SESSION_MS + 5_000), "00:00");
    }

    #[test]
    fn partial_seconds_round_up_in_the_display() {
        let countdown = DemoCountdown::starting_at(0);
        assert_eq!(countdown.format_remaining(DEMO_SESSION_MS - 1_500), "00:02");
        assert_eq!(countdown.format_remaining(DEMO_SESSION_MS - 1), "00:01");
    }

    #[test]
    fn stored_form_round_trips_and_rejects_junk() {
        let countdown = DemoCountdown::starting_at(123_456);
        let stored = countdown.to_stored();
        assert_eq!(DemoCountdown::from_stored(&stored), Some(countdown));
        assert_eq!(DemoCountdown::from_stored(" 42 ").map(|c| c.remaining_ms(0)), Some(42));
        assert_eq!(DemoCountdown::from_stored("soon"), None);
        assert_eq!(DemoCountdown::from_stored(""), None);
    }
}
