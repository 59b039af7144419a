use std::{fmt, time::Duration};

/// Elapsed play time, displayed as `mm:ss`.
///
/// Minutes are not wrapped into hours, so an hour and a half shows as
/// `90:00`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use tileslide_game::Elapsed;
///
/// assert_eq!(Elapsed::from_secs(0).to_string(), "00:00");
/// assert_eq!(Elapsed::from_secs(75).to_string(), "01:15");
/// assert_eq!(Elapsed::from(Duration::from_millis(5_999)).to_string(), "00:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed(u64);

impl Elapsed {
    /// Creates an elapsed time from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the number of whole seconds.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs())
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_minutes_and_seconds() {
        assert_eq!(Elapsed::from_secs(9).to_string(), "00:09");
        assert_eq!(Elapsed::from_secs(60).to_string(), "01:00");
        assert_eq!(Elapsed::from_secs(599).to_string(), "09:59");
    }

    #[test]
    fn test_display_does_not_wrap_hours() {
        assert_eq!(Elapsed::from_secs(5_400).to_string(), "90:00");
        assert_eq!(Elapsed::from_secs(6_000).to_string(), "100:00");
    }

    #[test]
    fn test_from_duration_truncates() {
        assert_eq!(Elapsed::from(Duration::from_millis(1_999)).as_secs(), 1);
    }
}
