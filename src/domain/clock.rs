use std::fmt;

/// Number of seconds in one day; stored times live in `[0, SECONDS_PER_DAY)`.
pub const SECONDS_PER_DAY: u32 = 86_400;

const SECONDS_PER_HOUR: u32 = 3_600;
const SECONDS_PER_MINUTE: u32 = 60;

/// How many components a formatted time carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// `HH:MM`
    Minutes,
    /// `HH:MM:SS`
    Seconds,
}

impl Precision {
    pub fn from_use_seconds(use_seconds: bool) -> Self {
        if use_seconds {
            Precision::Seconds
        } else {
            Precision::Minutes
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Precision::Minutes => "HH:MM",
            Precision::Seconds => "HH:MM:SS",
        }
    }
}

/// Wall-clock components of a duration since midnight.
///
/// The value is never adjusted for a timezone: `52200` is always `14:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeOfDay {
    pub fn from_seconds(total: u32) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }

    pub fn format(&self, precision: Precision) -> String {
        match precision {
            Precision::Minutes => format!("{:02}:{:02}", self.hours, self.minutes),
            Precision::Seconds => {
                format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
            }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Precision::Seconds))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRangeError(pub u32);

impl fmt::Display for TimeRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is outside the time-of-day range 0..={}",
            self.0,
            SECONDS_PER_DAY - 1
        )
    }
}

impl std::error::Error for TimeRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_seconds_into_components() {
        let time = TimeOfDay::from_seconds(52_245);
        assert_eq!((time.hours, time.minutes, time.seconds), (14, 30, 45));
        assert_eq!(time.total_seconds(), 52_245);
    }

    #[test]
    fn formats_both_precisions() {
        let time = TimeOfDay::from_seconds(52_200);
        assert_eq!(time.format(Precision::Minutes), "14:30");
        assert_eq!(time.format(Precision::Seconds), "14:30:00");
        assert_eq!(TimeOfDay::from_seconds(0).to_string(), "00:00:00");
        assert_eq!(
            TimeOfDay::from_seconds(SECONDS_PER_DAY - 1).to_string(),
            "23:59:59"
        );
    }

    #[test]
    fn minutes_precision_truncates_seconds() {
        let time = TimeOfDay::from_seconds(59);
        assert_eq!(time.format(Precision::Minutes), "00:00");
    }
}
