use chrono::{DateTime, TimeDelta, Utc};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// How far ahead of controller start the launch date sits.
pub const COUNTDOWN_DAYS: i64 = 30;

/// Remaining time broken into display fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Split a millisecond delta into floored fields. Non-positive deltas
    /// produce all zeroes.
    pub fn from_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::default();
        }
        Self {
            days: delta_ms / MS_PER_DAY,
            hours: (delta_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (delta_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (delta_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTarget {
    target: DateTime<Utc>,
}

impl CountdownTarget {
    /// Fix the target `COUNTDOWN_DAYS` after `start`.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self::at(start + TimeDelta::days(COUNTDOWN_DAYS))
    }

    pub fn at(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::from_millis((self.target - now).num_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_full_thirty_days_at_start() {
        let start = epoch();
        let target = CountdownTarget::starting_at(start);
        assert_eq!(
            target,
            CountdownTarget::at(start + TimeDelta::milliseconds(2_592_000_000))
        );
        assert_eq!(
            target.remaining(start),
            Countdown {
                days: 30,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_one_second_later_borrows_through_every_field() {
        let start = epoch();
        let target = CountdownTarget::starting_at(start);
        let now = start + TimeDelta::milliseconds(1_000);
        assert_eq!(
            target.remaining(now),
            Countdown {
                days: 29,
                hours: 23,
                minutes: 59,
                seconds: 59
            }
        );
    }

    #[test]
    fn test_sub_second_remainder_is_floored() {
        let c = Countdown::from_millis(MS_PER_HOUR + 2 * MS_PER_MINUTE + 3_999);
        assert_eq!(
            c,
            Countdown {
                days: 0,
                hours: 1,
                minutes: 2,
                seconds: 3
            }
        );
    }

    #[test]
    fn test_past_target_clamps_to_zero() {
        let start = epoch();
        let target = CountdownTarget::at(start);
        assert_eq!(target.remaining(start), Countdown::default());
        assert_eq!(target.remaining(start + TimeDelta::days(3)), Countdown::default());
        assert_eq!(Countdown::from_millis(-1), Countdown::default());
    }
}
