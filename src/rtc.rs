//! Software RTC
//!
//! Wall-clock time is kept as seconds since 1970-01-01 00:00:00 at the moment
//! of the last [`Rtc::set_time`], plus the milliseconds elapsed on a monotonic
//! source since then. Range is 1970..=2099.

use crate::ConfigError;

pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MIN_YEAR: u16 = 1970;
const MAX_YEAR: u16 = 2099;
const SECS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub year: u16,
    pub month: u8,
    pub date: u8,
    pub hour: u8,
    pub min: u8,
    pub sec: u8,
    /// 0 = Sunday
    pub week: u8,
}

impl Calendar {
    pub fn new(year: u16, month: u8, date: u8, hour: u8, min: u8, sec: u8) -> Result<Self, ConfigError> {
        let cal = Self {
            year,
            month,
            date,
            hour,
            min,
            sec,
            week: 0,
        };
        cal.validate()?;
        Ok(Self {
            week: weekday(year, month, date),
            ..cal
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ok = (MIN_YEAR..=MAX_YEAR).contains(&self.year)
            && (1..=12).contains(&self.month)
            && self.date >= 1
            && self.date <= days_in_month(self.year, self.month)
            && self.hour < 24
            && self.min < 60
            && self.sec < 60;
        if ok { Ok(()) } else { Err(ConfigError::Calendar) }
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.week as usize % 7]
    }

    fn to_epoch_secs(&self) -> u64 {
        let mut days = 0u64;
        for y in MIN_YEAR..self.year {
            days += if is_leap(y) { 366 } else { 365 };
        }
        for m in 1..self.month {
            days += days_in_month(self.year, m) as u64;
        }
        days += self.date as u64 - 1;
        days * SECS_PER_DAY + self.hour as u64 * 3600 + self.min as u64 * 60 + self.sec as u64
    }

    fn from_epoch_secs(secs: u64) -> Self {
        let mut days = secs / SECS_PER_DAY;
        let rem = secs % SECS_PER_DAY;

        let mut year = MIN_YEAR;
        loop {
            let len = if is_leap(year) { 366 } else { 365 };
            if days < len {
                break;
            }
            days -= len;
            year += 1;
        }
        let mut month = 1;
        while days >= days_in_month(year, month) as u64 {
            days -= days_in_month(year, month) as u64;
            month += 1;
        }
        let date = days as u8 + 1;
        Self {
            year,
            month,
            date,
            hour: (rem / 3600) as u8,
            min: (rem / 60 % 60) as u8,
            sec: (rem % 60) as u8,
            week: weekday(year, month, date),
        }
    }
}

pub fn is_leap(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day of the week by the Kim Larson formula, 0 = Sunday.
pub fn weekday(year: u16, month: u8, day: u8) -> u8 {
    // January and February are months 13 and 14 of the previous year, shifted
    // one 400-year cycle up (a whole number of weeks)
    let (y, m) = if month < 3 {
        (year as u32 + 399, month as u32 + 12)
    } else {
        (year as u32, month as u32)
    };
    ((day as u32 + 1 + 2 * m + 3 * (m + 1) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rtc {
    base_secs: u64,
    set_at_ms: u64,
}

impl Rtc {
    /// Starts at 1970-01-01 00:00:00 when `now_ms` is 0.
    pub const fn new() -> Self {
        Self {
            base_secs: 0,
            set_at_ms: 0,
        }
    }

    pub fn set_time(&mut self, cal: &Calendar, now_ms: u64) -> Result<(), ConfigError> {
        cal.validate()?;
        self.base_secs = cal.to_epoch_secs();
        self.set_at_ms = now_ms;
        Ok(())
    }

    pub fn get_time(&self, now_ms: u64) -> Calendar {
        let elapsed = now_ms.saturating_sub(self.set_at_ms) / 1000;
        Calendar::from_epoch_secs(self.base_secs + elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(weekday(1970, 1, 1), 4);
        assert_eq!(weekday(2000, 1, 1), 6);
        assert_eq!(weekday(2000, 2, 29), 2);
        assert_eq!(weekday(2024, 2, 29), 4);
        assert_eq!(weekday(2025, 1, 5), 0);
        assert_eq!(WEEKDAYS[weekday(2024, 12, 25) as usize], "Wednesday");
    }

    #[test]
    fn weekday_covers_the_whole_year_range() {
        assert_eq!(weekday(0, 1, 1), 6);
        assert_eq!(weekday(0, 2, 29), 2);
        assert_eq!(weekday(1, 1, 1), 1);
        assert_eq!(weekday(u16::MAX, 12, 31), 2);
        assert_eq!(weekday(400, 1, 1), weekday(0, 1, 1));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 11), 30);
    }

    #[test]
    fn calendar_rejects_out_of_range_fields() {
        assert_eq!(Calendar::new(2023, 2, 29, 0, 0, 0), Err(ConfigError::Calendar));
        assert_eq!(Calendar::new(2024, 13, 1, 0, 0, 0), Err(ConfigError::Calendar));
        assert_eq!(Calendar::new(2024, 1, 0, 0, 0, 0), Err(ConfigError::Calendar));
        assert_eq!(Calendar::new(2024, 1, 1, 24, 0, 0), Err(ConfigError::Calendar));
        assert_eq!(Calendar::new(1969, 12, 31, 0, 0, 0), Err(ConfigError::Calendar));
        let cal = Calendar::new(2024, 2, 29, 23, 59, 59).unwrap();
        assert_eq!(cal.weekday_name(), "Thursday");
    }

    #[test]
    fn time_advances_across_leap_day() {
        let mut rtc = Rtc::new();
        let start = Calendar::new(2024, 2, 28, 23, 59, 30).unwrap();
        rtc.set_time(&start, 5_000).unwrap();
        assert_eq!(rtc.get_time(5_999), start);

        let later = rtc.get_time(5_000 + 45_000);
        assert_eq!((later.month, later.date, later.hour, later.min, later.sec), (2, 29, 0, 0, 15));
        assert_eq!(later.week, 4);

        let next = rtc.get_time(5_000 + 30_000 + 86_400_000);
        assert_eq!((next.month, next.date, next.hour), (3, 1, 0));
    }

    #[test]
    fn epoch_conversion_round_trips_at_year_end() {
        let cal = Calendar::new(2099, 12, 31, 12, 0, 1).unwrap();
        assert_eq!(Calendar::from_epoch_secs(cal.to_epoch_secs()), cal);
        assert_eq!(Rtc::new().get_time(0), Calendar::new(1970, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn set_time_validates() {
        let mut rtc = Rtc::new();
        let bad = Calendar {
            year: 2024,
            month: 4,
            date: 31,
            hour: 0,
            min: 0,
            sec: 0,
            week: 0,
        };
        assert_eq!(rtc.set_time(&bad, 0), Err(ConfigError::Calendar));
    }
}
