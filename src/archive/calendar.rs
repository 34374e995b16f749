use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Timelike, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A half-open `[start, end)` range of epoch seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    pub fn contains(&self, timestamp: f64) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

/// A UTC calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    /// Returns `None` for a month that does not exist.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { first_day })
    }

    /// The UTC month a timestamp falls in.
    pub fn containing(timestamp: f64) -> Option<Self> {
        let date = utc_datetime(timestamp)?;
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    pub fn days(self) -> u32 {
        match self.first_day.checked_add_months(Months::new(1)) {
            Some(next) => next.signed_duration_since(self.first_day).num_days() as u32,
            // Only the last representable December has no successor.
            None => 31,
        }
    }

    pub fn span(self) -> TimeSpan {
        let start = midnight(self.first_day);
        TimeSpan {
            start,
            end: start + f64::from(self.days()) * SECONDS_PER_DAY,
        }
    }

    /// The span of day `day` (1-based), `None` if the month has no such day.
    pub fn day(self, day: u32) -> Option<TimeSpan> {
        if day == 0 || day > self.days() {
            return None;
        }
        let start = midnight(self.first_day) + f64::from(day - 1) * SECONDS_PER_DAY;
        Some(TimeSpan {
            start,
            end: start + SECONDS_PER_DAY,
        })
    }

    /// Every day of the month with its span, in order.
    pub fn day_spans(self) -> impl Iterator<Item = (u32, TimeSpan)> {
        (1..=self.days()).filter_map(move |day| Some((day, self.day(day)?)))
    }
}

fn midnight(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

pub fn utc_datetime(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let seconds = timestamp.floor();
    let nanos = ((timestamp - seconds) * 1e9).min(999_999_999.0) as u32;
    DateTime::from_timestamp(seconds as i64, nanos)
}

/// The UTC hour of the day a timestamp falls in.
pub fn utc_hour(timestamp: f64) -> Option<u32> {
    utc_datetime(timestamp).map(|datetime| datetime.hour())
}
