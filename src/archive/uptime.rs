use rocket::serde::{Deserialize, Serialize};

use super::{within, CalendarMonth, Snapshot, TimeSpan};

const HOURS_PER_DAY: usize = 24;

/// How often an archive is expected to capture data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// Full only when every UTC hour of the day has a snapshot.
    Hourly,
    /// Full as soon as the day has any snapshot.
    Daily,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub enum DayStatus {
    #[serde(rename = "no data")]
    NoData,
    #[serde(rename = "partially available")]
    PartiallyAvailable,
    #[serde(rename = "full data")]
    FullData,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct DayUptime {
    pub day: u32,
    pub status: DayStatus,
}

pub fn classify_day<S: Snapshot>(entries: &[S], day: TimeSpan, coverage: Coverage) -> DayStatus {
    let mut hours = [false; HOURS_PER_DAY];
    let mut any = false;
    for entry in within(entries, day) {
        any = true;
        if let Some(hour) = super::utc_hour(entry.timestamp()) {
            hours[hour as usize] = true;
        }
    }

    match (any, coverage) {
        (false, _) => DayStatus::NoData,
        (true, Coverage::Daily) => DayStatus::FullData,
        (true, Coverage::Hourly) if hours.iter().all(|&seen| seen) => DayStatus::FullData,
        (true, Coverage::Hourly) => DayStatus::PartiallyAvailable,
    }
}

/// Status of every day of `month`, in order.
pub fn classify_month<S: Snapshot>(
    month: CalendarMonth,
    entries: &[S],
    coverage: Coverage,
) -> Vec<DayUptime> {
    month
        .day_spans()
        .map(|(day, span)| DayUptime {
            day,
            status: classify_day(entries, span, coverage),
        })
        .collect()
}
