//! Lookups over the timestamped snapshots of an archive file.
//!
//! Archive files are written in timestamp order, but nothing here relies on
//! it: every lookup scans the whole sequence.

mod calendar;
mod uptime;

pub use calendar::*;
pub use uptime::*;

pub trait Snapshot {
    /// Seconds since epoch.
    fn timestamp(&self) -> f64;
}

/// The snapshot with the greatest timestamp; the first one on ties.
pub fn latest<S: Snapshot>(entries: &[S]) -> Option<&S> {
    let mut best: Option<&S> = None;
    for entry in entries {
        match best {
            Some(current) if entry.timestamp() <= current.timestamp() => {}
            _ => best = Some(entry),
        }
    }
    best
}

/// The snapshot nearest to `target`; the first one on ties.
pub fn closest<S: Snapshot>(entries: &[S], target: f64) -> Option<&S> {
    let mut best: Option<(&S, f64)> = None;
    for entry in entries {
        let distance = (entry.timestamp() - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((entry, distance)),
        }
    }
    best.map(|(entry, _)| entry)
}

pub fn within<S: Snapshot>(entries: &[S], span: TimeSpan) -> impl Iterator<Item = &S> {
    entries
        .iter()
        .filter(move |entry| span.contains(entry.timestamp()))
}

/// The first snapshot, in file order, that falls inside `span`.
pub fn first_within<S: Snapshot>(entries: &[S], span: TimeSpan) -> Option<&S> {
    within(entries, span).next()
}
