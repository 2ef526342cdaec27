use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};

use crate::activity::model::ContributionDay;
use crate::foundation::error::{SnakeError, SnakeResult};
use crate::foundation::random::RandomSource;

/// Number of days in a synthesized history.
pub const SYNTHETIC_DAYS: usize = 365;

const EMPTY_DAY_PROBABILITY: f64 = 0.45;
const MAX_SYNTHETIC_COUNT: u32 = 12;

/// Provider of per-day contribution records for a user handle.
///
/// Implementations may fail for any reason; [`load_activity`] turns a failure into a
/// synthesized history instead of surfacing it.
pub trait ContributionSource {
    /// Short human-readable name used in logs.
    fn name(&self) -> &str;

    /// Fetch the ordered daily records for `username`.
    fn fetch(&self, username: &str) -> SnakeResult<Vec<ContributionDay>>;
}

/// Source backed by records already in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    days: Vec<ContributionDay>,
}

impl StaticSource {
    /// Wrap a list of records.
    pub fn new(days: Vec<ContributionDay>) -> Self {
        Self { days }
    }
}

impl ContributionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, _username: &str) -> SnakeResult<Vec<ContributionDay>> {
        Ok(self.days.clone())
    }
}

/// Source reading a JSON file.
///
/// Accepted shapes: a bare array of `{date, count, level}` records, or an object with a
/// `contributions` array.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path` on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContributionSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self, _username: &str) -> SnakeResult<Vec<ContributionDay>> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<ContributionDay>),
            Wrapped { contributions: Vec<ContributionDay> },
        }

        let f = File::open(&self.path).map_err(|e| {
            SnakeError::source(format!("open activity file '{}': {e}", self.path.display()))
        })?;
        let repr: Repr = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            SnakeError::serde(format!(
                "parse activity file '{}': {e}",
                self.path.display()
            ))
        })?;
        Ok(match repr {
            Repr::List(days) | Repr::Wrapped { contributions: days } => days,
        })
    }
}

/// Source that never has data; every fetch falls back to a synthesized history.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineSource;

impl ContributionSource for OfflineSource {
    fn name(&self) -> &str {
        "offline"
    }

    fn fetch(&self, username: &str) -> SnakeResult<Vec<ContributionDay>> {
        Err(SnakeError::source(format!(
            "no contribution data available offline for '{username}'"
        )))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Activity records plus where they came from.
pub struct Activity {
    /// Ordered daily records.
    pub days: Vec<ContributionDay>,
    /// True when `days` were synthesized because the source failed.
    pub synthetic: bool,
}

/// Synthesize `days` records ending at `end` (inclusive), oldest first.
pub fn synthesize_history<R: RandomSource + ?Sized>(
    rng: &mut R,
    end: NaiveDate,
    days: usize,
) -> Vec<ContributionDay> {
    (0..days)
        .map(|i| {
            let back = (days - 1 - i) as u64;
            let date = end.checked_sub_days(Days::new(back)).unwrap_or(end);
            let count = if rng.next_unit() < EMPTY_DAY_PROBABILITY {
                0
            } else {
                1 + (rng.next_unit() * f64::from(MAX_SYNTHETIC_COUNT)).floor() as u32
            };
            let count = count.min(MAX_SYNTHETIC_COUNT);
            ContributionDay::new(
                date.to_string(),
                count,
                ContributionDay::level_for_count(count),
            )
        })
        .collect()
}

/// Fetch activity for `username`, substituting a synthesized year when the source fails.
#[tracing::instrument(skip(source, rng), fields(source = source.name()))]
pub fn load_activity<S, R>(source: &S, username: &str, rng: &mut R, today: NaiveDate) -> Activity
where
    S: ContributionSource + ?Sized,
    R: RandomSource + ?Sized,
{
    match source.fetch(username) {
        Ok(days) => Activity {
            days,
            synthetic: false,
        },
        Err(err) => {
            tracing::warn!(%err, "contribution source failed; using synthetic history");
            Activity {
                days: synthesize_history(rng, today, SYNTHETIC_DAYS),
                synthetic: true,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/activity/source.rs"]
mod tests;
