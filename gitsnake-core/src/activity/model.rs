#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One day of contribution activity.
pub struct ContributionDay {
    /// Calendar date as reported by the source (`YYYY-MM-DD`); used for labeling only.
    #[serde(default)]
    pub date: String,
    /// Number of contributions on that day.
    #[serde(default)]
    pub count: u32,
    /// Intensity bucket `0..=4` as reported by the source.
    #[serde(default)]
    pub level: u8,
}

impl ContributionDay {
    /// Build a record.
    pub fn new(date: impl Into<String>, count: u32, level: u8) -> Self {
        Self {
            date: date.into(),
            count,
            level,
        }
    }

    /// Bucket a count into a level the way the synthetic history does.
    pub fn level_for_count(count: u32) -> u8 {
        match count {
            0 => 0,
            1..=2 => 1,
            3..=5 => 2,
            6..=8 => 3,
            _ => 4,
        }
    }
}
