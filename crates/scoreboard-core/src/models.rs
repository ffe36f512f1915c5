use crate::error::TrackerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Text written in place of an average when a week has no scores for a subject.
pub const NOT_AVAILABLE: &str = "not available";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Subject {
    Maths,
    English,
    #[serde(rename = "VR")]
    #[strum(serialize = "VR")]
    Vr,
    #[serde(rename = "NVR")]
    #[strum(serialize = "NVR")]
    Nvr,
}

/// Rows with a fixed column order and a header written even for empty tables.
pub trait Record {
    const HEADER: &'static [&'static str];
}

/// One subject's five weekday scores, bucketed under a week label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub week: String,
    pub subject: Subject,
    pub mon: i32,
    pub tue: i32,
    pub wed: i32,
    pub thu: i32,
    pub fri: i32,
}

impl ScoreRecord {
    pub fn new(week: impl Into<String>, subject: Subject, scores: [i32; 5]) -> Self {
        let [mon, tue, wed, thu, fri] = scores;
        Self {
            week: week.into(),
            subject,
            mon,
            tue,
            wed,
            thu,
            fri,
        }
    }

    pub fn scores(&self) -> [i32; 5] {
        [self.mon, self.tue, self.wed, self.thu, self.fri]
    }
}

impl Record for ScoreRecord {
    const HEADER: &'static [&'static str] = &["week", "subject", "mon", "tue", "wed", "thu", "fri"];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    Value(f64),
    NotAvailable,
}

impl Average {
    /// Mean of the five weekday scores, rounded to two decimal places.
    pub fn of(scores: [i32; 5]) -> Self {
        let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
        let mean = total as f64 / scores.len() as f64;
        Average::Value((mean * 100.0).round() / 100.0)
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing ".0" on whole numbers (80.0, not 80).
            Average::Value(v) => write!(f, "{:?}", v),
            Average::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl FromStr for Average {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == NOT_AVAILABLE {
            return Ok(Average::NotAvailable);
        }
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Average::Value)
            .ok_or_else(|| TrackerError::InvalidAverage(s.to_string()))
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Average {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Derived per-week summary; fully rebuilt from the score table on every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRecord {
    pub week: String,
    pub maths_avg: Average,
    pub english_avg: Average,
    pub vr_avg: Average,
    pub nvr_avg: Average,
}

impl AverageRecord {
    pub fn empty(week: impl Into<String>) -> Self {
        Self {
            week: week.into(),
            maths_avg: Average::NotAvailable,
            english_avg: Average::NotAvailable,
            vr_avg: Average::NotAvailable,
            nvr_avg: Average::NotAvailable,
        }
    }

    pub fn get(&self, subject: Subject) -> Average {
        match subject {
            Subject::Maths => self.maths_avg,
            Subject::English => self.english_avg,
            Subject::Vr => self.vr_avg,
            Subject::Nvr => self.nvr_avg,
        }
    }

    pub fn set(&mut self, subject: Subject, avg: Average) {
        let slot = match subject {
            Subject::Maths => &mut self.maths_avg,
            Subject::English => &mut self.english_avg,
            Subject::Vr => &mut self.vr_avg,
            Subject::Nvr => &mut self.nvr_avg,
        };
        *slot = avg;
    }
}

impl Record for AverageRecord {
    const HEADER: &'static [&'static str] =
        &["week", "maths_avg", "english_avg", "vr_avg", "nvr_avg"];
}
