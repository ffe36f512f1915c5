use crate::averages::recompute_all;
use crate::config::TrackerArgs;
use crate::error::TrackerResult;
use crate::models::{AverageRecord, ScoreRecord, Subject};
use crate::store::{CsvTable, Table};
use crate::week::WeekLabeler;
use tracing::info;

/// Both tables as shown on the view page.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerView {
    pub scores: Vec<ScoreRecord>,
    pub averages: Vec<AverageRecord>,
}

pub struct Tracker {
    scores: Box<dyn Table<ScoreRecord>>,
    averages: Box<dyn Table<AverageRecord>>,
    labeler: WeekLabeler,
}

impl Tracker {
    pub fn new(
        scores: Box<dyn Table<ScoreRecord>>,
        averages: Box<dyn Table<AverageRecord>>,
        labeler: WeekLabeler,
    ) -> Self {
        Self {
            scores,
            averages,
            labeler,
        }
    }

    /// CSV-backed tracker using the configured paths.
    pub fn from_args(args: &TrackerArgs) -> Self {
        Self::new(
            Box::new(CsvTable::<ScoreRecord>::new(args.scores_path())),
            Box::new(CsvTable::<AverageRecord>::new(args.averages_path())),
            WeekLabeler::new(args.target_date),
        )
    }

    /// Records a subject's scores under the current week label.
    pub fn add_score(&self, subject: Subject, scores: [i32; 5]) -> TrackerResult<ScoreRecord> {
        let record = ScoreRecord::new(self.labeler.current_week_label(), subject, scores);
        self.scores.append(record.clone())?;
        info!(
            "Recorded {} for week {}: {:?}",
            record.subject,
            record.week,
            record.scores()
        );
        Ok(record)
    }

    /// Rebuilds the average table from the score table and returns both.
    pub fn refresh(&self) -> TrackerResult<TrackerView> {
        let scores = self.scores.load()?;
        let averages = recompute_all(&scores);
        self.averages.save(&averages)?;
        info!(
            "Recomputed {} weekly averages from {} score rows",
            averages.len(),
            scores.len()
        );
        Ok(TrackerView { scores, averages })
    }

    pub fn delete_score(&self, index: usize) -> TrackerResult<bool> {
        let removed = self.scores.delete_at(index)?;
        if removed {
            info!("Deleted score row {}", index);
        }
        Ok(removed)
    }

    pub fn delete_average(&self, index: usize) -> TrackerResult<bool> {
        let removed = self.averages.delete_at(index)?;
        if removed {
            info!("Deleted average row {}", index);
        }
        Ok(removed)
    }

    pub fn scores(&self) -> TrackerResult<Vec<ScoreRecord>> {
        self.scores.load()
    }

    pub fn averages(&self) -> TrackerResult<Vec<AverageRecord>> {
        self.averages.load()
    }
}
