use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TrackerArgs {
    /// Directory holding both table files
    #[arg(long, short, default_value = "data")]
    pub data: PathBuf,

    #[arg(long, default_value = "scores.csv")]
    pub scores_file: String,

    #[arg(long, default_value = "averages.csv")]
    pub averages_file: String,

    /// Week labels count the whole weeks left until this date
    #[arg(long, default_value = "2027-09-01")]
    pub target_date: NaiveDate,
}

impl Default for TrackerArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data"),
            scores_file: "scores.csv".to_string(),
            averages_file: "averages.csv".to_string(),
            target_date: NaiveDate::from_ymd_opt(2027, 9, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl TrackerArgs {
    pub fn scores_path(&self) -> PathBuf {
        self.data.join(&self.scores_file)
    }

    pub fn averages_path(&self) -> PathBuf {
        self.data.join(&self.averages_file)
    }
}
