use crate::models::{Average, AverageRecord, ScoreRecord, Subject};
use itertools::Itertools;
use strum::IntoEnumIterator;

/// Per-subject averages for one week label.
///
/// If several records share the week and subject, the last one in `records`
/// wins; they are not aggregated.
pub fn compute(records: &[ScoreRecord], week: &str) -> AverageRecord {
    let mut summary = AverageRecord::empty(week);

    for subject in Subject::iter() {
        let latest = records
            .iter()
            .rev()
            .find(|r| r.week == week && r.subject == subject);

        if let Some(record) = latest {
            summary.set(subject, Average::of(record.scores()));
        }
    }

    summary
}

/// One summary per distinct week label, in order of first appearance.
pub fn recompute_all(records: &[ScoreRecord]) -> Vec<AverageRecord> {
    records
        .iter()
        .map(|r| r.week.as_str())
        .unique()
        .map(|week| compute(records, week))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_ignores_other_weeks() {
        let records = vec![
            ScoreRecord::new("4", Subject::Maths, [0, 0, 0, 0, 0]),
            ScoreRecord::new("5", Subject::Maths, [50, 50, 50, 50, 50]),
        ];
        let avg = compute(&records, "5");
        assert_eq!(avg.maths_avg, Average::Value(50.0));
        assert_eq!(avg.english_avg, Average::NotAvailable);
    }

    #[test]
    fn test_unknown_week_is_all_unavailable() {
        let records = vec![ScoreRecord::new("5", Subject::Vr, [1, 2, 3, 4, 5])];
        assert_eq!(compute(&records, "6"), AverageRecord::empty("6"));
    }
}
