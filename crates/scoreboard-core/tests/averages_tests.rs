mod common;

use common::{maths, sample_scores};
use rstest::rstest;
use scoreboard_core::averages::{compute, recompute_all};
use scoreboard_core::models::{Average, ScoreRecord, Subject};
use strum::IntoEnumIterator;

#[test]
fn test_one_record_per_subject() {
    let records: Vec<ScoreRecord> = Subject::iter()
        .map(|s| ScoreRecord::new("7", s, [10, 20, 30, 40, 50]))
        .collect();

    let avg = compute(&records, "7");
    for subject in Subject::iter() {
        assert_eq!(avg.get(subject), Average::Value(30.0), "{}", subject);
    }
}

#[test]
fn test_missing_subjects_are_not_available() {
    let records = vec![maths("5", [60, 70, 80, 90, 100])];
    let avg = compute(&records, "5");

    assert_eq!(avg.week, "5");
    assert_eq!(avg.maths_avg, Average::Value(80.0));
    assert_eq!(avg.english_avg.to_string(), "not available");
    assert_eq!(avg.vr_avg.to_string(), "not available");
    assert_eq!(avg.nvr_avg.to_string(), "not available");
}

#[test]
fn test_duplicate_week_and_subject_last_wins() {
    let records = vec![
        maths("5", [100, 100, 100, 100, 100]),
        ScoreRecord::new("5", Subject::English, [0, 0, 0, 0, 0]),
        maths("5", [10, 10, 10, 10, 10]),
    ];
    let avg = compute(&records, "5");
    assert_eq!(avg.maths_avg, Average::Value(10.0));
}

#[rstest]
#[case([60, 70, 80, 90, 100], 80.0)]
#[case([1, 1, 1, 1, 2], 1.2)]
#[case([33, 33, 33, 33, 34], 33.2)]
#[case([0, 0, 0, 0, 0], 0.0)]
#[case([-10, 0, 0, 0, 0], -2.0)]
fn test_average_values(#[case] scores: [i32; 5], #[case] expected: f64) {
    let avg = compute(&[maths("1", scores)], "1");
    assert_eq!(avg.maths_avg, Average::Value(expected));
}

#[test]
fn test_recompute_one_row_per_distinct_week() {
    let records = vec![
        maths("5", [1, 1, 1, 1, 1]),
        maths("4", [2, 2, 2, 2, 2]),
        ScoreRecord::new("5", Subject::Nvr, [3, 3, 3, 3, 3]),
        maths("-1", [4, 4, 4, 4, 4]),
    ];

    let all = recompute_all(&records);
    let weeks: Vec<&str> = all.iter().map(|a| a.week.as_str()).collect();
    assert_eq!(weeks, vec!["5", "4", "-1"]);
    assert_eq!(all[0].maths_avg, Average::Value(1.0));
    assert_eq!(all[0].nvr_avg, Average::Value(3.0));
    assert_eq!(all[1].nvr_avg, Average::NotAvailable);
}

#[test]
fn test_recompute_empty() {
    assert!(recompute_all(&[]).is_empty());
}

#[test]
fn test_recompute_is_idempotent() {
    let records = sample_scores();
    assert_eq!(recompute_all(&records), recompute_all(&records));
}
