#![allow(dead_code)]

use scoreboard_core::models::{ScoreRecord, Subject};

pub fn maths(week: &str, scores: [i32; 5]) -> ScoreRecord {
    ScoreRecord::new(week, Subject::Maths, scores)
}

pub fn sample_scores() -> Vec<ScoreRecord> {
    vec![
        ScoreRecord::new("5", Subject::Maths, [60, 70, 80, 90, 100]),
        ScoreRecord::new("5", Subject::English, [10, 20, 30, 40, 50]),
        ScoreRecord::new("4", Subject::Vr, [1, 2, 3, 4, 5]),
    ]
}
