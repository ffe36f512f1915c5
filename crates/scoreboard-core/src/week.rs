use chrono::{Local, NaiveDate};

/// Labels submissions with the number of whole weeks left before a target date.
///
/// The label is a coarse bucket key, not a calendar week: it goes negative
/// once the target has passed and is never clamped.
#[derive(Debug, Clone, Copy)]
pub struct WeekLabeler {
    target: NaiveDate,
    pinned_today: Option<NaiveDate>,
}

impl WeekLabeler {
    pub fn new(target: NaiveDate) -> Self {
        Self {
            target,
            pinned_today: None,
        }
    }

    /// Always labels as if it were `today`.
    pub fn pinned(target: NaiveDate, today: NaiveDate) -> Self {
        Self {
            target,
            pinned_today: Some(today),
        }
    }

    pub fn current_week_label(&self) -> String {
        let today = self
            .pinned_today
            .unwrap_or_else(|| Local::now().date_naive());
        label_between(today, self.target)
    }
}

/// Day difference divided by seven, truncated toward zero.
pub fn label_between(today: NaiveDate, target: NaiveDate) -> String {
    let days = target.signed_duration_since(today).num_days();
    (days / 7).to_string()
}
