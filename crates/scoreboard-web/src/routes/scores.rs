use crate::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use scoreboard_core::models::Subject;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Raw form fields. Parsing happens in the handler so malformed numbers
/// surface as a server error instead of an extractor rejection.
#[derive(Deserialize)]
pub struct ScoreForm {
    pub subject: String,
    pub mon: String,
    pub tue: String,
    pub wed: String,
    pub thu: String,
    pub fri: String,
}

impl ScoreForm {
    pub fn parse(&self) -> AppResult<(Subject, [i32; 5])> {
        let subject = self
            .subject
            .trim()
            .parse::<Subject>()
            .map_err(|_| AppError::Form(format!("Unknown subject '{}'", self.subject)))?;

        let days = [
            ("mon", &self.mon),
            ("tue", &self.tue),
            ("wed", &self.wed),
            ("thu", &self.thu),
            ("fri", &self.fri),
        ];

        let mut scores = [0i32; 5];
        for (slot, (day, raw)) in scores.iter_mut().zip(days) {
            *slot = raw
                .trim()
                .parse()
                .map_err(|_| AppError::Form(format!("Invalid {} score '{}'", day, raw)))?;
        }

        Ok((subject, scores))
    }
}

pub async fn index() -> Html<String> {
    Html(render::form_page())
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ScoreForm>,
) -> AppResult<Redirect> {
    let (subject, scores) = form.parse()?;
    state.tracker.lock().await.add_score(subject, scores)?;
    Ok(Redirect::to("/view"))
}

pub async fn view(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let view = state.tracker.lock().await.refresh()?;
    Ok(Html(render::view_page(&view)))
}

pub async fn delete_raw(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> AppResult<Redirect> {
    if !state.tracker.lock().await.delete_score(index)? {
        debug!("No score row at {}", index);
    }
    Ok(Redirect::to("/view"))
}

pub async fn delete_avg(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> AppResult<Redirect> {
    if !state.tracker.lock().await.delete_average(index)? {
        debug!("No average row at {}", index);
    }
    Ok(Redirect::to("/view"))
}
