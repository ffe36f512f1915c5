use axum::{response::Html, routing::get, Json, Router};
use serde::Serialize;

const PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Motte and Bailey</title>
  </head>
  <body>
    <h1>Motte and Bailey</h1>
    <p>Motte and Bailey Castles were introduced by King William of England after the Battle of Hastings (14 October 1066).</p>
  </body>
</html>
"#;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
}

pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
