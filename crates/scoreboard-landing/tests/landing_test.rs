use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, scoreboard_landing::router())
            .await
            .unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_root_serves_static_page() {
    let url = spawn_app().await;
    let res = reqwest::get(&url).await.unwrap();

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains("<h1>Motte and Bailey</h1>"));
    assert!(body.contains("Battle of Hastings (14 October 1066)"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let url = spawn_app().await;
    let res = reqwest::get(format!("{}/view", url)).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let url = spawn_app().await;
    let body: serde_json::Value = reqwest::get(format!("{}/health", url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}
