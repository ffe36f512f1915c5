use anyhow::Context;
use clap::Parser;
use scoreboard_core::config::TrackerArgs;
use scoreboard_core::tracker::Tracker;
use scoreboard_web::state::AppState;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Weekly practice-test score tracker", long_about = None)]
struct Args {
    #[command(flatten)]
    tracker: TrackerArgs,

    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("📒 Score tracker is initializing...");

    std::fs::create_dir_all(&args.tracker.data)
        .with_context(|| format!("Cannot create data directory {:?}", args.tracker.data))?;

    info!("📂 Scores table: {:?}", args.tracker.scores_path());
    info!("📂 Averages table: {:?}", args.tracker.averages_path());
    info!("🗓️ Week labels count down to {}", args.tracker.target_date);

    let state = Arc::new(AppState::new(Tracker::from_args(&args.tracker)));
    let app = scoreboard_web::router(state);

    let addr = SocketAddr::new(args.host, args.port);
    info!("🚀 Score tracker listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
