use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Static Motte and Bailey page", long_about = None)]
struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(long, default_value_t = 10000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let addr = SocketAddr::new(args.host, args.port);
    info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to start server on {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, scoreboard_landing::router()).await?;
    Ok(())
}
