use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_paths::{
    adapters::{NetworkSnapshot, json::JsonNetwork},
    fare::RiderCategory,
    network::{Metric, StationId},
    query::{PathQuery, query},
    server,
};

#[derive(Parser)]
#[command(version, about = "Shortest routes and fares over a subway network")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a single route and print it
    Route(RouteArgs),
    /// Serve path queries over HTTP
    Serve(ServeArgs),
}

#[derive(Args)]
struct RouteArgs {
    /// Network document (JSON)
    #[arg(long)]
    network: PathBuf,
    #[arg(long)]
    source: u64,
    #[arg(long)]
    target: u64,
    /// `distance` or `duration`
    #[arg(long = "type", default_value = "distance")]
    metric: Metric,
    /// Rider age, used for the fare discount
    #[arg(long)]
    age: Option<u32>,
}

#[derive(Args)]
struct ServeArgs {
    /// Network document (JSON)
    #[arg(long)]
    network: PathBuf,
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

fn load_snapshot(path: &Path) -> anyhow::Result<NetworkSnapshot> {
    let now = std::time::Instant::now();
    let network = JsonNetwork::from_path(path)?;
    let snapshot = NetworkSnapshot::from_adapter(&network)?;
    info!(
        stations = snapshot.station_count(),
        segments = snapshot.segments().len(),
        "loaded network in {:?}",
        now.elapsed()
    );
    Ok(snapshot)
}

fn route(args: RouteArgs) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.network)?;
    let rider = args
        .age
        .map(RiderCategory::from_age)
        .unwrap_or_default();

    let request = PathQuery::new(
        StationId::new(args.source),
        StationId::new(args.target),
        args.metric,
        rider,
    );
    let result = query(&request, snapshot.segments())
        .with_context(|| format!("routing {} -> {}", args.source, args.target))?;

    let names = result
        .stations
        .iter()
        .map(|&id| {
            snapshot
                .station(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .join(" -> ");

    println!("{names}");
    println!("Distance: {}", result.distance);
    println!("Duration: {}", result.duration);
    println!("Fare ({rider}): {}", result.fare);

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Route(args) => route(args),
        Command::Serve(args) => {
            let snapshot = load_snapshot(&args.network)?;
            server::serve(snapshot, args.bind).await
        }
    }
}
