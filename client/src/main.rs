//! Headless tracker client: loads everything from the backend and prints
//! the dashboard.
//!
//! ```text
//! tracker-client [SEASON] [--json]
//! ```

use std::sync::Arc;

use shared::{format_winrate, NO_DATA};
use tracker_client::analytics::trend::Trend;
use tracker_client::analytics::Dashboard;
use tracker_client::app::App;
use tracker_client::config::ClientConfig;
use tracker_client::debug::{self, LogConfig};
use tracker_client::services::api::HttpBackend;
use tracker_client::{AppError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = debug::init_logger(&LogConfig::from_env())?;

    let config = ClientConfig::from_env()?;
    config.validate()?;
    tracing::info!(backend = %config.backend_url, "Starting tracker client");

    let mut json = false;
    let mut season = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => season = Some(arg),
        }
    }

    let backend = HttpBackend::new(&config)?;
    let app = App::new(Arc::new(backend))?;
    app.start();
    app.settle().await;

    if let Some(season) = season.as_deref() {
        app.change_season_filter(Some(season));
        app.settle().await;
    }

    let dashboard = app.dashboard();
    if json {
        let text = serde_json::to_string_pretty(&dashboard)
            .map_err(|e| AppError::State(format!("Failed to encode dashboard: {}", e)))?;
        println!("{}", text);
    } else {
        print_dashboard(&dashboard);
    }

    tracing::info!(failures = app.bus().failure_count(), "Tracker client done");
    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    let global = &dashboard.global;
    println!(
        "Season: {}",
        dashboard.season_filter.as_deref().unwrap_or("all")
    );
    println!(
        "Matches: {}  W: {}  L: {}  Winrate: {}",
        global.total_matches,
        global.wins,
        global.losses,
        format_winrate(global.winrate)
    );

    if let Some(streak) = &dashboard.streaks.current {
        if let Some(kind) = streak.kind {
            println!("Current streak: {:?} x{}", kind, streak.count);
        }
    }
    println!("Best win streak: {}", dashboard.streaks.best_win_streak);

    println!("\nDecks");
    for deck in &dashboard.decks {
        println!(
            "  {:<24} {:>4} games  {}",
            deck.deck_name,
            deck.total,
            format_winrate(deck.winrate)
        );
    }

    println!("\nMost played opponents");
    for opponent in &dashboard.top_opponents {
        println!(
            "  {:<24} {:>4} games  {}",
            opponent.name,
            opponent.total,
            format_winrate(opponent.winrate())
        );
    }

    match &dashboard.trend {
        Trend::Series(points) => {
            if let Some(last) = points.last() {
                println!("\nTrend: {} points, now {}", points.len(), format_winrate(Some(last.winrate)));
            }
        }
        Trend::Insufficient { qualifying } => {
            println!("\nTrend: {} ({} decided matches)", NO_DATA, qualifying)
        }
    }

    if let Some(seasons) = &dashboard.seasons {
        println!("\nSeasons");
        for row in seasons {
            println!(
                "  {:<24} {:>4} games  {}",
                row.season.as_deref().unwrap_or("No season"),
                row.total,
                format_winrate(row.winrate)
            );
        }
    }
}
