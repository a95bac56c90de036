use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vgc_tracker::api::state::AppState;
use vgc_tracker::config::AppConfig;
use vgc_tracker::ingest;
use vgc_tracker::report::Reporter;
use vgc_tracker::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "vgc-tracker")]
#[command(about = "Local Pokémon VGC match tracker with best-of-three statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Import matches from a JSON document
    Import {
        /// Path to the import file
        path: PathBuf,

        /// Parse and report but don't store
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a player's statistics
    Stats {
        /// Player name
        player: String,

        /// Win rate against opponents fielding this Pokémon
        #[arg(long)]
        versus: Option<String>,

        /// Per-position win rates for this lead
        #[arg(long)]
        lead: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting vgc-tracker v{}", env!("CARGO_PKG_VERSION"));

    let config_path = PathBuf::from(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(storage);
            let app = vgc_tracker::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Import { path, dry_run } => {
            let summary = ingest::import_file(&storage, &path, dry_run)?;
            println!(
                "Imported {} matches, {} games, {} participants ({} duplicates skipped){}",
                summary.matches_added,
                summary.games_added,
                summary.participants_added,
                summary.matches_skipped + summary.games_skipped + summary.participants_skipped,
                if dry_run { " [dry run]" } else { "" }
            );
        }
        Commands::Stats {
            player,
            versus,
            lead,
        } => {
            let reporter = Reporter::new(storage);

            if let Some(pokemon) = versus {
                let rate = reporter.matchup_win_rate(&player, &pokemon)?;
                println!(
                    "{} vs {}: {}% over {} games",
                    player, rate.opponent_pokemon, rate.win_rate, rate.games_played
                );
                return Ok(());
            }

            if let Some(lead) = lead {
                let rates = reporter.lead_combination_win_rates(&player, &lead)?;
                println!("{} leading {}:", player, lead);
                for position in vgc_tracker::GamePosition::ALL {
                    let slot = rates.get(position);
                    match slot.wins {
                        Some(wins) => println!(
                            "  {}: {}/{} ({}%)",
                            position, wins, slot.total, slot.win_rate
                        ),
                        None => println!("  {}: no games", position),
                    }
                }
                return Ok(());
            }

            let games = reporter.game_win_rate(&player)?;
            let sets = reporter.bo3_win_rate(&player)?;
            let positions = reporter.position_win_rates(&player)?;

            println!("{}", player);
            println!(
                "  games:   {}% over {}",
                games.win_rate, games.games_played
            );
            println!(
                "  sets:    {}% over {}",
                sets.win_rate, sets.matches_played
            );
            for position in vgc_tracker::GamePosition::ALL {
                let rate = positions.get(position);
                println!(
                    "  {}:      {}% over {}",
                    position, rate.win_rate, rate.games_played
                );
            }
        }
    }

    Ok(())
}
