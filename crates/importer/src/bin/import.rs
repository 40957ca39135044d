use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use importer::{FixtureImporter, FixtureValidator, fixtures::load_fixture_file};
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "matchpool-import")]
#[command(about = "Match pool seed data importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load match schedules from a fixture JSON file
    Fixtures {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Fixtures {
            file,
            validate_only,
        } => {
            handle_fixture_import(&file, validate_only, cli.database_url.as_deref()).await?;
        }
    }

    Ok(())
}

async fn handle_fixture_import(
    file: &Path,
    validate_only: bool,
    database_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading fixtures from: {}", file.display());

    let fixtures = load_fixture_file(file).await?;

    tracing::info!(
        "Loaded {} match(es) for {}",
        fixtures.matches.len(),
        fixtures.tournament.as_deref().unwrap_or("an unnamed tournament")
    );

    let report = FixtureValidator::validate(&fixtures)?;
    report.log_warnings();
    tracing::info!("Validation successful");

    if validate_only {
        return Ok(());
    }

    let database_url = database_url.ok_or("DATABASE_URL is required unless --validate-only is set")?;

    tracing::info!("Connecting to database...");
    let db = Database::new(database_url).await?;
    db.run_migrations().await?;

    let matches = db.match_repository();
    let summary = FixtureImporter::new(&matches).import(&fixtures).await?;

    tracing::info!(
        "Import completed: {} created, {} updated",
        summary.created,
        summary.updated
    );

    Ok(())
}
