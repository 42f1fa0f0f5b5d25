use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use perfection_domain::CategoryId;
use perfection_engine::infrastructure::app_settings::AppSettings;
use perfection_engine::infrastructure::memory::WorldSnapshot;
use perfection_engine::App;

const SNAPSHOT_ENV: &str = "PERFECTION_SNAPSHOT";

pub fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perfection_engine=debug,perfection_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting perfection runner");

    let settings = AppSettings::load_from_env(AppSettings::default());
    let path = snapshot_path()?;

    tracing::info!(path = %path.display(), "Loading world snapshot");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot = WorldSnapshot::from_json(&json)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;

    let app = App::new(snapshot.into_providers(), settings);
    app.on_save_loaded();

    report_bundles(&app);
    report_perfection(&app);

    Ok(())
}

/// First CLI argument, else `PERFECTION_SNAPSHOT`.
fn snapshot_path() -> Result<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SNAPSHOT_ENV).ok())
        .map(PathBuf::from)
        .with_context(|| format!("No snapshot given: pass a path or set {}", SNAPSHOT_ENV))
}

fn report_bundles(app: &App) {
    let bundles = &app.use_cases.bundles;

    let overall = bundles.progress.overall_progress();
    tracing::info!(
        completed = overall.completed,
        total = overall.total,
        percent = overall.percent,
        community_complete = bundles.progress.is_community_complete(),
        "Bundles"
    );

    for room in bundles.progress.room_progress_list() {
        tracing::info!(
            room = %room.room,
            completed = room.bundles.completed,
            total = room.bundles.total,
            reward_granted = room.reward_granted,
            "Room"
        );
    }

    let summary = bundles.availability.availability_summary();
    for name in &summary.available {
        tracing::info!(bundle = %name, "Can progress today");
    }
}

fn report_perfection(app: &App) {
    let progress = app.perfection();

    for category in progress.categories() {
        tracing::info!(
            category = %category.id(),
            current = category.current(),
            total = category.total(),
            contribution = %format!("{:.2}", category.contribution()),
            "{}",
            category.name()
        );
    }

    for id in CategoryId::ALL {
        for line in app.incomplete_items(id) {
            tracing::info!(category = %id, "Still needed: {}", line);
        }
    }

    tracing::info!(
        total_percentage = %format!("{:.2}", progress.total_percentage()),
        is_complete = progress.is_complete(),
        island_unlocked = progress.island_unlocked(),
        "Perfection"
    );
}
