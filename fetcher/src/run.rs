use crate::{
    config::Config,
    logging,
    notifier::{self, NotifyOutcome},
    parking::GarageRecord,
    source::{self, SourceError},
};
use chrono::{DateTime, Utc};
use reqwest::Client as HTTPClient;
use serde::Serialize;
use vdl_parking_core::{GarageStatus, Snapshot, detect_change};
use vdl_parking_store::SnapshotStore;

#[derive(Debug, Serialize)]
pub struct RunResult {
    pub message: String,
    pub garages_found: usize,
    pub garages_monitored: usize,
    pub changed: bool,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
    pub snapshot_saved: bool,
}

/// One polling pass: fetch, classify, compare with the stored snapshot,
/// notify if needed and store the new snapshot.
pub async fn run_once(
    http_client: &HTTPClient,
    config: &Config,
    store: &SnapshotStore,
    now: DateTime<Utc>,
) -> Result<RunResult, SourceError> {
    let garages = source::fetch_garages(http_client, &config.data_url)
        .await
        .inspect_err(|err| {
            logging::Logger::new()
                .error_text(err.to_string())
                .error("source.fetch_failed", err, "Error fetching parking data");
        })?;
    let garages_found = garages.len();

    let current = build_snapshot(garages, config, now);
    let previous = load_previous(store).await;

    let change = detect_change(previous.as_ref(), &current);
    let outcome = match &change {
        Some(reason) => {
            logging::Logger::new().info("run.changed", &format!("Notifying: {reason}"));
            notifier::notify_garages(http_client, &config.webhook_url, &current).await
        }
        None => {
            logging::Logger::new().info("run.unchanged", "No tier change, nothing to notify");
            NotifyOutcome::default()
        }
    };

    let snapshot_saved = match store.save(&current).await {
        Ok(()) => true,
        Err(err) => {
            logging::Logger::new()
                .path(store.path().display().to_string())
                .error_text(err.to_string())
                .error("snapshot.save_failed", &err, "Failed to save snapshot");
            false
        }
    };

    Ok(RunResult {
        message: format!(
            "Checked {} of {} garages",
            current.garages.len(),
            garages_found
        ),
        garages_found,
        garages_monitored: current.garages.len(),
        changed: change.is_some(),
        notifications_sent: outcome.sent,
        notifications_failed: outcome.failed,
        snapshot_saved,
    })
}

fn build_snapshot(garages: Vec<GarageRecord>, config: &Config, now: DateTime<Utc>) -> Snapshot {
    let mut snapshot = Snapshot::new(now);

    for garage in garages {
        if !config.titles.contains(&garage.title) {
            continue;
        }
        let status = GarageStatus::new(garage.title, garage.occupied, garage.total);
        let title = status.title.clone();
        if !snapshot.push(status) {
            logging::Logger::new()
                .garage(title)
                .warn("garage.duplicate", "Duplicate garage in data source, keeping the first");
        }
    }

    for title in config.titles.iter() {
        if !snapshot.garages.iter().any(|g| g.title == title) {
            logging::Logger::new()
                .garage(title)
                .warn("garage.missing", "Monitored garage not found in data source");
        }
    }

    snapshot
}

async fn load_previous(store: &SnapshotStore) -> Option<Snapshot> {
    match store.load().await {
        Ok(previous) => previous,
        Err(err) => {
            logging::Logger::new()
                .path(store.path().display().to_string())
                .error_text(err.to_string())
                .error("snapshot.load_failed", &err, "Ignoring unreadable snapshot");
            None
        }
    }
}
