use anyhow::{Context, Result, anyhow};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use vdl_parking_core::Snapshot;

pub const DEFAULT_STATUS_FILE: &str = "status.json";

/// Last known snapshot, kept as a JSON file between runs.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored snapshot. A missing file is `Ok(None)`; any other
    /// read or parse failure is an error.
    pub async fn load(&self) -> Result<Option<Snapshot>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        let snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    /// Overwrites the stored snapshot, creating parent directories if needed.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(anyhow!("snapshot path is empty"));
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let payload = serde_json::to_string_pretty(snapshot).context("serializing snapshot")?;
        tokio::fs::write(&self.path, payload)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
