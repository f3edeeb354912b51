use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stage::Stage;

const APP_DIR_NAME: &str = "snake-bug-quest";
const PROGRESS_FILE_NAME: &str = "progress.json";

/// On-disk progress record.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Raw stage number; range-checked on load.
    pub stage: i64,
    /// Seconds since the Unix epoch at the time of the last save.
    #[serde(default)]
    pub updated_at: u64,
}

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to read progress file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse progress file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create directory for progress file {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize progress")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write progress file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the platform-correct progress file path.
#[must_use]
pub fn progress_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(PROGRESS_FILE_NAME);
    base
}

/// Reads the raw record. `Ok(None)` means no progress has been saved yet.
pub fn read_record(path: &Path) -> Result<Option<ProgressRecord>, ProgressError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ProgressError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| ProgressError::Parse {
            path: path.to_owned(),
            source,
        })
}

/// Loads the saved stage, never failing: a missing, unreadable or corrupt
/// record starts over at stage one and is rewritten. Out-of-range stages are
/// clamped.
pub fn load_stage(path: &Path) -> Stage {
    match read_record(path) {
        Ok(Some(record)) => {
            let stage = Stage::clamped(record.stage);
            if i64::from(stage.number()) != record.stage {
                tracing::warn!(saved = record.stage, clamped = stage.number(), "saved stage out of range");
            }
            stage
        }
        Ok(None) => {
            tracing::info!(path = %path.display(), "no saved progress; starting at stage 1");
            save_or_warn(path, Stage::FIRST);
            Stage::FIRST
        }
        Err(error) => {
            tracing::warn!(error = %error, "resetting progress to stage 1");
            save_or_warn(path, Stage::FIRST);
            Stage::FIRST
        }
    }
}

/// Writes `stage` to disk with the current timestamp, creating parent
/// directories when needed.
pub fn save_stage(path: &Path, stage: Stage) -> Result<(), ProgressError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ProgressError::CreateDir {
            path: path.to_owned(),
            source,
        })?;
    }

    let record = ProgressRecord {
        stage: i64::from(stage.number()),
        updated_at: unix_now(),
    };
    let mut json = serde_json::to_string_pretty(&record).map_err(ProgressError::Serialize)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| ProgressError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Resets saved progress to stage one.
pub fn reset(path: &Path) -> Result<(), ProgressError> {
    save_stage(path, Stage::FIRST)
}

/// Saves `stage`, logging instead of failing.
pub fn save_or_warn(path: &Path, stage: Stage) {
    if let Err(error) = save_stage(path, stage) {
        tracing::warn!(error = %error, stage = stage.number(), "failed to save progress");
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{ProgressError, load_stage, read_record, reset, save_stage};
    use crate::stage::Stage;

    #[test]
    fn saved_stage_loads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("progress.json");

        save_stage(&path, Stage::clamped(5)).expect("save should succeed");

        assert_eq!(load_stage(&path), Stage::clamped(5));
        let record = read_record(&path).expect("read").expect("record exists");
        assert_eq!(record.stage, 5);
        assert!(record.updated_at > 0);
    }

    #[test]
    fn missing_file_starts_at_stage_one_and_creates_it() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");

        assert_eq!(load_stage(&path), Stage::FIRST);
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_resets_to_stage_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");
        fs::write(&path, "not-json").expect("write");

        assert!(matches!(read_record(&path), Err(ProgressError::Parse { .. })));
        assert_eq!(load_stage(&path), Stage::FIRST);
        let record = read_record(&path).expect("rewritten").expect("record exists");
        assert_eq!(record.stage, 1);
    }

    #[test]
    fn out_of_range_stage_is_clamped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");

        fs::write(&path, r#"{"stage": 42, "updated_at": 0}"#).expect("write");
        assert_eq!(load_stage(&path), Stage::COMPLETE);

        fs::write(&path, r#"{"stage": -1}"#).expect("write");
        assert_eq!(load_stage(&path), Stage::FIRST);
    }

    #[test]
    fn reset_writes_stage_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");
        save_stage(&path, Stage::clamped(6)).expect("save");

        reset(&path).expect("reset");

        assert_eq!(load_stage(&path), Stage::FIRST);
    }
}
