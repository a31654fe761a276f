use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use super::locator;

const FILE_NAME: &str = "state.json";

/// Operational state of the harness. The lifecycle commands write it when
/// the simulators come up or go down; the faucet reads it before acting.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub running: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Locator(#[from] locator::Error),
    #[error("Failed to read state file: {path}: {error}")]
    ReadFailed {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("Failed to write state file: {path}: {error}")]
    WriteFailed {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl State {
    /// Load persisted state. A harness that has never been started has no
    /// state file and reads as not running.
    pub fn load() -> Result<Self, Error> {
        let path = locator::config_dir()?.join(FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read(&path).map_err(|error| Error::ReadFailed { path, error })?;
        Ok(serde_json::from_slice(&data)?)
    }

    pub fn save(&self) -> Result<(), Error> {
        let path = locator::ensure_config_dir()?.join(FILE_NAME);
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(&path, data).map_err(|error| Error::WriteFailed { path, error })
    }
}
