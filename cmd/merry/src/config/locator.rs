use std::{
    env,
    fs::create_dir_all,
    path::PathBuf,
};

use directories::UserDirs;

pub const MERRY_CONFIG_HOME: &str = "MERRY_CONFIG_HOME";
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to find home directory")]
    HomeDirNotFound,
    #[error("XDG_CONFIG_HOME env variable is not a valid path. Got {0}")]
    XdgConfigHome(String),
    #[error("Failed to create directory: {path:?}")]
    DirCreationFailed { path: PathBuf },
}

/// Resolve merry's global config directory: `$MERRY_CONFIG_HOME` if set,
/// then `$XDG_CONFIG_HOME/merry`, then `~/.config/merry`.
pub fn config_dir() -> Result<PathBuf, Error> {
    if let Ok(home) = env::var(MERRY_CONFIG_HOME) {
        return Ok(PathBuf::from(home));
    }
    if let Ok(config_home) = env::var(XDG_CONFIG_HOME) {
        let path = PathBuf::from(&config_home);
        if !path.is_absolute() {
            return Err(Error::XdgConfigHome(config_home));
        }
        return Ok(path.join("merry"));
    }
    UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("merry"))
        .ok_or(Error::HomeDirNotFound)
}

pub fn ensure_config_dir() -> Result<PathBuf, Error> {
    let dir = config_dir()?;
    create_dir_all(&dir).map_err(|_| Error::DirCreationFailed { path: dir.clone() })?;
    Ok(dir)
}
