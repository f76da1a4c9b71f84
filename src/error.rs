use std::path::PathBuf;

use thiserror::Error;

use crate::resources::BackgroundTheme;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The factory was asked for a ground obstacle but the theme has no
    /// ground textures registered.
    #[error("no ground obstacle textures registered for theme {0:?}")]
    EmptyObstacleSet(BackgroundTheme),
}

pub type Result<T> = std::result::Result<T, GameError>;
