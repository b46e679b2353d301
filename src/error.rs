use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("path is not a directory: {0}")]
    NotADirectory(String),

    #[error("cannot read repository root: {0}")]
    RootUnreadable(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
