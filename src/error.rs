use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapError {
    #[error("storage setup failed: {0}")]
    Init(String),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(String),

    #[error("share failed: {0}")]
    Share(String),

    #[error("Other error: {0}")]
    Other(String),
}

pub type SnapResult<T> = Result<T, SnapError>;
