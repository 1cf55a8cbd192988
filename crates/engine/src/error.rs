use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown loop mode `{0}` (expected `falling` or `random`)")]
    UnknownMode(String),
    #[error("invalid value for {var}: `{value}`")]
    InvalidValue { var: &'static str, value: String },
    #[error("tick interval must be at least 1ms")]
    ZeroTick,
    #[error("{0} must be at least 1")]
    ZeroCapacity(&'static str),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("game loop task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
