use thiserror::Error;

#[derive(Error, Debug)]
pub enum CelestoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Env(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CelestoError {
    /// True for failures that originate at the model provider boundary.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            CelestoError::Provider(_) | CelestoError::Http(_) | CelestoError::InvalidResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CelestoError>;
