use thiserror::Error;

#[derive(Error, Debug)]
pub enum LecternError {
    #[error("invalid explore address '{0}': {1}")]
    InvalidAddress(String, String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("catalog API error: {0}")]
    Api(String),

    #[error("catalog request timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LecternError>;
