use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContribError>;

// Wrapped errors are reported through `source()`, so their text is not
// repeated in the variant message.
#[derive(Error, Debug)]
pub enum ContribError {
    #[error("HTTP error")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),
    #[error("TOML error")]
    Toml(#[from] toml::ser::Error),
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
