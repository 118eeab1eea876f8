use thiserror::Error;

/// Errors raised while loading or validating [`crate::FsmlConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("root manifest filename must not be empty")]
    EmptyRootManifest,

    #[error("`{0}` must be a bare filename, not a path")]
    NotAFilename(String),
}

/// A rename batch that cannot be applied in order to a given file set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("step {step}: `{from}` does not exist")]
    MissingSource { step: usize, from: String },

    #[error("step {step}: renaming `{from}` would overwrite `{to}`")]
    Collision { step: usize, from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drop position `{0}`, expected before, after or inside")]
pub struct ParsePositionError(pub String);
