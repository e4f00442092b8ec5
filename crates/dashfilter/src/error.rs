use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Filter schema is empty")]
    EmptySchema,

    #[error("Filter key cannot be empty")]
    EmptyKey,

    #[error("Duplicate filter key: {0}")]
    DuplicateKey(String),

    #[error("Filter '{key}' declares option '{option}' more than once")]
    DuplicateOption { key: String, option: String },

    #[error("Filter '{key}' has no option for its select-all id '{sentinel}'")]
    MissingSentinel { key: String, sentinel: String },

    #[error("Filter '{key}' has a default '{value}' that is not one of its options")]
    UnknownDefault { key: String, value: String },

    #[error("Filter '{0}' has an empty default selection")]
    EmptyDefault(String),

    #[error("Filter '{key}' repeats '{value}' in its default selection")]
    DuplicateDefault { key: String, value: String },

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
