use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse launch plan: {0}")]
    Plan(#[from] toml::de::Error),

    #[error("Unknown creator: '{name}' (expected ConcreteCreator1 or ConcreteCreator2)")]
    UnknownCreator { name: String },

    #[error("Launch plan has no creators to launch")]
    EmptyPlan,

    #[error("Invalid log level: '{level}'")]
    InvalidLogLevel { level: String },
}

impl AppError {
    pub fn unknown_creator(name: impl Into<String>) -> Self {
        Self::UnknownCreator { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
