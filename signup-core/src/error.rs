use std::io;

use thiserror::Error;

/// Rejections raised by registry mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity '{activity}' not found")]
    ActivityNotFound { activity: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: String, email: String },

    #[error("{email} is not registered for {activity}")]
    NotEnrolled { activity: String, email: String },

    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: String, capacity: u32 },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Failures while loading or validating the registry seed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate activity in seed: {0}")]
    DuplicateActivity(String),

    #[error("Duplicate participant {email} in seed for {activity}")]
    DuplicateParticipant { activity: String, email: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
