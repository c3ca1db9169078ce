use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Settings request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SlotError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SlotError::ApiError(_) => ErrorSeverity::Medium,
            SlotError::IoError(_) => ErrorSeverity::Critical,
            SlotError::SerializationError(_) => ErrorSeverity::High,
            SlotError::TomlError(_) => ErrorSeverity::High,
            SlotError::ConfigError { .. } => ErrorSeverity::High,
            SlotError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SlotError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SlotError::ApiError(_) => {
                "Check that the settings endpoint is reachable and retry".to_string()
            }
            SlotError::IoError(_) => {
                "Check that the settings file exists and is readable".to_string()
            }
            SlotError::SerializationError(_) => {
                "Check that the settings document contains slotBaseBonus and slotStepBonus"
                    .to_string()
            }
            SlotError::TomlError(_) => {
                "Check the settings file for TOML syntax errors".to_string()
            }
            SlotError::ConfigError { .. } => {
                "Review the configuration values and correct them".to_string()
            }
            SlotError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for '{}'", field)
            }
            SlotError::MissingConfigError { field } => {
                format!("Supply a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SlotError::ApiError(_) => "Could not reach the slot pricing settings".to_string(),
            SlotError::IoError(_) => "Could not read the slot pricing settings file".to_string(),
            SlotError::SerializationError(_) | SlotError::TomlError(_) => {
                "The slot pricing settings could not be understood".to_string()
            }
            SlotError::ConfigError { message } => message.clone(),
            SlotError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            SlotError::MissingConfigError { field } => format!("{} is required", field),
        }
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
