#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Device error: {0}")]
    Device(#[from] tapo::Error),

    #[error("device failed to power {0} for an unknown reason")]
    PowerStateMismatch(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Device(_) => 4,
            AppError::PowerStateMismatch(_) => 3,
            AppError::InvalidInput(_) => 2,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Device(_) => "device",
            AppError::PowerStateMismatch(_) => "power_state_mismatch",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        })
    }
}
