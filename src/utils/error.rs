use thiserror::Error;

/// Failure raised by a pricing collaborator. The handler passes it through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Order rejected by pricing service (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Pricing service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Malformed pricing response: {message}")]
    MalformedResponse { message: String },
}

impl PricingError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid order request: {message}")]
    InvalidRequest { message: String },

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OrderError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }

    /// The collaborator failure, if this error came from the pricing service.
    pub fn pricing_failure(&self) -> Option<&PricingError> {
        match self {
            Self::Pricing(e) => Some(e),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidRequest { message } => format!("The order could not be read: {}", message),
            Self::Pricing(PricingError::Rejected { message, .. }) => {
                format!("The shop refused the order: {}", message)
            }
            Self::Pricing(PricingError::Unavailable { .. }) => {
                "The shop could not be reached, try again later".to_string()
            }
            Self::Pricing(PricingError::MalformedResponse { .. }) => {
                "The shop answered with something that is not a price".to_string()
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            Self::IoError(_) => self.to_string(),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRequest { .. } => 2,
            Self::Pricing(_) => 3,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => 1,
            Self::IoError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;

pub type PricingResult<T> = std::result::Result<T, PricingError>;
