use thiserror::Error;

/// cleanquote error types
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Failed to parse JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog failed to load or is inconsistent
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Input rejected by the estimator
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Lead payload has invalid fields
    #[error("lead error: {}", join_field_errors(.0))]
    Lead(Vec<LeadFieldError>),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for cleanquote
pub type Result<T> = std::result::Result<T, QuoteError>;

/// A provided value that cannot be priced.
///
/// Distinct from an incomplete request: these are values the caller did
/// supply, so the caller has to correct them before a price is shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unknown service '{0}'")]
    UnknownService(String),

    #[error("unknown frequency '{0}'")]
    UnknownFrequency(String),

    #[error("square footage {value} is outside the allowed range {min}-{max} sq ft")]
    SquareFeetOutOfRange { value: i64, min: u32, max: u32 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    RoomCountOutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("{field} must be a whole number (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },
}

/// One failing field of a lead draft
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadFieldError {
    #[error("{0}: This field is required")]
    Required(&'static str),

    #[error("email: Please enter a valid email address")]
    Email,

    #[error("phone: Please enter a valid phone number")]
    Phone,

    #[error("name: Please enter a valid name")]
    Name,
}

fn join_field_errors(errors: &[LeadFieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
