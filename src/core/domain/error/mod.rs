use thiserror::Error;

/// The main error type for XtremIO client operations.
///
/// Every fallible call in the crate surfaces one of these variants to its
/// immediate caller. Nothing is retried and nothing is swallowed into an
/// empty result.
#[derive(Error, Debug)]
pub enum XtremioError {
    /// Network or TLS failure, a non-2xx status, or a body that is not JSON.
    ///
    /// # Fields
    /// * `0` - A description of what went wrong on the wire
    #[error("Transport error: {0}")]
    Transport(String),

    /// The array answered with JSON that does not have the expected envelope
    /// (list body that is not an object of arrays, detail body without
    /// `content`, records without `name`/`href`).
    ///
    /// # Fields
    /// * `0` - A description of the shape violation
    #[error("Unexpected response: {0}")]
    Response(String),

    /// A detail record lacks a key required by the variant being built.
    ///
    /// # Fields
    /// * `resource_type` - The API resource type being constructed
    /// * `field` - The missing detail key
    #[error("Missing field '{field}' in {resource_type} detail record")]
    MissingField {
        resource_type: String,
        field: String,
    },

    /// No cluster matched the name or id given to `set_active_scope`.
    ///
    /// # Fields
    /// * `0` - The identifier that failed to resolve
    #[error("No cluster matches '{0}'")]
    ScopeResolution(String),

    /// Represents client configuration failures
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl XtremioError {
    pub(crate) fn missing_field(resource_type: &str, field: &str) -> Self {
        XtremioError::MissingField {
            resource_type: resource_type.to_string(),
            field: field.to_string(),
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with an XtremioError
pub type XtremioResult<T> = Result<T, XtremioError>;
