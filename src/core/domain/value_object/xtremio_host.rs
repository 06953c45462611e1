use crate::core::domain::error::ValidationError;

const MAX_HOSTNAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// A validated XtremIO management server (XMS) address.
///
/// Accepts DNS names and IPv4 literals, optionally followed by `:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XtremioHost(String);

impl XtremioHost {
    /// Creates a new host without validation.
    pub(crate) fn new_unchecked(host: String) -> Self {
        Self(host)
    }

    /// Validates and wraps a host address.
    pub fn new(host: impl Into<String>) -> Result<Self, ValidationError> {
        let host = host.into();
        validate_host(&host)?;
        Ok(Self::new_unchecked(host))
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    let well_formed = (1..=MAX_LABEL_LENGTH).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-');

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::Format(format!(
            "Invalid host label '{}': expected 1-{} alphanumerics or inner hyphens",
            label, MAX_LABEL_LENGTH
        )))
    }
}

/// Validates a host address (`name` or `name:port`).
pub(crate) fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }

    let name = match host.rsplit_once(':') {
        Some((name, port)) => {
            match port.parse::<u16>() {
                Ok(p) if p != 0 => {}
                _ => {
                    return Err(ValidationError::Format(format!(
                        "Invalid port suffix '{}'",
                        port
                    )));
                }
            }
            name
        }
        None => host,
    };

    if name.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "Host length exceeds maximum of {} characters",
            MAX_HOSTNAME_LENGTH
        )));
    }

    for label in name.split('.') {
        validate_label(label)?;
    }

    Ok(())
}
