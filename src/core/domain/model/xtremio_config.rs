//! Client-side settings applied once when the client is built.

use crate::core::domain::error::ValidationError;
use std::time::Duration;

/// Token-bucket settings for outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained request rate.
    pub requests_per_second: u32,
    /// Requests allowed back to back before pacing starts.
    pub burst_size: u32,
}

/// Settings for an [`XtremioClient`](crate::XtremioClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XtremioConfig {
    /// Accept self-signed or otherwise unverifiable TLS certificates.
    ///
    /// Defaults to `true`: arrays ship with self-signed certificates.
    pub accept_invalid_certs: bool,
    /// Per-request timeout. `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
    /// Optional request pacing. Requests are delayed, never retried.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for XtremioConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            request_timeout: None,
            rate_limit: None,
        }
    }
}

impl XtremioConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rl) = self.rate_limit {
            if rl.requests_per_second == 0 || rl.burst_size == 0 {
                return Err(ValidationError::Field {
                    field: "rate_limit".to_string(),
                    message: "Rate and burst must both be greater than zero".to_string(),
                });
            }
        }
        if self.request_timeout == Some(Duration::ZERO) {
            return Err(ValidationError::Field {
                field: "request_timeout".to_string(),
                message: "Timeout cannot be zero".to_string(),
            });
        }
        Ok(())
    }
}
