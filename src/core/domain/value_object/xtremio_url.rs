use crate::core::domain::{error::ValidationError, value_object::XtremioHost};
use url::Url;

/// Path of the typed-resource endpoint on every XMS.
pub(crate) const API_TYPES_PATH: &str = "/api/json/v2/types/";

const MAX_URL_LENGTH: usize = 2083;

/// A validated base URL of the XtremIO REST endpoint.
///
/// Always ends with a `/`, so resource type names can be joined onto it.
///
/// # Examples
///
/// ```
/// use xtremio_client::{XtremioHost, XtremioUrl};
///
/// let host = XtremioHost::new("xms.example.com").unwrap();
/// let url = XtremioUrl::for_host(&host).unwrap();
/// assert_eq!(url.as_str(), "https://xms.example.com/api/json/v2/types/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XtremioUrl(Url);

impl XtremioUrl {
    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: Url) -> Self {
        Self(url)
    }

    /// Builds `https://{host}/api/json/v2/types/`.
    pub fn for_host(host: &XtremioHost) -> Result<Self, ValidationError> {
        Self::from_base(&format!("https://{}{}", host.as_str(), API_TYPES_PATH))
    }

    /// Uses an explicit endpoint base (for proxies or non-standard setups).
    pub fn from_base(base: &str) -> Result<Self, ValidationError> {
        let url = validate_url(base)?;
        Ok(Self::new_unchecked(url))
    }

    /// Returns the URL of the list endpoint for `resource_type`.
    pub fn resource(&self, resource_type: &str) -> Result<Url, ValidationError> {
        if resource_type.is_empty() || resource_type.contains(['/', '?', '#']) {
            return Err(ValidationError::Field {
                field: "resource_type".to_string(),
                message: format!("'{}' is not a resource type name", resource_type),
            });
        }
        self.0
            .join(resource_type)
            .map_err(|e| ValidationError::Format(format!("Invalid resource URL: {}", e)))
    }

    /// Resolves a resource `href` as returned by the array.
    ///
    /// Absolute hrefs are used literally; relative ones are resolved against
    /// this base.
    pub fn locate(&self, href: &str) -> Result<Url, ValidationError> {
        match Url::parse(href) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .0
                .join(href)
                .map_err(|e| ValidationError::Format(format!("Invalid href '{}': {}", href, e))),
            Err(e) => Err(ValidationError::Format(format!(
                "Invalid href '{}': {}",
                href, e
            ))),
        }
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validates an endpoint base URL, normalising it to end with `/`.
pub(crate) fn validate_url(url: &str) -> Result<Url, ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let mut parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !matches!(parsed.scheme(), "https" | "http") {
        return Err(ValidationError::ConstraintViolation(
            "Invalid scheme. Must be one of: https, http".to_string(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::ConstraintViolation(
            "URL must contain a host".to_string(),
        ));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query or fragment".to_string(),
        ));
    }

    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }

    Ok(parsed)
}
