mod xtremio_host;
mod xtremio_password;
mod xtremio_url;
mod xtremio_username;

pub use xtremio_host::XtremioHost;
pub use xtremio_password::XtremioPassword;
pub use xtremio_url::XtremioUrl;
pub use xtremio_username::XtremioUsername;

// Re-export validation functions for internal use
pub(crate) use xtremio_host::validate_host;
pub(crate) use xtremio_password::validate_password;
pub(crate) use xtremio_username::validate_username;
