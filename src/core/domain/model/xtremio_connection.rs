use crate::core::domain::{model::credentials::Credentials, value_object::XtremioUrl};

/// Where and as whom the client talks to the array.
#[derive(Debug, Clone)]
pub struct XtremioConnection {
    url: XtremioUrl,
    credentials: Credentials,
}

impl XtremioConnection {
    pub fn new(url: XtremioUrl, credentials: Credentials) -> Self {
        Self { url, credentials }
    }

    pub fn url(&self) -> &XtremioUrl {
        &self.url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
