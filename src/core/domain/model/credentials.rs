use crate::core::domain::value_object::{XtremioPassword, XtremioUsername};

/// Basic-auth credentials for the XMS.
///
/// Opaque to the resource layer; only the transport reads them.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: XtremioUsername,
    password: XtremioPassword,
}

impl Credentials {
    pub fn new(username: XtremioUsername, password: XtremioPassword) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &XtremioUsername {
        &self.username
    }

    pub fn password(&self) -> &XtremioPassword {
        &self.password
    }
}
