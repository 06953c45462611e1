use crate::core::domain::{
    error::XtremioResult,
    model::{
        resource_identity::{ResourceIdentity, required_field},
        resource_type,
        xtremio_object::{XtremioResource, display_sys_id},
    },
};
use async_trait::async_trait;
use std::fmt;

/// A solid-state drive.
#[derive(Debug, Clone)]
pub struct Ssd {
    identity: ResourceIdentity,
    ssd_id: String,
}

impl Ssd {
    /// The drive id from the `ssd-id` detail field.
    pub fn ssd_id(&self) -> &str {
        &self.ssd_id
    }
}

#[async_trait]
impl XtremioResource for Ssd {
    const RESOURCE_TYPE: &'static str = resource_type::SSDS;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        let detail = identity.hydrate().await?;
        let ssd_id = required_field(&detail, Self::RESOURCE_TYPE, "ssd-id")?;
        Ok(Self { identity, ssd_id })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for Ssd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XtremioSSD: Cluster id: {} Drive id: {}",
            display_sys_id(&self.identity),
            self.identity.object_id()
        )
    }
}
