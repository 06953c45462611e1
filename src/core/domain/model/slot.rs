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

/// A drive slot in a DAE.
#[derive(Debug, Clone)]
pub struct Slot {
    identity: ResourceIdentity,
    slot_num: String,
}

impl Slot {
    /// The `slot-num` detail field.
    pub fn slot_num(&self) -> &str {
        &self.slot_num
    }
}

#[async_trait]
impl XtremioResource for Slot {
    const RESOURCE_TYPE: &'static str = resource_type::SLOTS;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        let detail = identity.hydrate().await?;
        let slot_num = required_field(&detail, Self::RESOURCE_TYPE, "slot-num")?;
        Ok(Self { identity, slot_num })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XtremioSlot: Cluster id: {} Slot Num: {}",
            display_sys_id(&self.identity),
            self.slot_num
        )
    }
}
