use crate::core::domain::{
    error::XtremioResult,
    factory,
    model::{
        dae::{Dae, DaeController, DaePsu},
        resource_identity::{ResourceIdentity, required_field},
        resource_type,
        slot::Slot,
        ssd::Ssd,
        xtremio_object::{XtremioObject, XtremioResource, display_sys_id},
    },
};
use crate::core::infrastructure::query::QueryFilters;
use async_trait::async_trait;
use std::fmt;

/// An X-Brick: a pair of storage controllers and their enclosure.
///
/// Child listings are narrowed with `sys_id` and this brick's `brick_id`.
#[derive(Debug, Clone)]
pub struct Brick {
    identity: ResourceIdentity,
    brick_id: String,
}

impl Brick {
    /// The `brick-id` detail field.
    pub fn brick_id(&self) -> &str {
        &self.brick_id
    }

    fn child_filters(&self) -> QueryFilters {
        self.identity
            .child_filters(Some(("brick_id", self.brick_id.as_str())))
    }

    async fn children(&self, resource_type: &str) -> XtremioResult<Vec<XtremioObject>> {
        factory::list_objects(self.identity.client(), resource_type, &self.child_filters()).await
    }

    pub async fn ssds(&self) -> XtremioResult<Vec<Ssd>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn slots(&self) -> XtremioResult<Vec<Slot>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn daes(&self) -> XtremioResult<Vec<Dae>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn dae_controllers(&self) -> XtremioResult<Vec<DaeController>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn dae_psus(&self) -> XtremioResult<Vec<DaePsu>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn local_disks(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::LOCAL_DISKS).await
    }

    pub async fn storage_controllers(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::STORAGE_CONTROLLERS).await
    }

    pub async fn storage_controller_psus(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::STORAGE_CONTROLLER_PSUS).await
    }
}

#[async_trait]
impl XtremioResource for Brick {
    const RESOURCE_TYPE: &'static str = resource_type::BRICKS;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        let detail = identity.hydrate().await?;
        let brick_id = required_field(&detail, Self::RESOURCE_TYPE, "brick-id")?;
        Ok(Self { identity, brick_id })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for Brick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XtremioBrick: Cluster id: {} Brick id: {}",
            display_sys_id(&self.identity),
            self.brick_id
        )
    }
}
