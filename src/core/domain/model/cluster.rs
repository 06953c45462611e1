use crate::core::domain::{
    error::XtremioResult,
    factory,
    model::{
        brick::Brick,
        dae::{Dae, DaeController, DaePsu},
        resource_identity::ResourceIdentity,
        resource_type,
        slot::Slot,
        ssd::Ssd,
        volume::Volume,
        xtremio_object::{XtremioObject, XtremioResource},
    },
};
use crate::core::infrastructure::query::QueryFilters;
use async_trait::async_trait;
use std::fmt;

/// A cluster managed by the XMS.
///
/// Every child listing is narrowed with this cluster's `sys_id` only.
/// Children without a dedicated variant come back as
/// [`XtremioObject::Generic`].
#[derive(Debug, Clone)]
pub struct Cluster {
    identity: ResourceIdentity,
}

impl Cluster {
    fn child_filters(&self) -> QueryFilters {
        self.identity.child_filters(None)
    }

    async fn children(&self, resource_type: &str) -> XtremioResult<Vec<XtremioObject>> {
        factory::list_objects(self.identity.client(), resource_type, &self.child_filters()).await
    }

    pub async fn bricks(&self) -> XtremioResult<Vec<Brick>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn ssds(&self) -> XtremioResult<Vec<Ssd>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn slots(&self) -> XtremioResult<Vec<Slot>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn infiniband_switches(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::INFINIBAND_SWITCHES).await
    }

    pub async fn bbus(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::BBUS).await
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

    pub async fn volumes(&self) -> XtremioResult<Vec<Volume>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn initiator_groups(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::INITIATOR_GROUPS).await
    }

    pub async fn initiators(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::INITIATORS).await
    }

    pub async fn snapshots(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::SNAPSHOTS).await
    }

    pub async fn snapshot_sets(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::SNAPSHOT_SETS).await
    }

    pub async fn consistency_groups(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::CONSISTENCY_GROUPS).await
    }

    pub async fn lun_maps(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::LUN_MAPS).await
    }

    pub async fn tags(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::TAGS).await
    }

    pub async fn targets(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::TARGETS).await
    }

    pub async fn target_groups(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.children(resource_type::TARGET_GROUPS).await
    }
}

#[async_trait]
impl XtremioResource for Cluster {
    const RESOURCE_TYPE: &'static str = resource_type::CLUSTERS;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        identity.hydrate().await?;
        Ok(Self { identity })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XtremioCluster: ID={}", self.identity.object_id())
    }
}
