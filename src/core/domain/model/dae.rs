//! Disk-array enclosures and their field-replaceable parts.

use crate::core::domain::{
    error::XtremioResult,
    factory,
    model::{
        brick::Brick,
        resource_identity::{ResourceIdentity, required_field},
        resource_type,
        slot::Slot,
        ssd::Ssd,
        xtremio_object::{XtremioResource, display_sys_id},
    },
};
use crate::core::infrastructure::query::QueryFilters;
use async_trait::async_trait;
use std::fmt;

/// A disk-array enclosure (DAE).
///
/// Child listings are narrowed with `sys_id` and this enclosure's `jbod_id`.
#[derive(Debug, Clone)]
pub struct Dae {
    identity: ResourceIdentity,
    jbod_id: String,
}

impl Dae {
    /// The enclosure id from the `jbod-id` detail field.
    pub fn jbod_id(&self) -> &str {
        &self.jbod_id
    }

    fn child_filters(&self) -> QueryFilters {
        self.identity
            .child_filters(Some(("jbod_id", self.jbod_id.as_str())))
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

    pub async fn daes(&self) -> XtremioResult<Vec<Dae>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn dae_controllers(&self) -> XtremioResult<Vec<DaeController>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }

    pub async fn dae_psus(&self) -> XtremioResult<Vec<DaePsu>> {
        factory::list_typed(self.identity.client(), &self.child_filters()).await
    }
}

#[async_trait]
impl XtremioResource for Dae {
    const RESOURCE_TYPE: &'static str = resource_type::DAES;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        let detail = identity.hydrate().await?;
        let jbod_id = required_field(&detail, Self::RESOURCE_TYPE, "jbod-id")?;
        Ok(Self { identity, jbod_id })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for Dae {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XtremioDAE: Cluster id: {} DAE id: {}",
            display_sys_id(&self.identity),
            self.jbod_id
        )
    }
}

/// A controller (LCC) inside a DAE.
#[derive(Debug, Clone)]
pub struct DaeController {
    identity: ResourceIdentity,
    controller_id: String,
}

impl DaeController {
    /// The `jbod-controller-id` detail field.
    pub fn controller_id(&self) -> &str {
        &self.controller_id
    }
}

#[async_trait]
impl XtremioResource for DaeController {
    const RESOURCE_TYPE: &'static str = resource_type::DAE_CONTROLLERS;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        let detail = identity.hydrate().await?;
        let controller_id = required_field(&detail, Self::RESOURCE_TYPE, "jbod-controller-id")?;
        Ok(Self {
            identity,
            controller_id,
        })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for DaeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XtremioDAEController: Cluster id: {} DAEcon id: {}",
            display_sys_id(&self.identity),
            self.controller_id
        )
    }
}

/// A power supply inside a DAE.
#[derive(Debug, Clone)]
pub struct DaePsu {
    identity: ResourceIdentity,
    psu_id: String,
}

impl DaePsu {
    /// The `jbod-psu-id` detail field.
    pub fn psu_id(&self) -> &str {
        &self.psu_id
    }
}

#[async_trait]
impl XtremioResource for DaePsu {
    const RESOURCE_TYPE: &'static str = resource_type::DAE_PSUS;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        let detail = identity.hydrate().await?;
        let psu_id = required_field(&detail, Self::RESOURCE_TYPE, "jbod-psu-id")?;
        Ok(Self { identity, psu_id })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for DaePsu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XtremioDAEPSU: Cluster id: {} DAEPSU id: {}",
            display_sys_id(&self.identity),
            self.psu_id
        )
    }
}
