//! The closed set of typed resource objects.

use crate::core::domain::{
    error::XtremioResult,
    model::{
        brick::Brick,
        cluster::Cluster,
        dae::{Dae, DaeController, DaePsu},
        resource_identity::ResourceIdentity,
        slot::Slot,
        ssd::Ssd,
        volume::Volume,
    },
};
use async_trait::async_trait;
use std::fmt;

/// A typed variant bound to one API resource type.
///
/// Building a variant always performs exactly one detail fetch, from which
/// the system id and the variant's own fields are read.
#[async_trait]
pub trait XtremioResource: Sized + Send + Into<XtremioObject> + 'static {
    /// The resource type name this variant is built for.
    const RESOURCE_TYPE: &'static str;

    /// Fetches the detail record and builds the variant from it.
    ///
    /// # Errors
    /// Propagates the detail fetch failure, or `MissingField` when the detail
    /// lacks a field this variant requires.
    async fn from_identity(identity: ResourceIdentity) -> XtremioResult<Self>;

    fn identity(&self) -> &ResourceIdentity;
}

/// A resource object as produced by the factory.
///
/// `Generic` is used for every resource type without a dedicated variant;
/// it carries only the identity and never fetched its detail record.
#[derive(Debug, Clone)]
pub enum XtremioObject {
    Cluster(Cluster),
    Brick(Brick),
    Ssd(Ssd),
    Slot(Slot),
    Dae(Dae),
    DaeController(DaeController),
    DaePsu(DaePsu),
    Volume(Volume),
    Generic(ResourceIdentity),
}

impl XtremioObject {
    pub fn identity(&self) -> &ResourceIdentity {
        match self {
            XtremioObject::Cluster(o) => o.identity(),
            XtremioObject::Brick(o) => o.identity(),
            XtremioObject::Ssd(o) => o.identity(),
            XtremioObject::Slot(o) => o.identity(),
            XtremioObject::Dae(o) => o.identity(),
            XtremioObject::DaeController(o) => o.identity(),
            XtremioObject::DaePsu(o) => o.identity(),
            XtremioObject::Volume(o) => o.identity(),
            XtremioObject::Generic(identity) => identity,
        }
    }

    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            XtremioObject::Cluster(_) => "cluster",
            XtremioObject::Brick(_) => "brick",
            XtremioObject::Ssd(_) => "ssd",
            XtremioObject::Slot(_) => "slot",
            XtremioObject::Dae(_) => "dae",
            XtremioObject::DaeController(_) => "dae-controller",
            XtremioObject::DaePsu(_) => "dae-psu",
            XtremioObject::Volume(_) => "volume",
            XtremioObject::Generic(_) => "generic",
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, XtremioObject::Generic(_))
    }
}

impl fmt::Display for XtremioObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XtremioObject::Cluster(o) => fmt::Display::fmt(o, f),
            XtremioObject::Brick(o) => fmt::Display::fmt(o, f),
            XtremioObject::Ssd(o) => fmt::Display::fmt(o, f),
            XtremioObject::Slot(o) => fmt::Display::fmt(o, f),
            XtremioObject::Dae(o) => fmt::Display::fmt(o, f),
            XtremioObject::DaeController(o) => fmt::Display::fmt(o, f),
            XtremioObject::DaePsu(o) => fmt::Display::fmt(o, f),
            XtremioObject::Volume(o) => fmt::Display::fmt(o, f),
            XtremioObject::Generic(o) => fmt::Display::fmt(o, f),
        }
    }
}

impl From<Cluster> for XtremioObject {
    fn from(value: Cluster) -> Self {
        XtremioObject::Cluster(value)
    }
}

impl From<Brick> for XtremioObject {
    fn from(value: Brick) -> Self {
        XtremioObject::Brick(value)
    }
}

impl From<Ssd> for XtremioObject {
    fn from(value: Ssd) -> Self {
        XtremioObject::Ssd(value)
    }
}

impl From<Slot> for XtremioObject {
    fn from(value: Slot) -> Self {
        XtremioObject::Slot(value)
    }
}

impl From<Dae> for XtremioObject {
    fn from(value: Dae) -> Self {
        XtremioObject::Dae(value)
    }
}

impl From<DaeController> for XtremioObject {
    fn from(value: DaeController) -> Self {
        XtremioObject::DaeController(value)
    }
}

impl From<DaePsu> for XtremioObject {
    fn from(value: DaePsu) -> Self {
        XtremioObject::DaePsu(value)
    }
}

impl From<Volume> for XtremioObject {
    fn from(value: Volume) -> Self {
        XtremioObject::Volume(value)
    }
}

/// Renders an optional system id for display.
pub(crate) fn display_sys_id(identity: &ResourceIdentity) -> &str {
    identity.system_id().unwrap_or("-")
}
