//! Object Factory: picks the typed variant for a resource type name.

use crate::core::{
    domain::{
        error::XtremioResult,
        model::{
            brick::Brick,
            cluster::Cluster,
            dae::{Dae, DaeController, DaePsu},
            resource_identity::{ResourceIdentity, ResourceRecord},
            slot::Slot,
            ssd::Ssd,
            volume::Volume,
            xtremio_object::{XtremioObject, XtremioResource},
        },
    },
    infrastructure::{api_client::ApiClient, query::QueryFilters},
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type BuildFuture = Pin<Box<dyn Future<Output = XtremioResult<XtremioObject>> + Send>>;
type Constructor = fn(ResourceIdentity) -> BuildFuture;

fn construct<T: XtremioResource>(identity: ResourceIdentity) -> BuildFuture {
    Box::pin(async move { T::from_identity(identity).await.map(Into::into) })
}

/// Every resource type with a dedicated variant, and how to build it.
///
/// Keys are distinct literals, so lookup order is irrelevant.
static REGISTRY: &[(&str, Constructor)] = &[
    (Cluster::RESOURCE_TYPE, construct::<Cluster>),
    (Brick::RESOURCE_TYPE, construct::<Brick>),
    (Ssd::RESOURCE_TYPE, construct::<Ssd>),
    (Slot::RESOURCE_TYPE, construct::<Slot>),
    (Dae::RESOURCE_TYPE, construct::<Dae>),
    (DaeController::RESOURCE_TYPE, construct::<DaeController>),
    (DaePsu::RESOURCE_TYPE, construct::<DaePsu>),
    (Volume::RESOURCE_TYPE, construct::<Volume>),
];

/// Resource type names that map to a dedicated variant.
pub fn registered_types() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(resource_type, _)| *resource_type)
}

/// Builds the object for one record of `resource_type`.
///
/// Unknown resource types never fail: they yield
/// [`XtremioObject::Generic`] without touching the network. Known types
/// perform their detail fetch, whose failure is returned as is.
pub async fn build(
    resource_type: &str,
    record: ResourceRecord,
    client: &Arc<ApiClient>,
) -> XtremioResult<XtremioObject> {
    let identity = ResourceIdentity::from_record(record, Arc::clone(client))?;

    let object = match REGISTRY.iter().find(|(known, _)| *known == resource_type) {
        Some((_, construct)) => construct(identity).await?,
        None => XtremioObject::Generic(identity),
    };

    tracing::debug!(
        resource_type = resource_type,
        object_id = object.identity().object_id(),
        kind = object.kind(),
        "built resource object"
    );
    Ok(object)
}

/// Lists `resource_type` and builds every record, failing on the first error.
pub(crate) async fn list_objects(
    client: &Arc<ApiClient>,
    resource_type: &str,
    filters: &QueryFilters,
) -> XtremioResult<Vec<XtremioObject>> {
    let records = client.list_records(resource_type, filters).await?;
    let mut objects = Vec::with_capacity(records.len());
    for record in records {
        objects.push(build(resource_type, record, client).await?);
    }
    Ok(objects)
}

/// Lists `T::RESOURCE_TYPE` and builds every record as `T`.
pub(crate) async fn list_typed<T: XtremioResource>(
    client: &Arc<ApiClient>,
    filters: &QueryFilters,
) -> XtremioResult<Vec<T>> {
    let records = client.list_records(T::RESOURCE_TYPE, filters).await?;
    let mut objects = Vec::with_capacity(records.len());
    for record in records {
        let identity = ResourceIdentity::from_record(record, Arc::clone(client))?;
        objects.push(T::from_identity(identity).await?);
    }
    Ok(objects)
}
