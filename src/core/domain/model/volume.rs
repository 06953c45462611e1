use crate::core::domain::{
    error::{XtremioError, XtremioResult},
    factory,
    model::{
        resource_identity::{ResourceIdentity, field_text},
        resource_type,
        xtremio_object::{XtremioObject, XtremioResource},
    },
};
use crate::core::infrastructure::query::QueryFilters;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Detail key listing the snapshots taken from a volume.
const DEST_SNAP_LIST_KEY: &str = "dest-snap-list";

/// Position of the snapshot index inside a `dest-snap-list` entry.
const SNAP_INDEX_POSITION: usize = 2;

/// A block volume.
#[derive(Debug, Clone)]
pub struct Volume {
    identity: ResourceIdentity,
}

impl Volume {
    /// Lists the snapshots derived from this volume.
    ///
    /// Re-fetches the volume's detail and issues one `snapshots` listing per
    /// `dest-snap-list` entry, filtered by that entry's index. Returns
    /// `Ok(None)` when the detail has no `dest-snap-list` at all, which is
    /// not the same as a volume with zero snapshots.
    pub async fn snapshots(&self) -> XtremioResult<Option<Vec<XtremioObject>>> {
        let detail = self.identity.details().await?;
        let entries = match detail.get(DEST_SNAP_LIST_KEY) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(XtremioError::Response(format!(
                    "{} of {} is not a list: {}",
                    DEST_SNAP_LIST_KEY,
                    self.identity.href(),
                    other
                )));
            }
        };

        let mut snapshots = Vec::new();
        for entry in entries {
            let index = snapshot_index(entry)?;
            let filters = QueryFilters::from([("index".to_string(), index)]);
            let found = factory::list_objects(
                self.identity.client(),
                resource_type::SNAPSHOTS,
                &filters,
            )
            .await?;
            snapshots.extend(found);
        }
        Ok(Some(snapshots))
    }
}

fn snapshot_index(entry: &Value) -> XtremioResult<String> {
    entry
        .as_array()
        .and_then(|tuple| tuple.get(SNAP_INDEX_POSITION))
        .and_then(field_text)
        .ok_or_else(|| {
            XtremioError::Response(format!(
                "{} entry has no snapshot index: {}",
                DEST_SNAP_LIST_KEY, entry
            ))
        })
}

#[async_trait]
impl XtremioResource for Volume {
    const RESOURCE_TYPE: &'static str = resource_type::VOLUMES;

    async fn from_identity(mut identity: ResourceIdentity) -> XtremioResult<Self> {
        identity.hydrate().await?;
        Ok(Self { identity })
    }

    fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XtremioVolume: {}", self.identity.name())
    }
}
