//! The identity every resource object carries, derived from its list record.

use crate::core::{
    domain::error::{XtremioError, XtremioResult},
    infrastructure::{api_client::ApiClient, query::QueryFilters},
};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// An untyped resource record as the array returns it.
pub type ResourceRecord = Map<String, Value>;

/// Detail key holding the owning cluster's id.
pub(crate) const SYSTEM_ID_KEY: &str = "sys-id";

/// Name, locator and derived ids of one resource.
///
/// `object_type` and `object_id` are the last two path segments of `href`.
/// `system_id` is only known once the object's own detail record has been
/// fetched, and stays `None` when that record has no `sys-id`.
#[derive(Clone)]
pub struct ResourceIdentity {
    raw: ResourceRecord,
    name: String,
    href: String,
    object_id: String,
    object_type: String,
    system_id: Option<String>,
    client: Arc<ApiClient>,
}

impl ResourceIdentity {
    /// Derives an identity from a list record without any network call.
    ///
    /// # Errors
    /// `XtremioError::Response` if the record lacks a string `name` or `href`,
    /// or the href has fewer than two path segments.
    pub(crate) fn from_record(raw: ResourceRecord, client: Arc<ApiClient>) -> XtremioResult<Self> {
        let name = record_str(&raw, "name")?;
        let href = record_str(&raw, "href")?;
        let (object_type, object_id) = split_href(&href)?;

        Ok(Self {
            raw,
            name,
            href,
            object_id,
            object_type,
            system_id: None,
            client,
        })
    }

    /// Fetches this object's detail record and takes `system_id` from it.
    ///
    /// Returns the detail so variants can read their own fields from the
    /// same fetch.
    pub(crate) async fn hydrate(&mut self) -> XtremioResult<ResourceRecord> {
        let detail = self.details().await?;
        self.system_id = detail.get(SYSTEM_ID_KEY).and_then(field_text);
        Ok(detail)
    }

    /// Fetches the current detail record of this resource.
    pub async fn details(&self) -> XtremioResult<ResourceRecord> {
        self.details_with(&QueryFilters::new()).await
    }

    /// Fetches the detail record with additional query filters.
    pub async fn details_with(&self, filters: &QueryFilters) -> XtremioResult<ResourceRecord> {
        self.client.fetch_detail(&self.href, filters).await
    }

    /// The list record this identity was derived from, verbatim.
    pub fn raw(&self) -> &ResourceRecord {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn system_id(&self) -> Option<&str> {
        self.system_id.as_deref()
    }

    pub(crate) fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Filters that narrow a child listing to this container.
    ///
    /// Always carries `sys_id` when known, plus the container's own key.
    pub(crate) fn child_filters(&self, scope: Option<(&str, &str)>) -> QueryFilters {
        let mut filters = QueryFilters::new();
        if let Some(system_id) = &self.system_id {
            filters.insert("sys_id".to_string(), system_id.clone());
        }
        if let Some((key, value)) = scope {
            filters.insert(key.to_string(), value.to_string());
        }
        filters
    }
}

impl fmt::Debug for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceIdentity")
            .field("name", &self.name)
            .field("href", &self.href)
            .field("object_id", &self.object_id)
            .field("object_type", &self.object_type)
            .field("system_id", &self.system_id)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XtremioObject: {}", self.object_type)
    }
}

fn record_str(record: &ResourceRecord, key: &str) -> XtremioResult<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| XtremioError::Response(format!("record has no string '{}'", key)))
}

/// Splits `.../{type}/{id}` into `(type, id)`.
pub(crate) fn split_href(href: &str) -> XtremioResult<(String, String)> {
    let mut segments = href.trim_end_matches('/').rsplit('/');
    match (segments.next(), segments.next()) {
        (Some(id), Some(object_type)) if !id.is_empty() && !object_type.is_empty() => {
            Ok((object_type.to_string(), id.to_string()))
        }
        _ => Err(XtremioError::Response(format!(
            "href '{}' does not end in <type>/<id>",
            href
        ))),
    }
}

/// Renders a detail value as text: strings verbatim, other values as
/// compact JSON, `null` as absent.
pub(crate) fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Reads a field a variant cannot be built without.
pub(crate) fn required_field(
    detail: &ResourceRecord,
    resource_type: &str,
    key: &str,
) -> XtremioResult<String> {
    detail
        .get(key)
        .and_then(field_text)
        .ok_or_else(|| XtremioError::missing_field(resource_type, key))
}
