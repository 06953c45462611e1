//! Resource Client: turns resource-type names and filters into transport calls
//! and unwraps the JSON envelopes the array answers with.

use crate::core::{
    domain::{
        error::{ValidationError, XtremioError, XtremioResult},
        model::{
            resource_identity::ResourceRecord, xtremio_config::XtremioConfig,
            xtremio_connection::XtremioConnection,
        },
    },
    infrastructure::{
        query::{QueryFilters, request_params},
        transport::{HttpTransport, Transport},
    },
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::num::NonZeroU32;
use tokio::sync::RwLock;
use url::Url;

/// Envelope key that carries pagination links rather than records.
const LINKS_KEY: &str = "links";

/// Body of a detail response; the record sits under `content`.
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    content: ResourceRecord,
}

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

fn truncate_for_log(body: &str) -> String {
    if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    }
}

fn non_zero(field: &str, value: u32) -> Result<NonZeroU32, ValidationError> {
    NonZeroU32::new(value).ok_or_else(|| ValidationError::Field {
        field: field.to_string(),
        message: "Must be greater than zero".to_string(),
    })
}

/// Client for the typed-resource endpoint of one XMS.
///
/// Stateless per call except for the optional active scope: a cluster id
/// that, once set, is merged into the parameters of every list and detail
/// request under `cluster-id`.
pub struct ApiClient {
    transport: Box<dyn Transport>,
    connection: XtremioConnection,
    active_scope: RwLock<Option<String>>,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("connection", &self.connection)
            .field("rate_limited", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client that speaks HTTPS through `reqwest`.
    ///
    /// # Errors
    /// Returns `XtremioError::Transport` if the HTTP client cannot be built,
    /// or `XtremioError::Validation` for an invalid configuration.
    pub fn new(connection: XtremioConnection, config: &XtremioConfig) -> XtremioResult<Self> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(connection, Box::new(transport), config)
    }

    /// Creates a client on top of an arbitrary transport.
    pub fn with_transport(
        connection: XtremioConnection,
        transport: Box<dyn Transport>,
        config: &XtremioConfig,
    ) -> XtremioResult<Self> {
        config.validate()?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let rate = non_zero("requests_per_second", rl.requests_per_second)?;
                let burst = non_zero("burst_size", rl.burst_size)?;
                Some(RateLimiter::direct(Quota::per_second(rate).allow_burst(burst)))
            }
            None => None,
        };

        Ok(Self {
            transport,
            connection,
            active_scope: RwLock::new(None),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &XtremioConnection {
        &self.connection
    }

    /// Returns the cluster id currently merged into every request, if any.
    pub async fn active_scope(&self) -> Option<String> {
        self.active_scope.read().await.clone()
    }

    pub(crate) async fn set_active_scope(&self, cluster_id: String) {
        tracing::info!(cluster_id = %cluster_id, "active scope set");
        *self.active_scope.write().await = Some(cluster_id);
    }

    pub(crate) async fn clear_active_scope(&self) {
        tracing::info!("active scope cleared");
        *self.active_scope.write().await = None;
    }

    /// Lists the raw records of `resource_type`.
    ///
    /// Every array in the response envelope except `links` is concatenated
    /// into the result.
    ///
    /// # Errors
    /// `Transport` for wire failures and non-2xx answers, `Response` for an
    /// envelope that is not an object of arrays of objects.
    pub async fn list_records(
        &self,
        resource_type: &str,
        filters: &QueryFilters,
    ) -> XtremioResult<Vec<ResourceRecord>> {
        let scope = self.active_scope().await;
        self.list_with_scope(resource_type, filters, scope.as_deref())
            .await
    }

    /// Lists raw records ignoring the active scope.
    ///
    /// Used when resolving a new scope, which must see every cluster.
    pub(crate) async fn list_records_unscoped(
        &self,
        resource_type: &str,
        filters: &QueryFilters,
    ) -> XtremioResult<Vec<ResourceRecord>> {
        self.list_with_scope(resource_type, filters, None).await
    }

    /// Fetches the detail record behind `href`, returning its `content`.
    ///
    /// # Errors
    /// `Transport` for wire failures and non-2xx answers, `Response` when the
    /// body carries no `content` object.
    pub async fn fetch_detail(
        &self,
        href: &str,
        filters: &QueryFilters,
    ) -> XtremioResult<ResourceRecord> {
        let url = self.connection.url().locate(href)?;
        let scope = self.active_scope().await;
        let body = self.get_json(url, filters, scope.as_deref()).await?;
        unwrap_detail_envelope(href, body)
    }

    async fn list_with_scope(
        &self,
        resource_type: &str,
        filters: &QueryFilters,
        scope: Option<&str>,
    ) -> XtremioResult<Vec<ResourceRecord>> {
        let url = self.connection.url().resource(resource_type)?;
        let body = self.get_json(url, filters, scope).await?;
        unwrap_list_envelope(resource_type, body)
    }

    async fn get_json(
        &self,
        url: Url,
        filters: &QueryFilters,
        scope: Option<&str>,
    ) -> XtremioResult<Value> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let params = request_params(filters, scope);
        tracing::debug!(url = %url, ?params, "GET");

        let response = self
            .transport
            .get(url.clone(), self.connection.credentials(), &params)
            .await?;

        if !response.is_success() {
            tracing::error!(
                "API error: {} - {}",
                response.status,
                truncate_for_log(&response.body)
            );
            return Err(XtremioError::Transport(format!(
                "API error ({}) for {}: {}",
                response.status,
                url,
                truncate_for_log(&response.body)
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| XtremioError::Transport(format!("Failed to parse response: {}", e)))
    }
}

fn unwrap_list_envelope(resource_type: &str, body: Value) -> XtremioResult<Vec<ResourceRecord>> {
    let Value::Object(envelope) = body else {
        return Err(XtremioError::Response(format!(
            "{} list is not a JSON object",
            resource_type
        )));
    };

    let mut records = Vec::new();
    for (key, value) in envelope {
        if key == LINKS_KEY {
            continue;
        }
        let Value::Array(items) = value else {
            return Err(XtremioError::Response(format!(
                "{} list entry '{}' is not an array",
                resource_type, key
            )));
        };
        for item in items {
            match item {
                Value::Object(record) => records.push(record),
                other => {
                    return Err(XtremioError::Response(format!(
                        "{} record under '{}' is not an object: {}",
                        resource_type, key, other
                    )));
                }
            }
        }
    }
    Ok(records)
}

fn unwrap_detail_envelope(href: &str, body: Value) -> XtremioResult<ResourceRecord> {
    serde_json::from_value::<DetailEnvelope>(body)
        .map(|envelope| envelope.content)
        .map_err(|e| XtremioError::Response(format!("detail of {}: {}", href, e)))
}
