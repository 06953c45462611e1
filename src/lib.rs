mod core;
#[cfg(test)]
mod tests;

pub use crate::core::domain::error::{ValidationError, XtremioError, XtremioResult};
pub use crate::core::domain::factory::registered_types;
pub use crate::core::domain::model::{
    brick::Brick,
    cluster::Cluster,
    cluster_ref::ClusterRef,
    credentials::Credentials,
    dae::{Dae, DaeController, DaePsu},
    resource_identity::{ResourceIdentity, ResourceRecord},
    resource_type,
    slot::Slot,
    ssd::Ssd,
    volume::Volume,
    xtremio_config::{RateLimitConfig, XtremioConfig},
    xtremio_connection::XtremioConnection,
    xtremio_object::{XtremioObject, XtremioResource},
};
pub use crate::core::domain::value_object::{
    XtremioHost, XtremioPassword, XtremioUrl, XtremioUsername,
};
pub use crate::core::infrastructure::{
    api_client::ApiClient,
    query::{QueryFilters, query_param_name},
    transport::{HttpTransport, Transport, TransportResponse},
};

use crate::core::domain::{
    factory,
    value_object::{validate_host, validate_password, validate_username},
};
use std::sync::Arc;

/// A client for the XtremIO management REST API.
///
/// This client provides a typed view over the array's resources:
/// - Listing any resource type as typed objects (unknown types stay generic)
/// - Lazy detail fetches and containment traversal (cluster, brick, DAE)
/// - An optional session-wide cluster scope
///
/// Every call is a sequence of awaited GET requests; nothing runs in the
/// background and nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// use xtremio_client::{XtremioClient, XtremioResult};
///
/// #[tokio::main]
/// async fn main() -> XtremioResult<()> {
///     let client = XtremioClient::builder()
///         .host("xms.example.com")?
///         .credentials("admin", "Xtrem10")?
///         .build()?;
///
///     for cluster in client.clusters().await? {
///         println!("{}", cluster);
///         for brick in cluster.bricks().await? {
///             println!("  {} ({} SSDs)", brick, brick.ssds().await?.len());
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct XtremioClient {
    api_client: Arc<ApiClient>,
}

/// Builder for XtremioClient configuration
#[derive(Debug, Default)]
pub struct XtremioClientBuilder {
    host: Option<String>,
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    config: XtremioConfig,
}

impl XtremioClientBuilder {
    /// Sets the XMS address; the endpoint becomes
    /// `https://{host}/api/json/v2/types/`.
    pub fn host(mut self, host: impl Into<String>) -> XtremioResult<Self> {
        let host = host.into();
        validate_host(&host)?;
        self.host = Some(host);
        Ok(self)
    }

    /// Uses an explicit endpoint base instead of one derived from `host`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> XtremioResult<Self> {
        let base_url = base_url.into();
        XtremioUrl::from_base(&base_url)?;
        self.base_url = Some(base_url);
        Ok(self)
    }

    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> XtremioResult<Self> {
        let username = username.into();
        let password = password.into();
        validate_username(&username)?;
        validate_password(&password)?;
        self.username = Some(username);
        self.password = Some(password);
        Ok(self)
    }

    pub fn config(mut self, config: XtremioConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether self-signed certificates are accepted (default `true`).
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> XtremioResult<XtremioClient> {
        let url = match (self.base_url, self.host) {
            (Some(base_url), _) => XtremioUrl::from_base(&base_url)?,
            (None, Some(host)) => XtremioUrl::for_host(&XtremioHost::new(host)?)?,
            (None, None) => return Err(required("host")),
        };

        let username = self.username.ok_or_else(|| required("username"))?;
        let password = self.password.ok_or_else(|| required("password"))?;
        let credentials = Credentials::new(
            XtremioUsername::new_unchecked(username),
            XtremioPassword::new_unchecked(password),
        );

        let connection = XtremioConnection::new(url, credentials);
        let api_client = ApiClient::new(connection, &self.config)?;
        Ok(XtremioClient::from_api_client(api_client))
    }
}

fn required(field: &str) -> XtremioError {
    ValidationError::Field {
        field: field.to_string(),
        message: format!("{} is required", field),
    }
    .into()
}

impl XtremioClient {
    /// Creates a new builder for XtremioClient configuration
    pub fn builder() -> XtremioClientBuilder {
        XtremioClientBuilder::default()
    }

    /// Wraps a prepared [`ApiClient`], e.g. one built on a custom transport.
    pub fn from_api_client(api_client: ApiClient) -> Self {
        Self {
            api_client: Arc::new(api_client),
        }
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.api_client
    }

    /// Lists the clusters managed by this XMS.
    pub async fn clusters(&self) -> XtremioResult<Vec<Cluster>> {
        self.list_typed(&QueryFilters::new()).await
    }

    /// Lists the XMS itself. It has no typed variant, so no detail is fetched.
    pub async fn xms(&self) -> XtremioResult<Vec<XtremioObject>> {
        self.list(resource_type::XMS, &QueryFilters::new()).await
    }

    pub async fn volumes(&self) -> XtremioResult<Vec<Volume>> {
        self.list_typed(&QueryFilters::new()).await
    }

    pub async fn bricks(&self) -> XtremioResult<Vec<Brick>> {
        self.list_typed(&QueryFilters::new()).await
    }

    pub async fn ssds(&self) -> XtremioResult<Vec<Ssd>> {
        self.list_typed(&QueryFilters::new()).await
    }

    pub async fn slots(&self) -> XtremioResult<Vec<Slot>> {
        self.list_typed(&QueryFilters::new()).await
    }

    pub async fn daes(&self) -> XtremioResult<Vec<Dae>> {
        self.list_typed(&QueryFilters::new()).await
    }

    pub async fn dae_controllers(&self) -> XtremioResult<Vec<DaeController>> {
        self.list_typed(&QueryFilters::new()).await
    }

    pub async fn dae_psus(&self) -> XtremioResult<Vec<DaePsu>> {
        self.list_typed(&QueryFilters::new()).await
    }

    /// Lists any resource type, dispatching each record through the factory.
    ///
    /// # Errors
    /// Fails as a whole on the first transport, envelope or construction
    /// error; no partial list is returned.
    pub async fn list(
        &self,
        resource_type: &str,
        filters: &QueryFilters,
    ) -> XtremioResult<Vec<XtremioObject>> {
        factory::list_objects(&self.api_client, resource_type, filters).await
    }

    /// Lists the resource type of `T` as `T`.
    pub async fn list_typed<T: XtremioResource>(
        &self,
        filters: &QueryFilters,
    ) -> XtremioResult<Vec<T>> {
        factory::list_typed(&self.api_client, filters).await
    }

    /// Lists raw records without building objects.
    pub async fn list_records(
        &self,
        resource_type: &str,
        filters: &QueryFilters,
    ) -> XtremioResult<Vec<ResourceRecord>> {
        self.api_client.list_records(resource_type, filters).await
    }

    /// Fetches the `content` of the detail record behind `href`.
    pub async fn fetch_detail(
        &self,
        href: &str,
        filters: &QueryFilters,
    ) -> XtremioResult<ResourceRecord> {
        self.api_client.fetch_detail(href, filters).await
    }

    /// Builds one object from a raw record of `resource_type`.
    pub async fn build_object(
        &self,
        resource_type: &str,
        record: ResourceRecord,
    ) -> XtremioResult<XtremioObject> {
        factory::build(resource_type, record, &self.api_client).await
    }

    /// Scopes every subsequent request to one cluster.
    ///
    /// A [`Cluster`] is used as is. A string is matched exactly against the
    /// name and the object id of every cluster on the XMS, first match
    /// wins. Returns the cluster id now in effect.
    ///
    /// # Errors
    /// `ScopeResolution` if no cluster matches the given string; the
    /// previous scope is kept in that case.
    pub async fn set_active_scope<'a>(
        &self,
        cluster: impl Into<ClusterRef<'a>>,
    ) -> XtremioResult<String> {
        let cluster_id = match cluster.into() {
            ClusterRef::Cluster(cluster) => cluster.identity().object_id().to_string(),
            ClusterRef::Identifier(identifier) => self.resolve_cluster_id(identifier).await?,
        };
        self.api_client.set_active_scope(cluster_id.clone()).await;
        Ok(cluster_id)
    }

    /// Returns the cluster id merged into every request, if any.
    pub async fn active_scope(&self) -> Option<String> {
        self.api_client.active_scope().await
    }

    pub async fn clear_active_scope(&self) {
        self.api_client.clear_active_scope().await;
    }

    async fn resolve_cluster_id(&self, identifier: &str) -> XtremioResult<String> {
        let records = self
            .api_client
            .list_records_unscoped(resource_type::CLUSTERS, &QueryFilters::new())
            .await?;

        for record in records {
            let identity = ResourceIdentity::from_record(record, Arc::clone(&self.api_client))?;
            if identity.name() == identifier || identity.object_id() == identifier {
                return Ok(identity.object_id().to_string());
            }
        }
        Err(XtremioError::ScopeResolution(identifier.to_string()))
    }
}
