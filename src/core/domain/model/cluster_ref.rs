use crate::core::domain::model::cluster::Cluster;

/// How a caller names the cluster to scope the session to.
#[derive(Debug, Clone, Copy)]
pub enum ClusterRef<'a> {
    /// An already-built cluster; its object id is used directly.
    Cluster(&'a Cluster),
    /// A cluster name or id, resolved against the cluster list.
    Identifier(&'a str),
}

impl<'a> From<&'a Cluster> for ClusterRef<'a> {
    fn from(cluster: &'a Cluster) -> Self {
        ClusterRef::Cluster(cluster)
    }
}

impl<'a> From<&'a str> for ClusterRef<'a> {
    fn from(identifier: &'a str) -> Self {
        ClusterRef::Identifier(identifier)
    }
}

impl<'a> From<&'a String> for ClusterRef<'a> {
    fn from(identifier: &'a String) -> Self {
        ClusterRef::Identifier(identifier.as_str())
    }
}
