//! Filter translation between caller-side names and the API's query parameters.

use std::collections::BTreeMap;

/// Caller-supplied filters, keyed by snake_case or hyphenated names.
pub type QueryFilters = BTreeMap<String, String>;

/// Filter key under which the active scope is merged.
pub(crate) const SCOPE_FILTER: &str = "cluster_id";

/// Rewrites a filter key to the API's hyphenated parameter name.
///
/// ```
/// use xtremio_client::query_param_name;
///
/// assert_eq!(query_param_name("sys_id"), "sys-id");
/// assert_eq!(query_param_name("cluster-id"), "cluster-id");
/// ```
pub fn query_param_name(key: &str) -> String {
    key.replace('_', "-")
}

/// Builds the parameters actually transmitted for one request.
///
/// The active scope is applied last, so it overrides a caller-supplied
/// cluster filter under either spelling.
pub(crate) fn request_params(filters: &QueryFilters, scope: Option<&str>) -> Vec<(String, String)> {
    let mut params: BTreeMap<String, String> = filters
        .iter()
        .map(|(key, value)| (query_param_name(key), value.clone()))
        .collect();

    if let Some(cluster_id) = scope {
        params.insert(query_param_name(SCOPE_FILTER), cluster_id.to_string());
    }

    params.into_iter().collect()
}
