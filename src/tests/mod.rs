//! Scenario tests against a mock XMS.


use crate::{ResourceRecord, XtremioClient};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub(crate) const TYPES_PATH: &str = "/api/json/v2/types";

pub(crate) fn create_test_client(mock_server: &MockServer) -> XtremioClient {
    XtremioClient::builder()
        .base_url(format!("{}{}/", mock_server.uri(), TYPES_PATH))
        .unwrap()
        .credentials("admin", "secret")
        .unwrap()
        .build()
        .unwrap()
}

pub(crate) fn href(mock_server: &MockServer, resource_type: &str, id: &str) -> String {
    format!("{}{}/{}/{}", mock_server.uri(), TYPES_PATH, resource_type, id)
}

pub(crate) fn record(mock_server: &MockServer, resource_type: &str, id: &str, name: &str) -> Value {
    json!({"name": name, "href": href(mock_server, resource_type, id)})
}

pub(crate) fn as_record(value: Value) -> ResourceRecord {
    value.as_object().cloned().unwrap()
}

/// Mounts `GET /types/{type}` answering with `records` plus a `links` entry.
pub(crate) async fn mount_list(mock_server: &MockServer, resource_type: &str, records: Vec<Value>) {
    let mut body = json!({
        "links": [{"href": format!("{}{}/{}/", mock_server.uri(), TYPES_PATH, resource_type), "rel": "self"}]
    });
    body[resource_type] = Value::Array(records);

    Mock::given(method("GET"))
        .and(path(format!("{}/{}", TYPES_PATH, resource_type)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Mounts `GET /types/{type}/{id}` answering with `content`.
pub(crate) async fn mount_detail(
    mock_server: &MockServer,
    resource_type: &str,
    id: &str,
    content: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/{}", TYPES_PATH, resource_type, id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": content })))
        .mount(mock_server)
        .await;
}
