use crate::{
    QueryFilters, XtremioError, XtremioObject, XtremioResource,
    tests::{
        TYPES_PATH, as_record, create_test_client, href, mount_detail, mount_list, record,
    },
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

#[tokio::test]
async fn test_cluster_list_end_to_end() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(
        &mock_server,
        "clusters",
        vec![record(&mock_server, "clusters", "1", "C1")],
    )
    .await;
    mount_detail(&mock_server, "clusters", "1", json!({"sys-id": "1", "name": "C1"})).await;

    let clusters = client.clusters().await.unwrap();
    assert_eq!(clusters.len(), 1);

    let identity = clusters[0].identity();
    assert_eq!(identity.name(), "C1");
    assert_eq!(identity.object_id(), "1");
    assert_eq!(identity.object_type(), "clusters");
    assert_eq!(identity.system_id(), Some("1"));
    assert_eq!(identity.href(), href(&mock_server, "clusters", "1"));
    assert_eq!(clusters[0].to_string(), "XtremioCluster: ID=1");

    // The untyped path dispatches to the same variant.
    let objects = client.list("clusters", &QueryFilters::new()).await.unwrap();
    assert!(matches!(objects.as_slice(), [XtremioObject::Cluster(_)]));
}

#[tokio::test]
async fn test_xms_is_generic_without_detail_fetch() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(&mock_server, "xms", vec![record(&mock_server, "xms", "1", "xms")]).await;
    Mock::given(method("GET"))
        .and(path(format!("{}/xms/1", TYPES_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": {}})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let xms = client.xms().await.unwrap();
    assert_eq!(xms.len(), 1);
    assert!(xms[0].is_generic());
    assert_eq!(xms[0].identity().system_id(), None);
    assert_eq!(xms[0].identity().object_type(), "xms");
}

#[tokio::test]
async fn test_cluster_children_are_scoped_by_sys_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(
        &mock_server,
        "clusters",
        vec![record(&mock_server, "clusters", "1", "C1")],
    )
    .await;
    mount_detail(&mock_server, "clusters", "1", json!({"sys-id": "1"})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/volumes", TYPES_PATH)))
        .and(query_param("sys-id", "1"))
        .and(query_param_is_missing("brick-id"))
        .and(query_param_is_missing("jbod-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "volumes": [record(&mock_server, "volumes", "10", "vol10")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_detail(&mock_server, "volumes", "10", json!({"sys-id": "1"})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/bbus", TYPES_PATH)))
        .and(query_param("sys-id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bbus": [record(&mock_server, "bbus", "3", "X1-BBU")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cluster = client.clusters().await.unwrap().remove(0);

    let volumes = cluster.volumes().await.unwrap();
    assert_eq!(volumes.len(), 1);
    assert_eq!(volumes[0].identity().object_id(), "10");
    assert_eq!(volumes[0].to_string(), "XtremioVolume: vol10");

    let bbus = cluster.bbus().await.unwrap();
    assert_eq!(bbus.len(), 1);
    assert!(bbus[0].is_generic());
    assert_eq!(bbus[0].identity().name(), "X1-BBU");
}

#[tokio::test]
async fn test_list_fails_fast_on_bad_record() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(
        &mock_server,
        "ssds",
        vec![
            record(&mock_server, "ssds", "1", "wwn-1"),
            record(&mock_server, "ssds", "2", "wwn-2"),
        ],
    )
    .await;
    mount_detail(&mock_server, "ssds", "1", json!({"sys-id": "1", "ssd-id": "ssd-1"})).await;
    mount_detail(&mock_server, "ssds", "2", json!({})).await;

    let result = client.ssds().await;
    assert!(matches!(
        result,
        Err(XtremioError::MissingField { resource_type, field })
            if resource_type == "ssds" && field == "ssd-id"
    ));
}

#[tokio::test]
async fn test_transport_failure_is_not_an_empty_list() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(format!("{}/clusters", TYPES_PATH)))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let result = client.clusters().await;
    assert!(matches!(result, Err(XtremioError::Transport(_))));
}

#[tokio::test]
async fn test_build_object_from_raw_record() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_detail(&mock_server, "daes", "2", json!({"sys-id": "1", "jbod-id": "DAE-2"})).await;

    let raw = as_record(record(&mock_server, "daes", "2", "X1-DAE"));
    let object = client.build_object("daes", raw.clone()).await.unwrap();
    match &object {
        XtremioObject::Dae(dae) => {
            assert_eq!(dae.jbod_id(), "DAE-2");
            assert_eq!(dae.identity().raw(), &raw);
        }
        other => panic!("expected dae, got {}", other.kind()),
    }
    assert_eq!(object.to_string(), "XtremioDAE: Cluster id: 1 DAE id: DAE-2");
}
