use crate::{
    QueryFilters, XtremioError, XtremioResource,
    tests::{TYPES_PATH, create_test_client, mount_detail, mount_list, record},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_volume(mock_server: &MockServer, content: Value) {
    mount_list(
        mock_server,
        "volumes",
        vec![record(mock_server, "volumes", "10", "vol10")],
    )
    .await;
    mount_detail(mock_server, "volumes", "10", content).await;
}

async fn expect_snapshot(mock_server: &MockServer, index: &str, id: &str) {
    let mut body = json!({});
    body["snapshots"] = json!([record(mock_server, "snapshots", id, &format!("snap-{}", id))]);

    Mock::given(method("GET"))
        .and(path(format!("{}/snapshots", TYPES_PATH)))
        .and(query_param("index", index))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_snapshots_follow_dest_snap_list_in_order() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_volume(
        &mock_server,
        json!({
            "sys-id": "1",
            "dest-snap-list": [["guid-a", "s1", 7], ["guid-b", "s2", 9]]
        }),
    )
    .await;
    expect_snapshot(&mock_server, "7", "21").await;
    expect_snapshot(&mock_server, "9", "22").await;

    let volume = client.volumes().await.unwrap().remove(0);
    let snapshots = volume.snapshots().await.unwrap().unwrap();

    let ids: Vec<&str> = snapshots.iter().map(|s| s.identity().object_id()).collect();
    assert_eq!(ids, vec!["21", "22"]);
    assert!(snapshots.iter().all(|s| s.is_generic()));
}

#[tokio::test]
async fn test_volume_without_dest_snap_list_has_no_snapshot_answer() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server, json!({"sys-id": "1"})).await;

    let volume = client.volumes().await.unwrap().remove(0);
    assert!(volume.snapshots().await.unwrap().is_none());
}

#[tokio::test]
async fn test_volume_with_empty_dest_snap_list() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server, json!({"sys-id": "1", "dest-snap-list": []})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/snapshots", TYPES_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshots": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let volume = client.volumes().await.unwrap().remove(0);
    assert_eq!(volume.snapshots().await.unwrap().map(|s| s.len()), Some(0));
}

#[tokio::test]
async fn test_malformed_dest_snap_list_is_a_response_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server, json!({"sys-id": "1", "dest-snap-list": "none"})).await;

    let volume = client.volumes().await.unwrap().remove(0);
    assert!(matches!(
        volume.snapshots().await,
        Err(XtremioError::Response(_))
    ));
}

#[tokio::test]
async fn test_details_with_forwards_filters() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_volume(&mock_server, json!({"sys-id": "1", "vol-size": "1048576"})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/volumes/10", TYPES_PATH)))
        .and(query_param("prop", "vol-size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"vol-size": "1048576"}
        })))
        .expect(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    let volume = client.volumes().await.unwrap().remove(0);
    let filters = QueryFilters::from([("prop".to_string(), "vol-size".to_string())]);
    let detail = volume.identity().details_with(&filters).await.unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail["vol-size"], "1048576");
}
