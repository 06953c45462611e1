use crate::{
    XtremioResource,
    tests::{TYPES_PATH, create_test_client, mount_detail, mount_list, record},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

#[tokio::test]
async fn test_brick_children_carry_sys_id_and_brick_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(&mock_server, "bricks", vec![record(&mock_server, "bricks", "1", "X1")]).await;
    mount_detail(&mock_server, "bricks", "1", json!({"sys-id": "1", "brick-id": "X1"})).await;

    // No caching: every traversal call lists again.
    Mock::given(method("GET"))
        .and(path(format!("{}/ssds", TYPES_PATH)))
        .and(query_param("sys-id", "1"))
        .and(query_param("brick-id", "X1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssds": [record(&mock_server, "ssds", "4", "wwn-4")]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;
    mount_detail(&mock_server, "ssds", "4", json!({"sys-id": "1", "ssd-id": "ssd-4"})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/local-disks", TYPES_PATH)))
        .and(query_param("brick-id", "X1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "local-disks": [record(&mock_server, "local-disks", "7", "X1-SC1-LocalDisk1")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bricks = client.bricks().await.unwrap();
    assert_eq!(bricks.len(), 1);
    let brick = &bricks[0];
    assert_eq!(brick.brick_id(), "X1");
    assert_eq!(brick.to_string(), "XtremioBrick: Cluster id: 1 Brick id: X1");

    let ssds = brick.ssds().await.unwrap();
    assert_eq!(ssds.len(), 1);
    assert_eq!(ssds[0].ssd_id(), "ssd-4");
    assert_eq!(ssds[0].to_string(), "XtremioSSD: Cluster id: 1 Drive id: 4");
    assert_eq!(brick.ssds().await.unwrap().len(), 1);

    let disks = brick.local_disks().await.unwrap();
    assert!(disks[0].is_generic());
    assert_eq!(disks[0].identity().object_type(), "local-disks");
}

#[tokio::test]
async fn test_dae_children_carry_jbod_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(&mock_server, "daes", vec![record(&mock_server, "daes", "1", "X1-DAE")]).await;
    mount_detail(&mock_server, "daes", "1", json!({"sys-id": "1", "jbod-id": "J1"})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/dae-psus", TYPES_PATH)))
        .and(query_param("sys-id", "1"))
        .and(query_param("jbod-id", "J1"))
        .and(query_param_is_missing("brick-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dae-psus": [record(&mock_server, "dae-psus", "2", "X1-DAE-PSU-L")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_detail(
        &mock_server,
        "dae-psus",
        "2",
        json!({"sys-id": "1", "jbod-psu-id": "psu-2"}),
    )
    .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/slots", TYPES_PATH)))
        .and(query_param("jbod-id", "J1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slots": [record(&mock_server, "slots", "9", "X1-DAE-slot-3")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_detail(&mock_server, "slots", "9", json!({"sys-id": "1", "slot-num": 3})).await;

    let dae = client.daes().await.unwrap().remove(0);
    assert_eq!(dae.identity().system_id(), Some("1"));

    let psus = dae.dae_psus().await.unwrap();
    assert_eq!(psus.len(), 1);
    assert_eq!(psus[0].psu_id(), "psu-2");
    assert_eq!(
        psus[0].to_string(),
        "XtremioDAEPSU: Cluster id: 1 DAEPSU id: psu-2"
    );

    let slots = dae.slots().await.unwrap();
    // Non-string detail values are kept as their compact JSON text.
    assert_eq!(slots[0].slot_num(), "3");
}

#[tokio::test]
async fn test_child_of_object_without_sys_id_omits_it() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_list(&mock_server, "bricks", vec![record(&mock_server, "bricks", "1", "X1")]).await;
    mount_detail(&mock_server, "bricks", "1", json!({"brick-id": "X1", "sys-id": null})).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/slots", TYPES_PATH)))
        .and(query_param_is_missing("sys-id"))
        .and(query_param("brick-id", "X1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"slots": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let brick = client.bricks().await.unwrap().remove(0);
    assert_eq!(brick.identity().system_id(), None);
    assert_eq!(brick.to_string(), "XtremioBrick: Cluster id: - Brick id: X1");
    assert!(brick.slots().await.unwrap().is_empty());
}
