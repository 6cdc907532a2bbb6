//! Integration tests for schedules, tasks and backups.

use crocgodyl::types::{CreateBackupDescriptor, ScheduleDescriptor, TaskDescriptor};
use crocgodyl::Client;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn schedule_attributes(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "cron": {
            "day_of_week": "*",
            "day_of_month": "*",
            "hour": "3",
            "minute": "0",
            "month": "*"
        },
        "is_active": true,
        "is_processing": false,
        "only_when_online": false,
        "last_run_at": null,
        "next_run_at": "2023-05-02T03:00:00+00:00",
        "created_at": "2023-05-01T00:00:00+00:00",
        "updated_at": "2023-05-01T00:00:00+00:00"
    })
}

fn backup_attributes(uuid: &str, name: &str, locked: bool) -> serde_json::Value {
    serde_json::json!({
        "uuid": uuid,
        "name": name,
        "ignored_files": [],
        "sha256_hash": "deadbeef",
        "bytes": 1048576,
        "created_at": "2023-05-01T03:00:00+00:00",
        "completed_at": "2023-05-01T03:05:00+00:00",
        "is_successful": true,
        "is_locked": locked
    })
}

#[tokio::test]
async fn test_list_schedules() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"object": "server_schedule", "attributes": schedule_attributes(2, "nightly restart")},
                {"object": "server_schedule", "attributes": schedule_attributes(1, "hourly backup")}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let schedules = client.schedules().list("abc123").await.unwrap();

    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0].id, 2);
    assert_eq!(schedules[0].cron.hour, "3");
    assert!(schedules[0].last_run_at.is_none());
    assert!(schedules[0].next_run_at.is_some());
}

#[tokio::test]
async fn test_create_and_update_schedule() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/schedules"))
        .and(body_json(serde_json::json!({
            "name": "nightly restart",
            "minute": "0",
            "hour": "3",
            "day_of_month": "*",
            "day_of_week": "*",
            "is_active": true,
            "only_when_online": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server_schedule",
            "attributes": schedule_attributes(2, "nightly restart")
        })))
        .mount(&mock_server)
        .await;

    // Updates go out as PATCH.
    Mock::given(method("PATCH"))
        .and(path("/api/client/servers/abc123/schedules/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server_schedule",
            "attributes": schedule_attributes(2, "nightly restart, 4am")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();

    let descriptor = ScheduleDescriptor {
        name: "nightly restart".to_string(),
        minute: "0".to_string(),
        hour: "3".to_string(),
        day_of_month: "*".to_string(),
        day_of_week: "*".to_string(),
        month: None,
        is_active: true,
        only_when_online: false,
    };

    let schedule = client.schedules().create("abc123", descriptor.clone()).await.unwrap();
    assert_eq!(schedule.id, 2);

    let mut changed = descriptor;
    changed.hour = "4".to_string();
    let updated = client.schedules().update("abc123", 2, changed).await.unwrap();
    assert_eq!(updated.name, "nightly restart, 4am");
}

#[tokio::test]
async fn test_execute_schedule_uses_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/schedules/2/execute"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    client.schedules().execute("abc123", 2).await.unwrap();
}

#[tokio::test]
async fn test_schedule_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/schedules/2/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tasks": [
                {"action": "command", "payload": "say restarting soon", "time_offset": "0"},
                {"action": "power", "payload": "restart", "time_offset": "60"}
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/schedules/2/tasks"))
        .and(body_json(serde_json::json!({
            "action": "backup",
            "payload": "",
            "time_offset": "120",
            "continue_on_failure": false
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/client/servers/abc123/schedules/2/tasks/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();

    let tasks = client.schedules().tasks("abc123", 2).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].action, "command");
    assert_eq!(tasks[1].payload, "restart");

    let task = TaskDescriptor {
        action: "backup".to_string(),
        payload: String::new(),
        time_offset: "120".to_string(),
        continue_on_failure: false,
    };
    client.schedules().create_task("abc123", 2, task.clone()).await.unwrap();
    client.schedules().update_task("abc123", 2, 5, task).await.unwrap();
}

#[tokio::test]
async fn test_list_and_get_backups() {
    let mock_server = MockServer::start().await;
    let uuid = "904df120-a595-4b22-8b80-4a8e1dcb71c7";

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/backups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"object": "backup", "attributes": backup_attributes(uuid, "nightly", false)}
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/client/servers/abc123/backups/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "backup",
            "attributes": backup_attributes(uuid, "nightly", false)
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();

    let backups = client.backups().list("abc123").await.unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(backups[0].name, "nightly");

    let backup = client
        .backups()
        .get("abc123", Uuid::parse_str(uuid).unwrap())
        .await
        .unwrap();
    assert!(backup.is_successful);
    assert!(backup.completed_at.is_some());
}

#[tokio::test]
async fn test_create_backup() {
    let mock_server = MockServer::start().await;
    let uuid = "904df120-a595-4b22-8b80-4a8e1dcb71c7";

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/backups"))
        .and(body_json(serde_json::json!({
            "name": "pre-update",
            "ignored": "*.log",
            "is_locked": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "backup",
            "attributes": backup_attributes(uuid, "pre-update", true)
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let backup = client
        .backups()
        .create(
            "abc123",
            CreateBackupDescriptor {
                name: "pre-update".to_string(),
                ignored: "*.log".to_string(),
                is_locked: true,
            },
        )
        .await
        .unwrap();

    assert!(backup.is_locked);
}

#[tokio::test]
async fn test_backup_download_lock_and_restore() {
    let mock_server = MockServer::start().await;
    let uuid = "904df120-a595-4b22-8b80-4a8e1dcb71c7";

    Mock::given(method("GET"))
        .and(path(format!(
            "/api/client/servers/abc123/backups/{uuid}/download"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "signed_url",
            "attributes": {"url": "https://node.example/backups/xyz"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/client/servers/abc123/backups/{uuid}/lock")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/api/client/servers/abc123/backups/{uuid}/restore"
        )))
        .and(body_json(serde_json::json!({"truncate": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let id = Uuid::parse_str(uuid).unwrap();

    let download = client.backups().download("abc123", id).await.unwrap();
    assert_eq!(download.url, "https://node.example/backups/xyz");

    client.backups().lock("abc123", id).await.unwrap();
    client.backups().restore("abc123", id, true).await.unwrap();
}
