//
//  harbor-cli
//  tests/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use mockito::{Matcher, Server};
use serde_json::json;

use harbor_cli::api::common::{ListParams, Pagination};
use harbor_cli::api::resources::{ArtifactDetail, ListProjectsParams};
use harbor_cli::api::{ClientConfig, HarborClient};

fn client_for(server: &Server) -> HarborClient {
    HarborClient::new(
        ClientConfig::new("admin", "Harbor12345")
            .with_base_address(format!("{}/api/v2.0", server.url())),
    )
    .unwrap()
}

#[tokio::test]
async fn test_projects_list_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2.0/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("page_size".into(), "5".into()),
            Matcher::UrlEncoded("public".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let params = ListProjectsParams::from(ListParams::default().page(2).page_size(5)).public(true);
    let projects = client.projects().list(&params).await.unwrap();

    assert_eq!(projects, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_nested_repository_is_double_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v2.0/projects/library/repositories/team%252Fnginx/artifacts/latest",
        )
        .match_query(Matcher::UrlEncoded("with_tag".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"digest":"sha256:abc"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let artifact = client
        .artifacts()
        .get(
            "library",
            "team/nginx",
            "latest",
            &ArtifactDetail::default().with_tag(true),
        )
        .await
        .unwrap();

    assert_eq!(artifact["digest"], "sha256:abc");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_text_addition_is_returned_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v2.0/projects/library/repositories/chart/artifacts/1.0/additions/readme.md",
        )
        .with_status(200)
        .with_header("content-type", "text/markdown")
        .with_body("# My chart\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let readme = client
        .additions()
        .get_text("library", "chart", "1.0", "readme.md")
        .await
        .unwrap();

    assert_eq!(readme, "# My chart\n");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_json_addition_is_decoded() {
    let mut server = Server::new_async().await;
    server
        .mock(
            "GET",
            "/api/v2.0/projects/library/repositories/nginx/artifacts/latest/additions/build_history",
        )
        .with_status(200)
        .with_body(r#"[{"created":"2024-01-01T00:00:00Z","created_by":"/bin/sh"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let history = client
        .additions()
        .get("library", "nginx", "latest", "build_history")
        .await
        .unwrap();

    assert_eq!(history[0]["created_by"], "/bin/sh");
}

#[tokio::test]
async fn test_repository_delete() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v2.0/projects/library/repositories/nginx")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client.repositories().delete("library", "nginx").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_user_sysadmin_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v2.0/users/5/sysadmin")
        .match_body(Matcher::Json(json!({"sysadmin_flag": true})))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client.users().set_sysadmin(5, true).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_user_search_pagination() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2.0/users/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "adm".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("page_size".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"user_id":1,"username":"admin"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let users = client
        .users()
        .search("adm", &Pagination::default())
        .await
        .unwrap();

    assert_eq!(users[0]["username"], "admin");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_quota_update_wraps_hard_limits() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v2.0/quotas/9")
        .match_body(Matcher::Json(json!({"hard": {"storage": 1073741824}})))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .quotas()
        .update(9, &json!({"storage": 1073741824}))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_retention_trigger_dry_run() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/retentions/3/executions")
        .match_body(Matcher::Json(json!({"dry_run": true})))
        .with_status(201)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.retention().trigger(3, true).await.unwrap();
    assert!(result.is_null());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_replication_stop_action() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v2.0/replication/executions/12")
        .match_body(Matcher::Json(json!({"action": "stop"})))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client.replication().stop(12).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ldap_import_users() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/ldap/users/import")
        .match_body(Matcher::Json(json!({"ldap_uid_list": ["alice", "bob"]})))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client.ldap().import_users(&["alice", "bob"]).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tag_delete_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "DELETE",
            "/api/v2.0/projects/library/repositories/nginx/artifacts/latest/tags/v1",
        )
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .tags()
        .delete("library", "nginx", "latest", "v1")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_resource_errors_carry_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2.0/projects/ghost/summary")
        .with_status(403)
        .with_body(r#"{"message":"forbidden"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.projects().summary("ghost").await.unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(err.message(), Some("forbidden"));
}
