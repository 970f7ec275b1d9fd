//! 各请求方法的组装与响应处理测试

use std::time::Duration;

use reqwest::Body;
use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Match, Mock, Request, ResponseTemplate};

use crate::client::{DEFAULT_USER_AGENT, DeleteMode};
use crate::remote_file::{FileInfo, MetaData, sort_listing};
use crate::tests::mock_client;
use crate::{ReplicaClient, ReplicaClientConfig, ReplicaError};

/// 请求中不包含指定请求头
struct HeaderAbsent(&'static str);

impl Match for HeaderAbsent {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key(self.0)
    }
}

fn meta(pairs: &[(&str, &str)]) -> MetaData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn stat_decodes_head_response() {
    let (server, client) = mock_client().await;
    Mock::given(method("HEAD"))
        .and(path("/json/one/test"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Path", "one/test")
                .insert_header("X-Owner", "test")
                .insert_header("X-Type", "file")
                .insert_header("X-Length", "819200")
                .insert_header("X-Replica-Count", "1")
                .insert_header("X-Meta-Animal", "bird"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let info = client.stat("one/test").await.unwrap();
    assert_eq!(info.name, "test");
    assert_eq!(info.owner, "test");
    assert_eq!(info.size, 819200);
    assert_eq!(info.replica_count(), 1);
    assert_eq!(info.meta_data().get("Animal").map(String::as_str), Some("bird"));
}

#[tokio::test]
async fn get_directory_yields_listing() {
    let (server, client) = mock_client().await;
    let listing = serde_json::json!([
        {"name": "gophers.png", "path": "public/two/gophers.png", "owner": "test", "size": 8042},
        {"name": "deep", "path": "public/two/deep", "owner": "test", "is_dir": true},
        {"name": "gopherblue.png", "path": "public/two/gopherblue.png", "owner": "test", "size": 70372}
    ]);
    Mock::given(method("GET"))
        .and(path("/json/public/two"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Type", "dir")
                .set_body_json(listing),
        )
        .mount(&server)
        .await;

    let resource = client.get("public/two").await.unwrap();
    assert!(resource.is_dir());
    let mut files = resource.into_listing().unwrap();
    sort_listing(&mut files);

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["deep", "gopherblue.png", "gophers.png"]);
}

#[tokio::test]
async fn get_empty_directory_accepts_null() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/json/empty"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Type", "dir")
                .set_body_raw("null", "application/json"),
        )
        .mount(&server)
        .await;

    let files = client.get("empty").await.unwrap().into_listing().unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn get_directory_with_bad_json_is_decode_error() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/json/broken"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Type", "dir")
                .set_body_string("[{"),
        )
        .mount(&server)
        .await;

    match client.get("broken").await {
        Err(ReplicaError::Decode(_)) => {}
        other => panic!("预期 Decode 错误，得到 {other:?}"),
    }
}

#[tokio::test]
async fn get_file_yields_stream() {
    let (server, client) = mock_client().await;
    let content: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    Mock::given(method("GET"))
        .and(path("/json/one/blob"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Path", "one/blob")
                .set_body_bytes(content.clone()),
        )
        .mount(&server)
        .await;

    let resource = client.get("one/blob").await.unwrap();
    assert!(!resource.is_dir());
    let stream = resource.into_stream().unwrap();
    assert_eq!(stream.file_info().name, "blob");
    assert_eq!(stream.content_length(), Some(content.len() as u64));

    let bytes = stream.bytes().await.unwrap();
    assert_eq!(bytes.as_ref(), content.as_slice());
}

#[tokio::test]
async fn get_file_can_be_saved_locally() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/json/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello replica"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("notes.txt");
    let stream = client.get("notes.txt").await.unwrap().into_stream().unwrap();
    let written = stream.save_to(&target).await.unwrap();

    assert_eq!(written, 13);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello replica");
}

#[tokio::test]
async fn get_missing_is_http_error() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/json/notfound"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found\n"))
        .mount(&server)
        .await;

    let err = client.get("notfound").await.unwrap_err();
    assert_eq!(err.http_code(), Some(404));
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn create_file_sends_headers_and_body() {
    let (server, client) = mock_client().await;
    let payload = b"\x89PNG\r\n\x1a\nfake image".to_vec();
    Mock::given(method("PUT"))
        .and(path("/json/public/two/gopher.png"))
        .and(header("content-type", "image/png"))
        .and(header("x-replica-count", "2"))
        .and(header("x-meta-color", "blue"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .and(body_bytes(payload.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let info = FileInfo::new_upload(payload.len() as u64, "image/png")
        .with_replica_count(2)
        .with_meta_data(meta(&[("color", "blue")]));
    client
        .create_file("public/two/gopher.png", &info, Some(Body::from(payload)))
        .await
        .unwrap();
}

#[tokio::test]
async fn zero_replica_count_is_not_sent() {
    let (server, client) = mock_client().await;
    Mock::given(method("PUT"))
        .and(path("/json/plain"))
        .and(HeaderAbsent("x-replica-count"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let info = FileInfo::new_upload(3, "text/plain");
    client
        .create_file("plain", &info, Some(Body::from("abc")))
        .await
        .unwrap();
}

#[tokio::test]
async fn create_dir_uses_directory_content_type() {
    let (server, client) = mock_client().await;
    Mock::given(method("PUT"))
        .and(path("/json/one"))
        .and(header("content-type", "application/x-directory"))
        .and(header("x-replica-count", "1"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client.create_dir("one", 1, MetaData::new()).await.unwrap();
}

#[tokio::test]
async fn create_dir_under_missing_parent_fails() {
    let (server, client) = mock_client().await;
    Mock::given(method("PUT"))
        .and(path("/json/test/will/fail"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"error_code":404,"error_message":"parent not found"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = client
        .create_dir("test/will/fail", 2, MetaData::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn remove_and_remove_all_differ_by_marker() {
    let (server, client) = mock_client().await;
    Mock::given(method("DELETE"))
        .and(path("/json/single"))
        .and(HeaderAbsent("x-remove-all"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/json/tree"))
        .and(header("x-remove-all", "x"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.remove("single").await.unwrap();
    client.remove_all("tree").await.unwrap();
    assert!(DeleteMode::One.marker().is_none());
}

#[tokio::test]
async fn update_sends_set_and_remove_meta() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path("/json/one/test"))
        .and(header("x-meta-size", "biggest"))
        .and(header("x-remove-meta-color", "none"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update(
            "one/test",
            &meta(&[("size", "biggest")]),
            &meta(&[("color", "none")]),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn exists_checks_with_options() {
    let (server, client) = mock_client().await;
    Mock::given(method("OPTIONS"))
        .and(path("/json/one"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("OPTIONS"))
        .and(path("/json/not/exist"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    client.exists("one").await.unwrap();
    assert!(client.exists("not/exist").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn config_options_are_applied() {
    crate::tests::init_tracing();
    let config = ReplicaClientConfig::default()
        .allow_insecure_tls()
        .with_token("123456789")
        .with_timeout(Duration::from_secs(2))
        .with_user_agent("custom-agent");
    let client = ReplicaClient::with_config("https://127.0.0.1:1", config).unwrap();

    assert!(client.config().insecure_tls);
    assert_eq!(client.token.get_current().await.as_str(), "123456789");
    assert_eq!(client.config().timeout, Some(Duration::from_secs(2)));
    // 连接失败说明 http 客户端已按配置构建
    assert!(matches!(
        client.exists("x").await,
        Err(ReplicaError::Transport(_))
    ));
}
