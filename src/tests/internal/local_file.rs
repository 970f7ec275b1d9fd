//! 本地文件读取与上传测试

use std::io::Write;

use rand::RngCore;
use tokio::io::AsyncReadExt;
use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::local_file::{open_file, sniff_content_type};
use crate::remote_file::MetaData;
use crate::tests::mock_client;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut data);
    // 保证开头不会碰巧命中某个文件签名
    data[0] = 0x00;
    data
}

#[test]
fn sniff_detects_common_signatures() {
    assert_eq!(sniff_content_type(b"\x89PNG\r\n\x1a\n...."), "image/png");
    assert_eq!(sniff_content_type(b"%PDF-1.7"), "application/pdf");
    assert_eq!(sniff_content_type(b"  <!DOCTYPE html><html>"), "text/html; charset=utf-8");
    assert_eq!(sniff_content_type(b"<?xml version=\"1.0\"?>"), "text/xml; charset=utf-8");
}

#[test]
fn sniff_separates_text_and_binary() {
    assert_eq!(sniff_content_type(b"plain words\n"), "text/plain; charset=utf-8");
    assert_eq!(sniff_content_type(b""), "text/plain; charset=utf-8");
    assert_eq!(sniff_content_type(&[0x00, 0x01, 0x02]), "application/octet-stream");
}

#[tokio::test]
async fn open_file_uses_extension_first() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"not really a png").unwrap();

    let meta = MetaData::from([("Color".to_string(), "blue".to_string())]);
    let (info, _handle) = open_file(file.path(), meta).await.unwrap();

    assert_eq!(info.size, 16);
    assert_eq!(info.content_type(), "image/png");
    assert_eq!(info.meta_data().get("Color").map(String::as_str), Some("blue"));
}

#[tokio::test]
async fn open_file_sniffs_and_rewinds() {
    let content = random_bytes(2048);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&content).unwrap();

    let (info, mut handle) = open_file(file.path(), MetaData::new()).await.unwrap();
    assert_eq!(info.content_type(), "application/octet-stream");
    assert_eq!(info.size, 2048);

    // 嗅探后句柄已回到开头
    let mut read_back = Vec::new();
    handle.read_to_end(&mut read_back).await.unwrap();
    assert_eq!(read_back, content);
}

#[tokio::test]
async fn open_missing_file_is_io_error() {
    let err = open_file("/definitely/not/here.bin", MetaData::new())
        .await
        .unwrap_err();
    assert!(matches!(err, crate::ReplicaError::Io(_)));
}

#[tokio::test]
async fn upload_file_streams_content() {
    let (server, client) = mock_client().await;
    let content = random_bytes(70_000);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&content).unwrap();

    Mock::given(method("PUT"))
        .and(path("/json/one/test"))
        .and(header("content-type", "application/octet-stream"))
        .and(header("content-length", "70000"))
        .and(header("x-replica-count", "1"))
        .and(header("x-meta-animal", "bird"))
        .and(body_bytes(content.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let meta = MetaData::from([("animal".to_string(), "bird".to_string())]);
    client
        .upload_file("one/test", file.path(), meta, 1)
        .await
        .unwrap();
}
