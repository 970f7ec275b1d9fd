//! 上传前读取本地文件：大小、Content-Type 和可读句柄。

use std::io::SeekFrom;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::debug;

use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::structs::{FileInfo, MetaData};

/// 内容嗅探最多读取的字节数
const SNIFF_LEN: usize = 512;

/// 打开本地文件，返回上传用的资源描述和已回到开头的文件句柄
///
/// Content-Type 优先按扩展名判断，无法判断时读取前 512 字节嗅探。
pub async fn open_file(
    path: impl AsRef<Path>,
    meta: MetaData,
) -> Result<(FileInfo, File), ReplicaError> {
    let path = path.as_ref();
    let size = tokio::fs::metadata(path).await?.len();
    let mut file = File::open(path).await?;

    let content_type = match mime_guess::from_path(path).first_raw() {
        Some(by_ext) => by_ext,
        None => {
            let mut head = Vec::with_capacity(SNIFF_LEN);
            (&mut file).take(SNIFF_LEN as u64).read_to_end(&mut head).await?;
            file.seek(SeekFrom::Start(0)).await?;
            sniff_content_type(&head)
        }
    };
    debug!(path = %path.display(), size, content_type, "本地文件已打开");

    let info = FileInfo::new_upload(size, content_type).with_meta_data(meta);
    Ok((info, file))
}

/// 文件头签名表
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b\x08", "application/x-gzip"),
];

/// 根据内容开头的字节判断 Content-Type
///
/// 先匹配常见文件签名和 html/xml 文本，再按是否含二进制控制字符
/// 区分纯文本与 `application/octet-stream`。
pub fn sniff_content_type(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some((_, mime)) =
        SIGNATURES.iter().find(|(magic, _)| data.starts_with(magic))
    {
        return *mime;
    }

    let text = data.trim_ascii_start();
    if starts_with_ignore_case(text, b"<!doctype html")
        || starts_with_ignore_case(text, b"<html")
    {
        return "text/html; charset=utf-8";
    }
    if text.starts_with(b"<?xml") {
        return "text/xml; charset=utf-8";
    }

    if data.iter().any(|b| is_binary_byte(*b)) {
        "application/octet-stream"
    } else {
        "text/plain; charset=utf-8"
    }
}

fn starts_with_ignore_case(data: &[u8], prefix: &[u8]) -> bool {
    data.len() >= prefix.len() && data[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f)
}
