//! 资源描述与 HTTP 头之间的编解码。
//!
//! - 元数据键在发送时加上 `X-Meta-`（删除时为 `X-Remove-Meta-`）前缀，
//!   并把第一个 ASCII 字母转成大写
//! - 接收时扫描全部 `X-Meta-*` 响应头，去掉前缀得到键，同名多值以空格连接
//! - 其余字段来自固定的响应头，数字或时间解析失败时保持零值

use chrono::{DateTime, Utc};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, LAST_MODIFIED};

use crate::internal::client::headers::{
    META_PREFIX, TYPE_DIR, X_LENGTH, X_OWNER, X_PATH, X_REPLICA_COUNT, X_TYPE,
};
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::structs::file_info::{FileInfo, MetaData};

/// 只把第一个字符转为 ASCII 大写，其余保持原样
pub(crate) fn capitalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// 规范的请求头大小写：每个 `-` 分隔的单词首字母大写，其余小写
pub(crate) fn canonical_key(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let lower = word.to_ascii_lowercase();
            capitalize_key(&lower)
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// 把元数据按前缀写入请求头，每个键一个请求头
///
/// 只有大小写不同的键（`color` / `Color`）会作为同名请求头的多个值一起发送
pub(crate) fn encode_meta_headers(
    headers: &mut HeaderMap,
    prefix: &str,
    meta: &MetaData,
) -> Result<(), ReplicaError> {
    for (key, value) in meta {
        let raw_name = format!("{prefix}{}", capitalize_key(key));
        let name = HeaderName::from_bytes(raw_name.as_bytes())
            .map_err(|e| ReplicaError::invalid_header(&raw_name, e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ReplicaError::invalid_header(&raw_name, e))?;
        headers.append(name, value);
    }
    Ok(())
}

/// 从响应头中提取全部元数据
pub(crate) fn decode_meta(headers: &HeaderMap) -> MetaData {
    let prefix = META_PREFIX.to_ascii_lowercase();
    let mut meta = MetaData::new();

    for name in headers.keys() {
        let Some(key) = name.as_str().strip_prefix(prefix.as_str()) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let value = headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join(" ");
        meta.insert(canonical_key(key), value);
    }

    meta
}

/// 从 HEAD/GET 响应头构建资源描述
pub(crate) fn file_info_from_headers(headers: &HeaderMap) -> FileInfo {
    let path = header_str(headers, &X_PATH).to_string();

    FileInfo {
        name: base_name(&path).to_string(),
        owner: header_str(headers, &X_OWNER).to_string(),
        is_dir: is_dir_headers(headers),
        size: header_str(headers, &X_LENGTH).parse().unwrap_or_default(),
        mod_time: parse_http_date(header_str(headers, &LAST_MODIFIED)),
        content_type: header_str(headers, &CONTENT_TYPE).to_string(),
        replica_count: header_str(headers, &X_REPLICA_COUNT)
            .parse()
            .unwrap_or_default(),
        meta_data: decode_meta(headers),
        path,
    }
}

/// `X-Type: dir` 表示目录
pub(crate) fn is_dir_headers(headers: &HeaderMap) -> bool {
    header_str(headers, &X_TYPE) == TYPE_DIR
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// HTTP-date（如 `Mon, 02 Jan 2006 15:04:05 GMT`），解析失败返回 `None`
fn parse_http_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// 路径最后一段，忽略结尾的 `/`
fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "" } else { "/" };
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
