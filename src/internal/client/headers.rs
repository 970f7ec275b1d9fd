//! 协议中使用的自定义请求头和响应头。

use reqwest::header::HeaderName;

pub const X_AUTH_TOKEN: HeaderName = HeaderName::from_static("x-auth-token");
pub const X_AUTH_USER: HeaderName = HeaderName::from_static("x-auth-user");
pub const X_AUTH_PASSWORD: HeaderName =
    HeaderName::from_static("x-auth-password");

pub const X_PATH: HeaderName = HeaderName::from_static("x-path");
pub const X_OWNER: HeaderName = HeaderName::from_static("x-owner");
pub const X_TYPE: HeaderName = HeaderName::from_static("x-type");
pub const X_LENGTH: HeaderName = HeaderName::from_static("x-length");
pub const X_REPLICA_COUNT: HeaderName =
    HeaderName::from_static("x-replica-count");
pub const X_REMOVE_ALL: HeaderName = HeaderName::from_static("x-remove-all");

/// 设置元数据的请求头前缀
pub const META_PREFIX: &str = "X-Meta-";

/// 删除元数据的请求头前缀
pub const REMOVE_META_PREFIX: &str = "X-Remove-Meta-";

/// `X-Type` 为该值时表示目录
pub const TYPE_DIR: &str = "dir";

/// 创建目录时使用的 Content-Type
pub const CONTENT_TYPE_DIRECTORY: &str = "application/x-directory";
