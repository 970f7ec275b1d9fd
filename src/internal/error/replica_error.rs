//! 客户端统一错误类型。

use thiserror::Error;

use super::http_error::HttpError;

/// 客户端所有操作的错误。
///
/// 只有 [`ReplicaError::Http`] 带有可供程序判断的结构化字段（状态码），
/// 其余变体都视为不透明的失败，直接返回给调用方，内部不做任何重试。
#[derive(Debug, Error)]
pub enum ReplicaError {
    #[error("无效的服务地址 {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("HTTP 请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("JSON 解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("令牌未设置")]
    TokenNotSet,

    /// 读取错误响应体时发生 I/O 失败，不会被并入 HTTP 错误。
    #[error("读取错误响应体失败: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("无效的请求头 {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("本地文件读取失败: {0}")]
    Io(#[from] std::io::Error),
}

impl ReplicaError {
    pub(crate) fn invalid_address(
        address: &str,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_header(name: &str, reason: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 服务端返回的状态码，非 HTTP 错误时为 `None`
    pub fn http_code(&self) -> Option<u16> {
        match self {
            Self::Http(err) => Some(err.code()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.http_code() == Some(404)
    }
}
