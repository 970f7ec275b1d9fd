//! 服务端错误响应的解析与分类。

use reqwest::Response;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::replica_error::ReplicaError;

/// 服务端返回的 HTTP 错误（状态码 >= 400）
///
/// 错误响应体约定为 `{"error_code": int, "error_message": string}`，
/// 不符合约定时以原始响应体作为信息。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("HTTP 错误: 状态码 {code}，信息: {message}")]
pub struct HttpError {
    #[serde(rename = "error_code")]
    code: u16,
    #[serde(rename = "error_message", default)]
    message: String,
}

impl HttpError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// 由状态码和响应体构造错误。
    ///
    /// 只有响应体能解析为约定的 JSON 且其中的状态码与实际状态码一致时，
    /// 才采用其中的信息；否则以实际状态码和去掉换行的原始响应体为准。
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<HttpError>(body) {
            Ok(decoded) if decoded.code == status => decoded,
            _ => Self {
                code: status,
                message: String::from_utf8_lossy(body).replace('\n', ""),
            },
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 统一校验响应：状态码小于 400 时原样返回响应。
///
/// 错误时会读完并释放响应体；读取失败返回 [`ReplicaError::BodyRead`]。
pub(crate) async fn check_response(
    response: Response,
) -> Result<Response, ReplicaError> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.bytes().await.map_err(ReplicaError::BodyRead)?;
    let err = HttpError::from_body(status, &body);
    warn!(url = %url, code = err.code(), message = %err.message(), "服务端返回错误");

    Err(err.into())
}
