use core::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 认证令牌
///
/// 对应认证接口返回的 `{"auth_token": "...", "expires": 1700000000}`，
/// `expires` 为 Unix 秒级时间戳。
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "auth_token")]
    token: String,
    #[serde(default)]
    expires: i64,
}

impl Token {
    pub fn new(token: impl Into<String>, expires: i64) -> Self {
        Self { token: token.into(), expires }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn expires(&self) -> i64 {
        self.expires
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// 当前时间严格早于过期时间时有效
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now().timestamp())
    }

    pub fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires
    }

    /// 令牌的 SHA-256 指纹（前 12 位），用于日志和调试输出
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.token.as_bytes());
        let mut hex = format!("{:x}", hasher.finalize());
        hex.truncate(12);
        hex
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("fingerprint", &self.fingerprint())
            .field("expires", &self.expires)
            .finish()
    }
}
