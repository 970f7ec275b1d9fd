use std::time::Duration;

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Replica Client v0.1";

/// 客户端配置，构造时一次性确定
#[derive(Debug, Clone)]
pub struct ReplicaClientConfig {
    /// 跳过 https 证书校验，仅对 https 地址生效
    pub insecure_tls: bool,
    /// 构造时预置的令牌，过期时间视为 0，首次 `current_token` 会走刷新
    pub preset_token: Option<String>,
    /// 单次请求的网络超时，不设置则不限制
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ReplicaClientConfig {
    fn default() -> Self {
        Self {
            insecure_tls: false,
            preset_token: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ReplicaClientConfig {
    pub fn allow_insecure_tls(mut self) -> Self {
        self.insecure_tls = true;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.preset_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
