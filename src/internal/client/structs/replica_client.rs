use core::fmt;

use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::HeaderValue,
};
use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

use crate::internal::address::replica_address::ReplicaAddress;
use crate::internal::auth::structs::token::Token;
use crate::internal::client::headers::X_AUTH_TOKEN;
use crate::internal::error::http_error::check_response;
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::states::swap_cell::SwapCell;

use super::client_config::ReplicaClientConfig;

/// replica 服务客户端
///
/// 所有公开操作（查询、读取、创建、删除、更新、认证）都经由
/// [`ReplicaClient::request`] 组装、[`ReplicaClient::execute`] 发送并统一校验响应。
///
/// 可在多个任务间共享（放进 `Arc` 即可），唯一的共享可变状态是缓存的令牌。
pub struct ReplicaClient {
    address: ReplicaAddress,
    config: ReplicaClientConfig,
    pub(crate) token: SwapCell<Token>,
    http: OnceCell<Client>, // 首次请求时构建，之后复用连接池
}

impl ReplicaClient {
    /// 使用默认配置创建客户端
    pub fn new(address: &str) -> Result<Self, ReplicaError> {
        Self::with_config(address, ReplicaClientConfig::default())
    }

    pub fn with_config(
        address: &str,
        config: ReplicaClientConfig,
    ) -> Result<Self, ReplicaError> {
        let address = ReplicaAddress::parse(address)?;

        let token = match config.preset_token.as_deref() {
            Some(preset) => Token::new(preset, 0),
            None => Token::default(),
        };

        Ok(Self {
            address,
            config,
            token: SwapCell::new(token),
            http: OnceCell::new(),
        })
    }

    /// 规范化后的服务地址
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn config(&self) -> &ReplicaClientConfig {
        &self.config
    }

    /// 懒加载的 http 客户端
    async fn http(&self) -> Result<&Client, ReplicaError> {
        self.http
            .get_or_try_init(|| async {
                let mut builder = Client::builder()
                    .http1_only()
                    .user_agent(self.config.user_agent.as_str());

                if self.address.is_https() && self.config.insecure_tls {
                    builder = builder.danger_accept_invalid_certs(true);
                }
                if let Some(timeout) = self.config.timeout {
                    builder = builder.timeout(timeout);
                }

                builder.build().map_err(ReplicaError::Transport)
            })
            .await
    }

    pub(crate) fn join_url(&self, name: &str) -> String {
        self.address.join(name)
    }

    /// 组装指定方法和资源路径的请求
    pub(crate) async fn request(
        &self,
        method: Method,
        name: &str,
    ) -> Result<RequestBuilder, ReplicaError> {
        let raw = self.join_url(name);
        let url =
            Url::parse(&raw).map_err(|e| ReplicaError::invalid_address(&raw, e))?;

        Ok(self.http().await?.request(method, url))
    }

    /// 发送请求并统一校验响应。
    ///
    /// 缓存中有非空令牌时总是附带 `X-Auth-Token`，这里只读缓存，不会触发刷新。
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
    ) -> Result<Response, ReplicaError> {
        let mut request = builder.build()?;

        let token = self.token.get_current().await;
        if !token.is_empty() && !request.headers().contains_key(X_AUTH_TOKEN) {
            let value = HeaderValue::from_str(token.as_str()).map_err(|e| {
                ReplicaError::invalid_header(X_AUTH_TOKEN.as_str(), e)
            })?;
            request.headers_mut().insert(X_AUTH_TOKEN, value);
        }

        debug!(method = %request.method(), url = %request.url(), "发送请求");

        let response = self.http().await?.execute(request).await?;
        check_response(response).await
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for ReplicaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplicaClient")
            .field("address", &self.address.as_str())
            .field("config", &"<config with hidden token>")
            .finish()
    }
}
