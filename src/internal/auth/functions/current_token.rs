use reqwest::header::HeaderMap;

use crate::internal::auth::structs::token::Token;
use crate::internal::client::headers::X_AUTH_TOKEN;
use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;

use super::acquire_token::auth_header;

impl ReplicaClient {
    /// 获取当前令牌
    ///
    /// - 从未设置或为空：返回 [`ReplicaError::TokenNotSet`]
    /// - 仍在有效期内：直接返回缓存，不发请求
    /// - 已过期：用缓存的令牌请求认证接口换取新令牌
    pub async fn current_token(&self) -> Result<Token, ReplicaError> {
        let cached = self.token.get_current().await;
        if cached.is_empty() {
            return Err(ReplicaError::TokenNotSet);
        }
        if cached.is_valid() {
            return Ok(Token::clone(&cached));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            X_AUTH_TOKEN,
            auth_header(X_AUTH_TOKEN.as_str(), cached.as_str())?,
        );

        self.fetch_token(headers).await
    }
}
