use reqwest::{
    Method,
    header::{HeaderMap, HeaderValue},
};
use tracing::info;

use crate::internal::address::replica_address::TOKEN_ENDPOINT;
use crate::internal::auth::structs::token::Token;
use crate::internal::client::headers::{X_AUTH_PASSWORD, X_AUTH_USER};
use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;

impl ReplicaClient {
    /// 使用账号密码获取令牌，成功后整体替换缓存的令牌
    ///
    /// 总是会请求认证接口；失败时缓存中的旧令牌保持不变。
    pub async fn acquire_token(
        &self,
        user: &str,
        password: &str,
    ) -> Result<Token, ReplicaError> {
        let mut headers = HeaderMap::new();
        headers.insert(X_AUTH_USER, auth_header(X_AUTH_USER.as_str(), user)?);
        headers.insert(
            X_AUTH_PASSWORD,
            auth_header(X_AUTH_PASSWORD.as_str(), password)?,
        );

        self.fetch_token(headers).await
    }

    /// 请求认证接口并解析令牌，解析成功才写入缓存
    pub(crate) async fn fetch_token(
        &self,
        headers: HeaderMap,
    ) -> Result<Token, ReplicaError> {
        let builder =
            self.request(Method::GET, TOKEN_ENDPOINT).await?.headers(headers);
        let response = self.execute(builder).await?;

        let body = response.bytes().await?;
        let token: Token = serde_json::from_slice(&body)?;
        if token.is_empty() {
            return Err(ReplicaError::Decode(serde::de::Error::custom(
                "认证接口返回了空令牌",
            )));
        }

        self.token.replace(token.clone()).await;
        info!(
            fingerprint = %token.fingerprint(),
            expires = token.expires(),
            "令牌已更新"
        );

        Ok(token)
    }
}

pub(crate) fn auth_header(
    name: &str,
    value: &str,
) -> Result<HeaderValue, ReplicaError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| ReplicaError::invalid_header(name, e))?;
    value.set_sensitive(true);
    Ok(value)
}
