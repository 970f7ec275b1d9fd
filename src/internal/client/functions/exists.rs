use reqwest::Method;

use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;

impl ReplicaClient {
    /// OPTIONS 请求检查资源是否存在，成功即存在；
    /// 不存在时返回的错误可用 [`ReplicaError::is_not_found`] 判断
    pub async fn exists(&self, name: &str) -> Result<(), ReplicaError> {
        let builder = self.request(Method::OPTIONS, name).await?;
        self.execute(builder).await?;
        Ok(())
    }
}
