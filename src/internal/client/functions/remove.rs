use reqwest::Method;

use crate::internal::client::enums::DeleteMode;
use crate::internal::client::headers::X_REMOVE_ALL;
use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;

impl ReplicaClient {
    /// 删除单个资源
    pub async fn remove(&self, name: &str) -> Result<(), ReplicaError> {
        self.delete(name, DeleteMode::One).await
    }

    /// 递归删除资源
    pub async fn remove_all(&self, name: &str) -> Result<(), ReplicaError> {
        self.delete(name, DeleteMode::Recursive).await
    }

    pub async fn delete(
        &self,
        name: &str,
        mode: DeleteMode,
    ) -> Result<(), ReplicaError> {
        let mut builder = self.request(Method::DELETE, name).await?;
        if let Some(marker) = mode.marker() {
            builder = builder.header(X_REMOVE_ALL, marker);
        }

        self.execute(builder).await?;
        Ok(())
    }
}
