use reqwest::Method;

use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::meta_codec::file_info_from_headers;
use crate::internal::remote_file::structs::FileInfo;

impl ReplicaClient {
    /// HEAD 请求获取资源描述，不读取内容
    pub async fn stat(&self, name: &str) -> Result<FileInfo, ReplicaError> {
        let builder = self.request(Method::HEAD, name).await?;
        let response = self.execute(builder).await?;

        Ok(file_info_from_headers(response.headers()))
    }
}
