use reqwest::Method;
use tracing::debug;

use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::meta_codec::is_dir_headers;
use crate::internal::remote_file::structs::{FileInfo, RemoteStream, Resource};

impl ReplicaClient {
    /// GET 请求读取资源
    ///
    /// 响应头声明为目录时解析出子项列表，否则返回文件内容流。
    /// 列表不做排序，需要时调用 [`crate::remote_file::sort_listing`]。
    pub async fn get(&self, name: &str) -> Result<Resource, ReplicaError> {
        let builder = self.request(Method::GET, name).await?;
        let response = self.execute(builder).await?;

        if !is_dir_headers(response.headers()) {
            return Ok(Resource::File(RemoteStream::new(response)));
        }

        let body = response.bytes().await?;
        // 空目录可能返回 null
        let files: Option<Vec<FileInfo>> = serde_json::from_slice(&body)?;
        let files = files.unwrap_or_default();
        debug!(name = name, count = files.len(), "目录列表已解析");

        Ok(Resource::Directory(files))
    }
}
