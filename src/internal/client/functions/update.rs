use reqwest::{Method, header::HeaderMap};

use crate::internal::client::headers::{META_PREFIX, REMOVE_META_PREFIX};
use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::meta_codec::encode_meta_headers;
use crate::internal::remote_file::structs::MetaData;

impl ReplicaClient {
    /// POST 请求修改元数据：`meta` 中的键被设置，`remove_meta` 中的键被删除
    pub async fn update(
        &self,
        name: &str,
        meta: &MetaData,
        remove_meta: &MetaData,
    ) -> Result<(), ReplicaError> {
        let mut headers = HeaderMap::new();
        encode_meta_headers(&mut headers, META_PREFIX, meta)?;
        encode_meta_headers(&mut headers, REMOVE_META_PREFIX, remove_meta)?;

        let builder = self.request(Method::POST, name).await?.headers(headers);
        self.execute(builder).await?;
        Ok(())
    }
}
