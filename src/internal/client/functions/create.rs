use reqwest::{
    Body, Method,
    header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::internal::client::headers::{
    CONTENT_TYPE_DIRECTORY, META_PREFIX, X_REPLICA_COUNT,
};
use crate::internal::client::structs::ReplicaClient;
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::meta_codec::encode_meta_headers;
use crate::internal::remote_file::structs::{FileInfo, MetaData};

impl ReplicaClient {
    /// PUT 请求创建文件
    ///
    /// `info` 提供 Content-Length、Content-Type、副本数和元数据；
    /// 副本数为 0 时不发送 `X-Replica-Count`，由服务端使用默认值。
    pub async fn create_file(
        &self,
        name: &str,
        info: &FileInfo,
        body: Option<Body>,
    ) -> Result<(), ReplicaError> {
        let mut headers = HeaderMap::new();
        if !info.content_type().is_empty() {
            let value = HeaderValue::from_str(info.content_type()).map_err(|e| {
                ReplicaError::invalid_header(CONTENT_TYPE.as_str(), e)
            })?;
            headers.insert(CONTENT_TYPE, value);
        }
        headers.insert(CONTENT_LENGTH, HeaderValue::from(info.size));
        if info.replica_count() > 0 {
            headers.insert(X_REPLICA_COUNT, HeaderValue::from(info.replica_count()));
        }
        encode_meta_headers(&mut headers, META_PREFIX, info.meta_data())?;

        let mut builder = self.request(Method::PUT, name).await?.headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        self.execute(builder).await?;
        Ok(())
    }

    /// PUT 请求创建目录
    pub async fn create_dir(
        &self,
        name: &str,
        replica_count: u32,
        meta: MetaData,
    ) -> Result<(), ReplicaError> {
        let info = FileInfo::new_upload(0, CONTENT_TYPE_DIRECTORY)
            .with_replica_count(replica_count)
            .with_meta_data(meta);

        self.create_file(name, &info, None).await
    }
}
