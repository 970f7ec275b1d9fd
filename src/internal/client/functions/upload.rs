use std::path::Path;

use reqwest::Body;
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::internal::client::structs::ReplicaClient;
use crate::internal::entrance::local::open_file;
use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::structs::MetaData;

impl ReplicaClient {
    /// 读取本地文件并流式上传到 `name`
    pub async fn upload_file(
        &self,
        name: &str,
        local_path: impl AsRef<Path>,
        meta: MetaData,
        replica_count: u32,
    ) -> Result<(), ReplicaError> {
        let (info, file) = open_file(local_path, meta).await?;
        let info = info.with_replica_count(replica_count);
        debug!(
            name = name,
            size = info.size,
            content_type = %info.content_type(),
            "开始上传"
        );

        let body = Body::wrap_stream(ReaderStream::new(file));
        self.create_file(name, &info, Some(body)).await
    }
}
