//! 远程文件内容的字节流。

use std::path::Path;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::internal::error::replica_error::ReplicaError;
use crate::internal::remote_file::meta_codec::file_info_from_headers;

use super::file_info::FileInfo;

/// 文件内容流，持有底层响应。
///
/// 读完或 drop 后连接即被释放，调用方无需额外关闭。
#[derive(Debug)]
pub struct RemoteStream {
    response: Response,
}

impl RemoteStream {
    pub(crate) fn new(response: Response) -> Self {
        Self { response }
    }

    /// 响应头中携带的资源描述
    pub fn file_info(&self) -> FileInfo {
        file_info_from_headers(self.response.headers())
    }

    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// 读取下一段数据，读完返回 `None`
    pub async fn chunk(&mut self) -> Result<Option<Bytes>, ReplicaError> {
        Ok(self.response.chunk().await?)
    }

    /// 一次性读完全部内容
    pub async fn bytes(self) -> Result<Bytes, ReplicaError> {
        Ok(self.response.bytes().await?)
    }

    pub fn into_byte_stream(
        self,
    ) -> impl Stream<Item = Result<Bytes, ReplicaError>> {
        self.response
            .bytes_stream()
            .map(|chunk| chunk.map_err(ReplicaError::from))
    }

    /// 流式写入本地文件，返回写入的字节数
    pub async fn save_to(
        self,
        path: impl AsRef<Path>,
    ) -> Result<u64, ReplicaError> {
        let mut file = File::create(path.as_ref()).await?;
        let mut stream = self.response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(written)
    }
}
