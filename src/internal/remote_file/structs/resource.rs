use super::file_info::FileInfo;
use super::remote_stream::RemoteStream;

/// GET 的结果：文件返回字节流，目录返回子项列表
#[derive(Debug)]
pub enum Resource {
    File(RemoteStream),
    Directory(Vec<FileInfo>),
}

impl Resource {
    pub fn is_dir(&self) -> bool {
        matches!(self, Resource::Directory(_))
    }

    pub fn into_stream(self) -> Option<RemoteStream> {
        match self {
            Resource::File(stream) => Some(stream),
            Resource::Directory(_) => None,
        }
    }

    pub fn into_listing(self) -> Option<Vec<FileInfo>> {
        match self {
            Resource::File(_) => None,
            Resource::Directory(files) => Some(files),
        }
    }
}
