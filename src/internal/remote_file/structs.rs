pub mod file_info;
pub mod remote_stream;
pub mod resource;

pub use file_info::{FileInfo, MetaData, sort_listing};
pub use remote_stream::RemoteStream;
pub use resource::Resource;
