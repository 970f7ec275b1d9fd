//! 远程资源描述及其与响应头之间的编解码。

pub mod meta_codec;
pub mod structs;
