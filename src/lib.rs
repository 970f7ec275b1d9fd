/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口：客户端及其配置
pub use internal::client::structs::{ReplicaClient, ReplicaClientConfig};
pub use internal::error::replica_error::ReplicaError;

pub mod address {
    use crate::internal;
    pub use internal::address::replica_address::*;
}

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::token::Token;
}

pub mod error {
    use crate::internal;
    pub use internal::error::http_error::HttpError;
    pub use internal::error::replica_error::ReplicaError;
}

pub mod client {
    use crate::internal;
    pub use internal::client::enums::DeleteMode;
    pub use internal::client::headers;
    pub use internal::client::structs::client_config::DEFAULT_USER_AGENT;
    pub use internal::client::structs::{ReplicaClient, ReplicaClientConfig};
}

pub mod remote_file {
    use crate::internal;
    // 结构体模型
    pub use internal::remote_file::structs::*;
}

/// 上传前读取本地文件的辅助函数
pub mod local_file {
    use crate::internal;
    pub use internal::entrance::local::*;
}

pub mod states {
    use crate::internal;
    pub use internal::states::swap_cell::SwapCell;
}
