use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 资源元数据，键为规范化后的请求头大小写形式
pub type MetaData = BTreeMap<String, String>;

/// 远程资源（文件或目录）的描述信息
///
/// 目录列表响应体是该结构体的 JSON 数组；`content_type`、`replica_count`、
/// `meta_data` 只在上传和查询时通过请求头传递，不参与 JSON 序列化。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_dir: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_time: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub(crate) content_type: String,
    #[serde(skip)]
    pub(crate) replica_count: u32,
    #[serde(skip)]
    pub(crate) meta_data: MetaData,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

impl FileInfo {
    /// 构建一个待上传文件的描述
    pub fn new_upload(size: u64, content_type: impl Into<String>) -> Self {
        Self {
            size,
            content_type: content_type.into(),
            ..Self::default()
        }
    }

    /// 副本数，0 表示使用服务端默认值
    pub fn with_replica_count(mut self, replica_count: u32) -> Self {
        self.replica_count = replica_count;
        self
    }

    pub fn with_meta_data(mut self, meta_data: MetaData) -> Self {
        self.meta_data = meta_data;
        self
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn replica_count(&self) -> u32 {
        self.replica_count
    }

    pub fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }

    /// 列表排序规则：目录在前，同类按名称升序
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        other
            .is_dir
            .cmp(&self.is_dir)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// 按目录在前、名称升序的规则原地排序
pub fn sort_listing(files: &mut [FileInfo]) {
    files.sort_by(FileInfo::listing_cmp);
}
