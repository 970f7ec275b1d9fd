use reqwest::header::HeaderValue;

/// 删除方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// 仅删除单个资源
    One,
    /// 递归删除目录及其全部内容
    Recursive,
}

impl DeleteMode {
    /// 递归删除时附带的 `X-Remove-All` 标记值
    pub fn marker(&self) -> Option<HeaderValue> {
        match self {
            DeleteMode::One => None,
            DeleteMode::Recursive => Some(HeaderValue::from_static("x")),
        }
    }
}
