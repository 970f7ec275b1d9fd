//! 服务地址规范化与请求路径拼接。

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use crate::internal::error::replica_error::ReplicaError;

/// 未填写地址时使用的主机
pub const DEFAULT_HOST: &str = "localhost";

/// 服务默认端口
pub const DEFAULT_PORT: u16 = 7881;

/// 文件接口统一后缀
pub const API_SUFFIX: &str = "/json";

/// 认证接口的特殊路径名，不属于文件命名空间
pub const TOKEN_ENDPOINT: &str = "token";

/// 路径中需要转义的字符，`/` 和 `%` 原样保留
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// 规范化后的服务地址。
///
/// 始终以 `http://` 或 `https://` 开头、以 [`API_SUFFIX`] 结尾，后缀前没有多余的 `/`。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplicaAddress {
    base: String,
    https: bool,
}

impl ReplicaAddress {
    /// 将用户输入的地址规范化。
    ///
    /// - 空字符串视为 `localhost`
    /// - 去掉一个结尾的 `/`
    /// - 缺少 http/https 协议时补上 `http://`
    /// - 既没有端口也没有路径时补上默认端口
    /// - 补齐 `/json` 后缀（已有则不重复）
    pub fn parse(raw: &str) -> Result<Self, ReplicaError> {
        let raw = if raw.is_empty() { DEFAULT_HOST } else { raw };
        let trimmed = raw.strip_suffix('/').unwrap_or(raw);

        let (url, addr) = match Url::parse(trimmed) {
            Ok(url) if is_http_scheme(url.scheme()) => (url, trimmed.to_string()),
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
                let prefixed = format!("http://{trimmed}");
                let url = Url::parse(&prefixed)
                    .map_err(|e| ReplicaError::invalid_address(raw, e))?;
                (url, prefixed)
            }
            Err(e) => return Err(ReplicaError::invalid_address(raw, e)),
        };

        // 协议部分统一使用解析后的小写形式
        let rest = addr.split_once("://").map(|(_, r)| r).unwrap_or(addr.as_str());
        let (authority, has_path) = match rest.find(['/', '?', '#']) {
            Some(i) => (&rest[..i], true),
            None => (rest, false),
        };
        let host = authority.rsplit('@').next().unwrap_or(authority);
        let default_port = format!(":{DEFAULT_PORT}");

        let mut base = format!("{}://{}", url.scheme(), rest);
        if !has_path && !host.contains(':') && !base.ends_with(&default_port) {
            base.push_str(&default_port);
        }
        if !base.ends_with(API_SUFFIX) {
            let len = base.trim_end_matches('/').len();
            base.truncate(len);
            base.push_str(API_SUFFIX);
        }

        Ok(Self { base, https: url.scheme() == "https" })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    pub fn is_https(&self) -> bool {
        self.https
    }

    /// 去掉 API 后缀后的根地址，认证接口挂在这里
    pub fn api_root(&self) -> &str {
        self.base.strip_suffix(API_SUFFIX).unwrap_or(&self.base)
    }

    /// 拼接资源路径。
    ///
    /// 以 `/` 开头的路径直接追加，否则用单个 `/` 连接；结尾的一个 `/` 会被去掉。
    /// 路径名恰好为 [`TOKEN_ENDPOINT`] 时指向 [`Self::api_root`] 下的认证接口。
    pub fn join(&self, name: &str) -> String {
        let root = if name == TOKEN_ENDPOINT {
            self.api_root()
        } else {
            self.as_str()
        };
        let name = name.strip_suffix('/').unwrap_or(name);
        let encoded = utf8_percent_encode(name, PATH_ENCODE_SET);

        if name.starts_with('/') {
            format!("{root}{encoded}")
        } else {
            format!("{root}/{encoded}")
        }
    }
}

impl fmt::Display for ReplicaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

impl AsRef<str> for ReplicaAddress {
    fn as_ref(&self) -> &str {
        &self.base
    }
}

/// 规范化地址并直接返回字符串形式
pub fn normalize_address(raw: &str) -> Result<String, ReplicaError> {
    ReplicaAddress::parse(raw).map(|address| address.base)
}

fn is_http_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}
