//! 出站请求构造
//!
//! 把 `OperationRequest` 组装成完整的上游 URL，并在末尾追加服务端持有的 API Key

use std::fmt;

use url::Url;

use super::common::{API_KEY_PARAM, FUNCTION_PARAM, MISSING_API_KEY_MESSAGE, REDACTED};
use crate::error::ProxyError;
use crate::models::OperationRequest;

/// 上游凭证
///
/// 只在服务端持有，不实现 `Serialize`，`Debug` 输出已脱敏
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// 空白字符串视为未配置
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", REDACTED)
    }
}

/// 完整的出站请求（URL + 查询串）
///
/// 由传输层按值消费，`Display`/`Debug` 均隐藏凭证
pub struct Descriptor {
    url: Url,
}

impl Descriptor {
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn into_url(self) -> Url {
        self.url
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// 凭证替换为占位符后的 URL，用于日志
    pub fn redacted(&self) -> String {
        let pairs: Vec<(String, String)> = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| {
                if k == API_KEY_PARAM {
                    (k, REDACTED.to_string())
                } else {
                    (k, v)
                }
            })
            .collect();

        let mut url = self.url.clone();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url.to_string()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("url", &self.redacted())
            .finish()
    }
}

/// 出站请求构造器
///
/// 凭证在构造时注入，缺失时 `build` 直接失败，不会产生任何网络请求
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
    credential: Option<Credential>,
}

impl RequestBuilder {
    pub fn new(base_url: &str, credential: Option<Credential>) -> Result<Self, ProxyError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ProxyError::Configuration(format!("Invalid upstream base URL '{}': {}", base_url, e))
        })?;

        Ok(Self {
            base_url,
            credential,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// 构造出站请求
    ///
    /// 顺序：function，调用方参数（跳过 `None`），最后是 apikey
    pub fn build(&self, request: &OperationRequest) -> Result<Descriptor, ProxyError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or_else(|| ProxyError::Configuration(MISSING_API_KEY_MESSAGE.to_string()))?;

        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(FUNCTION_PARAM, request.operation().function_name());

            for (key, value) in request.parameters() {
                if let Some(value) = value {
                    query.append_pair(key, value);
                }
            }

            query.append_pair(API_KEY_PARAM, credential.expose());
        }

        Ok(Descriptor { url })
    }
}
