//! Alpha Vantage 数据服务
//!
//! 构造请求 → 发送 → 归一化，每次调用只发一次请求，不缓存、不重试

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::normalize::normalize;
use super::request::{Credential, RequestBuilder};
use super::transport::{ReqwestTransport, Transport};
use crate::config::AppConfig;
use crate::error::ProxyError;
use crate::models::OperationRequest;

pub struct AlphaVantageService {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl AlphaVantageService {
    pub fn new(builder: RequestBuilder, transport: Arc<dyn Transport>) -> Self {
        Self { builder, transport }
    }

    /// 按配置创建，凭证在此处一次性注入
    pub fn from_config(config: &AppConfig) -> Result<Self, ProxyError> {
        let credential = config.upstream.api_key.clone().and_then(Credential::new);
        let builder = RequestBuilder::new(&config.upstream.base_url, credential)?;
        let transport = ReqwestTransport::new(
            Duration::from_secs(config.api.timeout_secs),
            Duration::from_secs(config.api.connect_timeout_secs),
        )?;

        Ok(Self::new(builder, Arc::new(transport)))
    }

    pub fn has_api_key(&self) -> bool {
        self.builder.has_credential()
    }

    pub async fn execute(&self, request: &OperationRequest) -> Result<Value, ProxyError> {
        let descriptor = self.builder.build(request)?;
        log::debug!("请求 Alpha Vantage: {}", descriptor);

        let raw = self.transport.get(descriptor).await?;
        normalize(request.operation(), raw)
    }
}
