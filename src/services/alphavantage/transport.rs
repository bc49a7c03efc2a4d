//! 出站传输
//!
//! `Transport` 只负责把请求发出去并取回状态码和响应体，分类交给 `normalize`

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;

use super::common::USER_AGENT;
use super::normalize::RawResponse;
use super::request::Descriptor;
use crate::error::ProxyError;

/// 传输层抽象，便于测试时替换
pub trait Transport: Send + Sync {
    fn get(&self, descriptor: Descriptor) -> BoxFuture<'_, Result<RawResponse, ProxyError>>;
}

/// 基于 reqwest 的实现
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| {
                ProxyError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, descriptor: Descriptor) -> BoxFuture<'_, Result<RawResponse, ProxyError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(descriptor.into_url())
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                return Ok(RawResponse::new(status.as_u16(), String::new()));
            }

            let body = response.text().await.map_err(transport_error)?;
            Ok(RawResponse::new(status.as_u16(), body))
        })
    }
}

/// reqwest 错误默认带完整 URL（含 apikey），必须去掉
fn transport_error(err: reqwest::Error) -> ProxyError {
    ProxyError::Transport(format!("API request failed: {}", err.without_url()))
}
