//! 错误类型
//!
//! 所有路由共用的错误分类，最终都渲染为 `{"error": message}`

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// 代理层错误
///
/// 错误信息会原样返回给调用方，因此任何变体都不能携带 API Key
#[derive(Debug, Error)]
pub enum ProxyError {
    /// 入参缺失或非法（HTTP 400）
    #[error("{0}")]
    Validation(String),
    /// 服务端配置缺失，例如未配置 API Key
    #[error("{0}")]
    Configuration(String),
    /// 上游返回非 2xx 或网络层失败
    #[error("{0}")]
    Transport(String),
    /// 上游返回了可识别的错误、限流或权限提示
    #[error("{0}")]
    Upstream(String),
    /// 响应体无法解析为 JSON
    #[error("Failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
    /// 响应体是合法 JSON 但不是对象
    #[error("Unexpected upstream response shape: expected a JSON object, got {0}")]
    UnexpectedShape(&'static str),
}

impl ProxyError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}
