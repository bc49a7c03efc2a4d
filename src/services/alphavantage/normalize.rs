//! 上游响应归一化
//!
//! 把原始 HTTP 结果归为成功数据、传输错误或上游错误三类之一

use serde_json::Value;

use super::common::{
    ERROR_MESSAGE_FIELD, INFORMATION_FIELD, INVALID_INPUTS_MARKER, NEWS_ACCESS_MESSAGE,
    NOTE_FIELD, RATE_LIMIT_MESSAGE,
};
use crate::error::ProxyError;
use crate::models::Operation;

/// 原始传输结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    /// 状态文本取标准原因短语
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// 归一化上游响应
///
/// 1. 非 2xx 直接返回传输错误，不解析响应体
/// 2. 响应体必须是合法的 JSON 对象
/// 3. 依次检查 `Error Message`、`Note`；新闻情绪接口额外检查 `Information`
pub fn normalize(operation: Operation, raw: RawResponse) -> Result<Value, ProxyError> {
    if !raw.is_success() {
        return Err(ProxyError::Transport(format!(
            "API request failed: {}",
            raw.status_text
        )));
    }

    let payload: Value = serde_json::from_str(&raw.body)?;
    if !payload.is_object() {
        return Err(ProxyError::UnexpectedShape(kind_name(&payload)));
    }

    if let Some(message) = present(&payload, ERROR_MESSAGE_FIELD) {
        return Err(ProxyError::upstream(field_text(message)));
    }

    if present(&payload, NOTE_FIELD).is_some() {
        return Err(ProxyError::upstream(RATE_LIMIT_MESSAGE));
    }

    if operation == Operation::NewsSentiment && news_access_denied(&payload) {
        return Err(ProxyError::upstream(NEWS_ACCESS_MESSAGE));
    }

    Ok(payload)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 字段存在且非空（null、false、0、空字符串视为不存在）
fn present<'a>(payload: &'a Value, field: &str) -> Option<&'a Value> {
    payload.get(field).filter(|value| match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// 依赖上游提示文案的子串匹配，文案一旦调整就会失效
fn news_access_denied(payload: &Value) -> bool {
    payload
        .get(INFORMATION_FIELD)
        .and_then(Value::as_str)
        .map(|info| info.contains(INVALID_INPUTS_MARKER))
        .unwrap_or(false)
}
