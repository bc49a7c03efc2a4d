//! HTTP 路由
//!
//! 所有数据接口挂在 `/api` 下。入参缺失返回 400 和固定提示；
//! `function` 不在当前路由支持的范围内（未知名称或属于其他接口）同样在发请求前返回 400
//! `Unsupported function: <name>`，而不是转发给上游再由上游的 `Error Message` 变成 500

pub mod fundamentals;
pub mod health;
pub mod news_sentiment;
pub mod symbol_search;
pub mod timeseries;

use actix_web::{web, HttpResponse, ResponseError};
use serde_json::Value;

use crate::error::ProxyError;
use crate::models::{Operation, OperationFamily, UnknownOperation};

pub const SYMBOL_AND_FUNCTION_REQUIRED: &str = "Symbol and function are required";
pub const QUERY_REQUIRED: &str = "Query parameter is required";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .configure(health::config)
            .configure(fundamentals::config)
            .configure(timeseries::config)
            .configure(news_sentiment::config)
            .configure(symbol_search::config),
    );
}

/// 请求体解析失败时同样返回 `{"error": ...}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            ProxyError::validation(format!("Invalid request body: {}", err)).into()
        })
}

/// 解析 function 并确认属于当前路由
pub(crate) fn parse_operation(
    function: &str,
    family: OperationFamily,
) -> Result<Operation, ProxyError> {
    match function.parse::<Operation>() {
        Ok(operation) if operation.family() == family => Ok(operation),
        Ok(operation) => Err(ProxyError::validation(format!(
            "Unsupported function: {}",
            operation
        ))),
        Err(UnknownOperation(name)) => Err(ProxyError::validation(format!(
            "Unsupported function: {}",
            name
        ))),
    }
}

/// 成功透传上游 JSON，失败记录日志并返回统一错误体
pub(crate) fn respond(context: &str, result: Result<Value, ProxyError>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            log::error!("{} error: {}", context, e);
            e.error_response()
        }
    }
}
