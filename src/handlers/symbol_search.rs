//! 代码搜索接口
//!
//! GET /api/symbol-search?q=<关键字>

use actix_web::{web, HttpResponse, ResponseError, Result};

use super::{respond, QUERY_REQUIRED};
use crate::error::ProxyError;
use crate::models::{non_empty, OperationRequest, SymbolSearchParams, SymbolSearchQuery};
use crate::services::alphavantage::AlphaVantageService;

pub async fn search_symbols(
    service: web::Data<AlphaVantageService>,
    query: web::Query<SymbolSearchQuery>,
) -> Result<HttpResponse> {
    let keywords = match non_empty(&query.q) {
        Some(keywords) => keywords,
        None => return Ok(ProxyError::validation(QUERY_REQUIRED).error_response()),
    };

    let request = OperationRequest::symbol_search(SymbolSearchParams {
        keywords: Some(keywords),
    });

    Ok(respond("Symbol search", service.execute(&request).await))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/symbol-search", web::get().to(search_symbols));
}
