//! 基本面接口
//!
//! POST /api/fundamentals {"symbol": "...", "function": "OVERVIEW"}
//!
//! 支持 OVERVIEW、INCOME_STATEMENT、BALANCE_SHEET、CASH_FLOW、EARNINGS、INSIDER_TRANSACTIONS

use actix_web::{web, HttpResponse, ResponseError, Result};

use super::{parse_operation, respond, SYMBOL_AND_FUNCTION_REQUIRED};
use crate::error::ProxyError;
use crate::models::{
    non_empty, FundamentalsBody, FundamentalsParams, OperationFamily, OperationRequest,
};
use crate::services::alphavantage::AlphaVantageService;

pub async fn get_fundamentals(
    service: web::Data<AlphaVantageService>,
    body: web::Json<FundamentalsBody>,
) -> Result<HttpResponse> {
    let request = match fundamentals_request(&body) {
        Ok(request) => request,
        Err(e) => return Ok(e.error_response()),
    };

    Ok(respond("Fundamentals", service.execute(&request).await))
}

fn fundamentals_request(body: &FundamentalsBody) -> Result<OperationRequest, ProxyError> {
    let (symbol, function) = match (non_empty(&body.symbol), non_empty(&body.function)) {
        (Some(symbol), Some(function)) => (symbol, function),
        _ => return Err(ProxyError::validation(SYMBOL_AND_FUNCTION_REQUIRED)),
    };
    let operation = parse_operation(&function, OperationFamily::Fundamentals)?;

    Ok(OperationRequest::fundamentals(
        operation,
        FundamentalsParams {
            symbol: Some(symbol),
        },
    ))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/fundamentals", web::post().to(get_fundamentals));
}
