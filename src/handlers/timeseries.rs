//! 时间序列接口
//!
//! POST /api/timeseries {"symbol", "function", "interval"?, "outputsize"?}

use actix_web::{web, HttpResponse, ResponseError, Result};

use super::{parse_operation, respond, SYMBOL_AND_FUNCTION_REQUIRED};
use crate::error::ProxyError;
use crate::models::{non_empty, OperationFamily, OperationRequest, TimeSeriesBody, TimeSeriesParams};
use crate::services::alphavantage::AlphaVantageService;

pub async fn get_time_series(
    service: web::Data<AlphaVantageService>,
    body: web::Json<TimeSeriesBody>,
) -> Result<HttpResponse> {
    let request = match time_series_request(&body) {
        Ok(request) => request,
        Err(e) => return Ok(e.error_response()),
    };

    Ok(respond("Time series", service.execute(&request).await))
}

fn time_series_request(body: &TimeSeriesBody) -> Result<OperationRequest, ProxyError> {
    let (symbol, function) = match (non_empty(&body.symbol), non_empty(&body.function)) {
        (Some(symbol), Some(function)) => (symbol, function),
        _ => return Err(ProxyError::validation(SYMBOL_AND_FUNCTION_REQUIRED)),
    };
    let operation = parse_operation(&function, OperationFamily::TimeSeries)?;

    Ok(OperationRequest::time_series(
        operation,
        TimeSeriesParams {
            symbol: Some(symbol),
            interval: non_empty(&body.interval),
            outputsize: non_empty(&body.outputsize),
        },
    ))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/timeseries", web::post().to(get_time_series));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::handlers::{self, testing};
    use crate::services::alphavantage::common::RATE_LIMIT_MESSAGE;
    use crate::services::alphavantage::stub::StubTransport;

    async fn post(stub: Arc<StubTransport>, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(testing::service(Some(testing::TEST_KEY), stub))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/timeseries")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_intraday_forwards_optional_params() {
        let upstream = json!({
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (5min)": {"2024-01-02 16:00:00": {"4. close": "161.5"}}
        });
        let stub = Arc::new(StubTransport::new(200, upstream.to_string()));

        let (status, body) = post(
            stub.clone(),
            json!({
                "symbol": "IBM",
                "function": "TIME_SERIES_INTRADAY",
                "interval": "5min",
                "outputsize": "compact"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);

        let url = &stub.calls()[0];
        assert!(url.contains("function=TIME_SERIES_INTRADAY"));
        assert!(url.contains("interval=5min"));
        assert!(url.contains("outputsize=compact"));
    }

    #[actix_web::test]
    async fn test_unset_params_are_not_forwarded() {
        let stub = Arc::new(StubTransport::new(200, r#"{"Time Series (Daily)":{}}"#));

        let (status, _) = post(
            stub.clone(),
            json!({"symbol": "IBM", "function": "TIME_SERIES_DAILY", "interval": null, "outputsize": ""}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let url = &stub.calls()[0];
        assert!(!url.contains("interval="));
        assert!(!url.contains("outputsize="));
    }

    #[actix_web::test]
    async fn test_missing_function_rejected() {
        let stub = Arc::new(StubTransport::new(200, "{}"));
        let (status, body) = post(stub.clone(), json!({"symbol": "IBM"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Symbol and function are required"}));
        assert!(stub.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_rate_limit_note() {
        let stub = Arc::new(StubTransport::new(200, r#"{"Note": "Thank you for using Alpha Vantage!"}"#));
        let (status, body) = post(
            stub,
            json!({"symbol": "IBM", "function": "TIME_SERIES_WEEKLY"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": RATE_LIMIT_MESSAGE}));
    }

    #[actix_web::test]
    async fn test_upstream_http_failure() {
        let stub = Arc::new(StubTransport::new(404, "{}"));
        let (status, body) = post(
            stub,
            json!({"symbol": "IBM", "function": "TIME_SERIES_MONTHLY"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "API request failed: Not Found"}));
    }
}
