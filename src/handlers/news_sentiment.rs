//! 新闻情绪接口
//!
//! POST /api/news-sentiment，所有参数可选

use actix_web::{web, HttpResponse, Result};

use super::respond;
use crate::models::{non_empty, NewsSentimentBody, NewsSentimentParams, OperationRequest};
use crate::services::alphavantage::AlphaVantageService;

pub async fn get_news_sentiment(
    service: web::Data<AlphaVantageService>,
    body: web::Json<NewsSentimentBody>,
) -> Result<HttpResponse> {
    let request = OperationRequest::news_sentiment(NewsSentimentParams {
        tickers: non_empty(&body.tickers),
        topics: non_empty(&body.topics),
        time_from: non_empty(&body.time_from),
        time_to: non_empty(&body.time_to),
        sort: non_empty(&body.sort),
    });

    Ok(respond("News sentiment", service.execute(&request).await))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/news-sentiment", web::post().to(get_news_sentiment));
}
