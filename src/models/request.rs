//! 路由入参模型
//!
//! 前端对未填写的字段会发送空字符串，统一按“未设置”处理

use serde::Deserialize;

/// 空字符串视为未设置
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

/// POST /api/fundamentals
#[derive(Debug, Default, Deserialize)]
pub struct FundamentalsBody {
    pub symbol: Option<String>,
    pub function: Option<String>,
}

/// POST /api/timeseries
#[derive(Debug, Default, Deserialize)]
pub struct TimeSeriesBody {
    pub symbol: Option<String>,
    pub function: Option<String>,
    pub interval: Option<String>,
    pub outputsize: Option<String>,
}

/// POST /api/news-sentiment
#[derive(Debug, Default, Deserialize)]
pub struct NewsSentimentBody {
    pub tickers: Option<String>,
    pub topics: Option<String>,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    pub sort: Option<String>,
}

/// GET /api/symbol-search?q=
#[derive(Debug, Default, Deserialize)]
pub struct SymbolSearchQuery {
    pub q: Option<String>,
}
