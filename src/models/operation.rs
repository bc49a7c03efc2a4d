//! Alpha Vantage 接口模型
//!
//! 每个上游能力对应一个 `Operation`，每类接口有各自的参数结构，
//! 参数键在编译期就是确定的

use std::fmt;
use std::str::FromStr;

/// 上游接口分类，决定哪个路由可以调用哪些 function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFamily {
    TimeSeries,
    Fundamentals,
    NewsSentiment,
    SymbolSearch,
}

/// 上游能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    TimeSeriesIntraday,
    TimeSeriesDaily,
    TimeSeriesWeekly,
    TimeSeriesMonthly,
    Overview,
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    Earnings,
    InsiderTransactions,
    NewsSentiment,
    SymbolSearch,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::TimeSeriesIntraday,
        Operation::TimeSeriesDaily,
        Operation::TimeSeriesWeekly,
        Operation::TimeSeriesMonthly,
        Operation::Overview,
        Operation::IncomeStatement,
        Operation::BalanceSheet,
        Operation::CashFlow,
        Operation::Earnings,
        Operation::InsiderTransactions,
        Operation::NewsSentiment,
        Operation::SymbolSearch,
    ];

    /// 上游 `function` 参数取值
    pub const fn function_name(&self) -> &'static str {
        match self {
            Operation::TimeSeriesIntraday => "TIME_SERIES_INTRADAY",
            Operation::TimeSeriesDaily => "TIME_SERIES_DAILY",
            Operation::TimeSeriesWeekly => "TIME_SERIES_WEEKLY",
            Operation::TimeSeriesMonthly => "TIME_SERIES_MONTHLY",
            Operation::Overview => "OVERVIEW",
            Operation::IncomeStatement => "INCOME_STATEMENT",
            Operation::BalanceSheet => "BALANCE_SHEET",
            Operation::CashFlow => "CASH_FLOW",
            Operation::Earnings => "EARNINGS",
            Operation::InsiderTransactions => "INSIDER_TRANSACTIONS",
            Operation::NewsSentiment => "NEWS_SENTIMENT",
            Operation::SymbolSearch => "SYMBOL_SEARCH",
        }
    }

    pub const fn family(&self) -> OperationFamily {
        match self {
            Operation::TimeSeriesIntraday
            | Operation::TimeSeriesDaily
            | Operation::TimeSeriesWeekly
            | Operation::TimeSeriesMonthly => OperationFamily::TimeSeries,
            Operation::Overview
            | Operation::IncomeStatement
            | Operation::BalanceSheet
            | Operation::CashFlow
            | Operation::Earnings
            | Operation::InsiderTransactions => OperationFamily::Fundamentals,
            Operation::NewsSentiment => OperationFamily::NewsSentiment,
            Operation::SymbolSearch => OperationFamily::SymbolSearch,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// 无法识别的 function 名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.function_name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// 查询参数来源
///
/// 返回 (参数名, 可选值)，值为 `None` 的参数不会出现在出站请求中
pub trait QueryParameters {
    fn entries(&self) -> Vec<(&'static str, Option<String>)>;
}

/// 时间序列参数
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesParams {
    pub symbol: Option<String>,
    /// 仅日内数据使用，如 5min
    pub interval: Option<String>,
    /// compact 或 full
    pub outputsize: Option<String>,
}

impl QueryParameters for TimeSeriesParams {
    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("symbol", self.symbol.clone()),
            ("interval", self.interval.clone()),
            ("outputsize", self.outputsize.clone()),
        ]
    }
}

/// 基本面参数
#[derive(Debug, Clone, Default)]
pub struct FundamentalsParams {
    pub symbol: Option<String>,
}

impl QueryParameters for FundamentalsParams {
    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("symbol", self.symbol.clone())]
    }
}

/// 新闻情绪参数
#[derive(Debug, Clone, Default)]
pub struct NewsSentimentParams {
    /// 逗号分隔的股票代码
    pub tickers: Option<String>,
    pub topics: Option<String>,
    /// YYYYMMDDTHHMM
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    /// LATEST / EARLIEST / RELEVANCE
    pub sort: Option<String>,
}

impl QueryParameters for NewsSentimentParams {
    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("tickers", self.tickers.clone()),
            ("topics", self.topics.clone()),
            ("time_from", self.time_from.clone()),
            ("time_to", self.time_to.clone()),
            ("sort", self.sort.clone()),
        ]
    }
}

/// 代码搜索参数
#[derive(Debug, Clone, Default)]
pub struct SymbolSearchParams {
    pub keywords: Option<String>,
}

impl QueryParameters for SymbolSearchParams {
    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("keywords", self.keywords.clone())]
    }
}

/// 一次上游调用的请求值对象，构造后不可修改
#[derive(Debug, Clone)]
pub struct OperationRequest {
    operation: Operation,
    parameters: Vec<(&'static str, Option<String>)>,
}

impl OperationRequest {
    pub fn new(operation: Operation, params: &impl QueryParameters) -> Self {
        Self {
            operation,
            parameters: params.entries(),
        }
    }

    pub fn time_series(operation: Operation, params: TimeSeriesParams) -> Self {
        Self::new(operation, &params)
    }

    pub fn fundamentals(operation: Operation, params: FundamentalsParams) -> Self {
        Self::new(operation, &params)
    }

    pub fn news_sentiment(params: NewsSentimentParams) -> Self {
        Self::new(Operation::NewsSentiment, &params)
    }

    pub fn symbol_search(params: SymbolSearchParams) -> Self {
        Self::new(Operation::SymbolSearch, &params)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn parameters(&self) -> &[(&'static str, Option<String>)] {
        &self.parameters
    }
}
