//! 公共常量

// ==================== Alpha Vantage API 常量 ====================

/// Alpha Vantage 查询入口
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";
/// 出站请求 User-Agent
pub const USER_AGENT: &str = concat!("alphavantage-backend/", env!("CARGO_PKG_VERSION"));

/// 上游能力参数名
pub const FUNCTION_PARAM: &str = "function";
/// 凭证参数名，始终追加在查询串末尾
pub const API_KEY_PARAM: &str = "apikey";
/// 日志中替代凭证的占位符
pub const REDACTED: &str = "***";

// ==================== 上游响应字段 ====================

/// 显式错误字段
pub const ERROR_MESSAGE_FIELD: &str = "Error Message";
/// 限流提示字段
pub const NOTE_FIELD: &str = "Note";
/// 提示信息字段（新闻情绪接口用于判断权限/额度）
pub const INFORMATION_FIELD: &str = "Information";
/// `Information` 中表示参数无效的片段
pub const INVALID_INPUTS_MARKER: &str = "Invalid inputs";

// ==================== 错误信息 ====================

pub const MISSING_API_KEY_MESSAGE: &str = "Alpha Vantage API key is not configured";
pub const RATE_LIMIT_MESSAGE: &str = "API call frequency limit reached. Please try again later.";
pub const NEWS_ACCESS_MESSAGE: &str = "NEWS_SENTIMENT API access may require a premium Alpha Vantage API key, or you may have reached your daily request limit. Please check your Alpha Vantage subscription.";
