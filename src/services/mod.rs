//! 业务逻辑服务模块
//!
//! 封装上游数据获取和响应处理逻辑

pub mod alphavantage; // Alpha Vantage 数据服务
