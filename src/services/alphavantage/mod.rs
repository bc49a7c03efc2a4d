//! Alpha Vantage 数据服务模块
//!
//! - request: 出站请求构造（注入 API Key）
//! - transport: HTTP 传输
//! - normalize: 响应分类
//! - service: 组合以上三者

pub mod common;
mod normalize;
mod request;
mod service;
mod transport;

pub use service::AlphaVantageService;

#[cfg(test)]
pub(crate) use request::{Credential, RequestBuilder};
#[cfg(test)]
pub(crate) use transport::stub;
