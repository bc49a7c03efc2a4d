//! Alpha Vantage 代理后端
//!
//! 为前端看板提供同源 JSON 接口，转发到 Alpha Vantage 并统一错误格式
//! 数据来源：https://www.alphavantage.co

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 上游数据服务

use actix_web::{web, App, HttpServer, middleware::Logger};
use env_logger::Env;

use crate::config::AppConfig;
use crate::middleware::AccessTokenMiddleware;
use crate::services::alphavantage::AlphaVantageService;

/// 应用程序入口
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化日志系统，默认日志级别为 info，可通过 RUST_LOG 调整
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load();

    let service = AlphaVantageService::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    if !service.has_api_key() {
        log::warn!("未设置 {} 环境变量，数据接口将返回错误", crate::config::API_KEY_ENV);
    }
    if config.api.access_token.is_empty() {
        log::info!("未配置访问令牌，入站认证已关闭");
    }

    let service = web::Data::new(service);
    let access_token = config.api.access_token.clone();
    let bind_addr = config.bind_addr();

    log::info!("启动 Alpha Vantage 代理服务，监听 {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(AccessTokenMiddleware::new(access_token.clone())) // 访问令牌认证
            .wrap(Logger::default()) // 添加请求日志中间件
            .app_data(service.clone())
            .configure(handlers::config) // 配置路由
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await
}
