//! # `horoscope-api` - HTTP API 层
//!
//! 星盘计算服务的 HTTP/REST 入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收出生数据并校验 JSON 结构
//! - 调用下层 `ChartService` 完成星盘计算
//! - 将领域模型转换为 DTO 返回给客户端

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
