//! # `horoscope-core` - 领域核心
//!
//! 本 crate 只包含实体、端口 (Trait) 与错误定义，不依赖任何具体的星历实现或 Web 框架。
//!
//! ## 模块划分
//! - `common`: 天体、星座等基础枚举，以及时间规整与坐标格式化
//! - `chart`: 出生查询、星盘结果等实体与错误
//! - `ephemeris`: 星历计算端口 (Port)，由 `horoscope-ephem` 等适配器实现
//! - `config`: 全局应用配置

pub mod chart;
pub mod common;
pub mod config;
pub mod ephemeris;

#[cfg(feature = "test-utils")]
pub mod testing;
