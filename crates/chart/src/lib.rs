//! # `horoscope-chart` - 星盘构建服务
//!
//! 串联请求校验、时间规整、坐标格式化与星历查询，产出按固定天体顺序排列的星盘。

pub mod service;

pub use service::ChartService;
