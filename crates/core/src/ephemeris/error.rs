use thiserror::Error;

use crate::common::Body;

/// # Summary
/// 星历域错误枚举，处理数据目录不可用与单个天体计算失败。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum EphemerisError {
    // 星历数据目录缺失或不可读
    #[error("Ephemeris data unavailable at {path}: {message}")]
    DataUnavailable { path: String, message: String },
    // 单个天体位置计算失败
    #[error("Failed to calculate position for {body}: {message}")]
    CalculationFailed { body: Body, message: String },
}
