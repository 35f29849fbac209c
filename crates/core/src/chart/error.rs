use thiserror::Error;

use crate::ephemeris::error::EphemerisError;

/// # Summary
/// 星盘构建域错误枚举。
///
/// # Invariants
/// - 除 `Ephemeris` 外的变体均由客户端输入导致，API 层映射为 400。
#[derive(Error, Debug)]
pub enum ChartError {
    // 时区名无法解析为已知的 IANA 时区
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
    // 日期不是合法的 YYYY-MM-DD
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    // 时间不是合法的 HH:MM 或 HH:MM:SS
    #[error("Invalid time: {0}")]
    InvalidTime(String),
    // 坐标无法格式化或解析
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    // 严格模式下经纬度越界
    #[error("Coordinate out of range: {0}")]
    CoordinateOutOfRange(String),
    // 星历计算失败
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl ChartError {
    /// 是否由客户端输入导致
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ChartError::Ephemeris(_))
    }
}
