use crate::chart::error::ChartError;
use crate::common::geo::{Axis, from_sexagesimal, to_sexagesimal};
use crate::common::{Body, ZodiacSign};

/// 未提供姓名时的占位展示名
pub const DEFAULT_CLIENT_NAME: &str = "Client";

/// # Summary
/// 客户端提交的出生数据。
///
/// # Invariants
/// - `timezone` 必须能解析为已知时区，否则整个查询被拒绝。
/// - `name` 仅用于展示，不参与计算。
#[derive(Debug, Clone)]
pub struct BirthQuery {
    // 展示名
    pub name: String,
    // 本地日期 YYYY-MM-DD
    pub date: String,
    // 本地时间 HH:MM
    pub time: String,
    // IANA 时区名
    pub timezone: String,
    // 纬度，北为正
    pub lat: f64,
    // 经度，东为正
    pub lng: f64,
}

/// # Summary
/// 观测者地理位置，以六十进制 "度 + 半球字母 + 分" 表示。
///
/// # Invariants
/// - `lat`/`lon` 始终由文本形式解析得到，精确到角分。
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPosition {
    lat_text: String,
    lon_text: String,
    lat: f64,
    lon: f64,
}

impl GeoPosition {
    /// # Summary
    /// 由十进制度数构建地理位置。
    ///
    /// # Logic
    /// 1. 纬度、经度分别格式化为六十进制字符串。
    /// 2. 再由字符串解析回十进制度数，保证计算所用坐标与文本一致。
    ///
    /// # Arguments
    /// * `lat`: 纬度，北为正。
    /// * `lng`: 经度，东为正。
    ///
    /// # Returns
    /// 成功返回 `GeoPosition`，非有限数返回 `InvalidCoordinate`。
    pub fn from_decimal(lat: f64, lng: f64) -> Result<Self, ChartError> {
        let lat_text = to_sexagesimal(lat, Axis::Latitude)?;
        let lon_text = to_sexagesimal(lng, Axis::Longitude)?;
        Self::parse(&lat_text, &lon_text)
    }

    /// 由六十进制字符串构建，如 `("43n39", "079w23")`
    pub fn parse(lat_text: &str, lon_text: &str) -> Result<Self, ChartError> {
        Ok(Self {
            lat: from_sexagesimal(lat_text, Axis::Latitude)?,
            lon: from_sexagesimal(lon_text, Axis::Longitude)?,
            lat_text: lat_text.to_string(),
            lon_text: lon_text.to_string(),
        })
    }

    pub fn lat_text(&self) -> &str {
        &self.lat_text
    }

    pub fn lon_text(&self) -> &str {
        &self.lon_text
    }

    /// 纬度 (度)，北为正
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// 经度 (度)，东为正
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.lat_text, self.lon_text)
    }
}

/// 星历端口返回的黄道坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    // 黄经 (度)
    pub lon: f64,
    // 黄纬 (度)
    pub lat: f64,
}

/// # Summary
/// 单个天体在星盘中的位置与星座。
///
/// # Invariants
/// - `lon` 位于 [0, 360)。
/// - `sign` 与 `lon` 一致。
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPosition {
    pub body: Body,
    pub lon: f64,
    pub lat: f64,
    pub sign: ZodiacSign,
}

/// # Summary
/// 一次请求的星盘结果，按 `Body::ALL` 顺序排列。
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    pub positions: Vec<PlanetPosition>,
}

impl ChartResult {
    /// 按天体查找位置
    pub fn get(&self, body: Body) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.body == body)
    }
}
