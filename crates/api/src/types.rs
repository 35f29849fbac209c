//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向客户端 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use horoscope_core::chart::entity::{BirthQuery, ChartResult, DEFAULT_CLIENT_NAME};

// ============================================================
//  星盘 DTO
// ============================================================

/// 星盘计算请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChartRequest {
    /// 展示名，缺省为 "Client"
    #[serde(default = "default_name")]
    #[schema(example = "Ada")]
    pub name: String,
    /// 本地日期 YYYY-MM-DD
    #[schema(example = "1990-05-17")]
    pub date: String,
    /// 本地时间 HH:MM (也接受 HH:MM:SS)
    #[schema(example = "08:15")]
    pub time: String,
    /// IANA 时区名
    #[schema(example = "Asia/Tokyo")]
    pub timezone: String,
    /// 纬度，北为正
    #[schema(example = 35.6895)]
    pub lat: f64,
    /// 经度，东为正
    #[schema(example = 139.6917)]
    pub lng: f64,
}

fn default_name() -> String {
    DEFAULT_CLIENT_NAME.to_string()
}

impl From<ChartRequest> for BirthQuery {
    fn from(req: ChartRequest) -> Self {
        Self {
            name: req.name,
            date: req.date,
            time: req.time,
            timezone: req.timezone,
            lat: req.lat,
            lng: req.lng,
        }
    }
}

/// 单个天体的位置
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PositionResponse {
    /// 黄经 (度)，[0, 360)
    #[schema(example = 56.42)]
    pub lon: f64,
    /// 黄纬 (度)
    #[schema(example = 1.25)]
    pub lat: f64,
    /// 星座名
    #[schema(example = "Taurus")]
    pub sign: String,
}

/// 以天体名为键、保持天体顺序的位置表
#[derive(Debug, Clone, Default)]
pub struct PositionMap(pub Vec<(String, PositionResponse)>);

impl Serialize for PositionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, pos) in &self.0 {
            map.serialize_entry(name, pos)?;
        }
        map.end()
    }
}

/// 星盘计算响应体
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartResponse {
    /// 按 Sun, Moon, Mercury … Pluto 顺序排列
    #[schema(value_type = std::collections::HashMap<String, PositionResponse>)]
    pub positions: PositionMap,
}

/// 利用 impl From 惯用转换，将领域结果映射为响应 DTO
impl From<ChartResult> for ChartResponse {
    fn from(chart: ChartResult) -> Self {
        let positions = chart
            .positions
            .into_iter()
            .map(|p| {
                (
                    p.body.display_name().to_string(),
                    PositionResponse {
                        lon: p.lon,
                        lat: p.lat,
                        sign: p.sign.name().to_string(),
                    },
                )
            })
            .collect();
        Self {
            positions: PositionMap(positions),
        }
    }
}

// ============================================================
//  状态 DTO
// ============================================================

/// 根路径存活响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// 星历数据目录是否可读
    pub ok: bool,
    /// 不可读时的原因
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
//  通用响应
// ============================================================

/// 构建失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    #[schema(example = "Invalid timezone: Not/AZone")]
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
