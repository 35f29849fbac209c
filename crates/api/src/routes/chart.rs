//! # 星盘路由控制器
//!
//! 实现 `POST /chart`：接收出生数据，返回十个天体的黄经、黄纬与星座。

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use horoscope_core::chart::entity::BirthQuery;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiErrorResponse, ChartRequest, ChartResponse};

/// 计算星盘
///
/// 本地日期与时间按所给时区换算到 UTC，再查询星历得到各天体的视黄经。
#[utoipa::path(
    post,
    path = "/chart",
    tag = "星盘 (Chart)",
    request_body = ChartRequest,
    responses(
        (status = 200, description = "成功计算星盘", body = ChartResponse),
        (status = 400, description = "输入非法", body = ApiErrorResponse),
        (status = 422, description = "请求体无法解析", body = ApiErrorResponse),
        (status = 500, description = "星历计算失败", body = ApiErrorResponse)
    )
)]
pub async fn build_chart(
    State(state): State<AppState>,
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Json(req) = payload?;
    let query = BirthQuery::from(req);
    let chart = state.chart_service.build_chart(&query)?;
    Ok(Json(chart.into()))
}
