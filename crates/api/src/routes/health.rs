//! # 存活与健康检查路由控制器

use axum::Json;
use axum::extract::State;

use crate::server::AppState;
use crate::types::{HealthResponse, StatusResponse};

/// 存活探针
#[utoipa::path(
    get,
    path = "/",
    tag = "系统 (System)",
    responses(
        (status = 200, description = "服务存活", body = StatusResponse)
    )
)]
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}

/// 健康检查
///
/// 检查星历数据目录是否可读。无论结果如何都返回 200，由 `ok` 字段表达状态。
#[utoipa::path(
    get,
    path = "/health",
    tag = "系统 (System)",
    responses(
        (status = 200, description = "健康状态", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.chart_service.health() {
        Ok(()) => Json(HealthResponse { ok: true, error: None }),
        Err(e) => {
            tracing::warn!("Health check degraded: {}", e);
            Json(HealthResponse {
                ok: false,
                error: Some(e.to_string()),
            })
        }
    }
}
