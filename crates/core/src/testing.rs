//! 测试替身：固定输出的星历端口，供上层 crate 在无数据目录时测试。

use std::collections::HashMap;

use crate::chart::entity::{EclipticPosition, GeoPosition};
use crate::common::Body;
use crate::common::time::NormalizedInstant;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::port::EphemerisPort;

/// # Summary
/// 为每个天体返回预设坐标的星历实现。
///
/// # Invariants
/// - 未预设的天体返回 `CalculationFailed`。
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    positions: HashMap<Body, EclipticPosition>,
    data_error: Option<String>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有天体均落在同一黄经
    pub fn uniform(lon: f64, lat: f64) -> Self {
        let mut fixed = Self::new();
        for body in Body::ALL {
            fixed = fixed.with(body, lon, lat);
        }
        fixed
    }

    pub fn with(mut self, body: Body, lon: f64, lat: f64) -> Self {
        self.positions.insert(body, EclipticPosition { lon, lat });
        self
    }

    /// 让 `data_status` 报告指定错误
    pub fn with_data_error(mut self, message: impl Into<String>) -> Self {
        self.data_error = Some(message.into());
        self
    }
}

impl EphemerisPort for FixedEphemeris {
    fn position(
        &self,
        body: Body,
        _instant: &NormalizedInstant,
        _geo: &GeoPosition,
    ) -> Result<EclipticPosition, EphemerisError> {
        self.positions
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                message: "no fixed position".to_string(),
            })
    }

    fn data_status(&self) -> Result<(), EphemerisError> {
        match &self.data_error {
            Some(message) => Err(EphemerisError::DataUnavailable {
                path: "<fixed>".to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
