use std::sync::Arc;

use horoscope_core::chart::entity::{BirthQuery, ChartResult, GeoPosition, PlanetPosition};
use horoscope_core::chart::error::ChartError;
use horoscope_core::common::time::normalize_instant;
use horoscope_core::common::{Body, ZodiacSign, normalize_degrees};
use horoscope_core::config::ChartConfig;
use horoscope_core::ephemeris::error::EphemerisError;
use horoscope_core::ephemeris::port::EphemerisPort;
use tracing::debug;

/// # Summary
/// `ChartService` 是星盘计算的入口，持有星历端口与星盘配置。
///
/// # Invariants
/// - 构造后不可变，通过 `Arc` 在请求间共享，无需加锁。
pub struct ChartService {
    ephemeris: Arc<dyn EphemerisPort>,
    config: ChartConfig,
}

impl ChartService {
    pub fn new(ephemeris: Arc<dyn EphemerisPort>, config: ChartConfig) -> Self {
        Self { ephemeris, config }
    }

    /// # Summary
    /// 根据出生数据构建星盘。
    ///
    /// # Logic
    /// 1. 将本地日期、时间与时区规整为 UTC 时刻。
    /// 2. 严格模式下校验经纬度范围。
    /// 3. 经纬度格式化为六十进制再解析，得到观测者位置。
    /// 4. 按 `Body::ALL` 顺序逐个查询星历，黄经规整到 [0, 360) 并判定星座。
    ///
    /// # Arguments
    /// * `query`: 客户端提交的出生数据。
    ///
    /// # Returns
    /// 成功返回十个天体的星盘；输入非法返回客户端错误，星历失败返回 `ChartError::Ephemeris`。
    pub fn build_chart(&self, query: &BirthQuery) -> Result<ChartResult, ChartError> {
        let instant = normalize_instant(&query.date, &query.time, &query.timezone)?;
        self.check_range(query.lat, query.lng)?;
        let geo = GeoPosition::from_decimal(query.lat, query.lng)?;

        debug!("Building chart for '{}' at {} ({})", query.name, instant, geo);

        let positions = Body::ALL
            .iter()
            .map(|&body| -> Result<PlanetPosition, ChartError> {
                let pos = self.ephemeris.position(body, &instant, &geo)?;
                let lon = normalize_degrees(pos.lon);
                Ok(PlanetPosition {
                    body,
                    lon,
                    lat: pos.lat,
                    sign: ZodiacSign::from_longitude(lon),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChartResult { positions })
    }

    /// 检查星历数据源是否可用
    pub fn health(&self) -> Result<(), EphemerisError> {
        self.ephemeris.data_status()
    }

    fn check_range(&self, lat: f64, lng: f64) -> Result<(), ChartError> {
        if !self.config.strict_coordinates {
            return Ok(());
        }
        if lat.abs() > 90.0 {
            return Err(ChartError::CoordinateOutOfRange(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if lng.abs() > 180.0 {
            return Err(ChartError::CoordinateOutOfRange(format!(
                "longitude {lng} outside [-180, 180]"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horoscope_core::testing::FixedEphemeris;

    fn query(lat: f64, lng: f64) -> BirthQuery {
        BirthQuery {
            name: "Test".to_string(),
            date: "2000-01-01".to_string(),
            time: "12:00".to_string(),
            timezone: "UTC".to_string(),
            lat,
            lng,
        }
    }

    #[test]
    fn test_lax_mode_passes_out_of_range_coordinates() {
        let service = ChartService::new(
            Arc::new(FixedEphemeris::uniform(10.0, 0.0)),
            ChartConfig::default(),
        );
        assert!(service.build_chart(&query(95.0, 200.0)).is_ok());
    }

    #[test]
    fn test_strict_mode_rejects_out_of_range_coordinates() {
        let service = ChartService::new(
            Arc::new(FixedEphemeris::uniform(10.0, 0.0)),
            ChartConfig {
                strict_coordinates: true,
            },
        );
        for (lat, lng) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.1), (0.0, -200.0)] {
            let err = service.build_chart(&query(lat, lng)).unwrap_err();
            assert!(matches!(err, ChartError::CoordinateOutOfRange(_)), "lat={lat} lng={lng}");
            assert!(err.is_client_error());
        }
        assert!(service.build_chart(&query(90.0, -180.0)).is_ok());
    }
}
