use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use horoscope_core::chart::entity::{EclipticPosition, GeoPosition};
use horoscope_core::common::time::NormalizedInstant;
use horoscope_core::common::{Body, normalize_degrees};
use horoscope_core::config::EphemerisConfig;
use horoscope_core::ephemeris::error::EphemerisError;
use horoscope_core::ephemeris::port::EphemerisPort;
use swisseph::swe;
use tracing::{debug, info, warn};

/// 优先读取 `.se1` 文件，缺失时由库自行退回 Moshier
const FLG_SWIEPH: u32 = 2;

/// 当前交给 C 库的数据目录。
/// C 库持有进程级全局状态，所有调用都必须在此锁内完成。
static ACTIVE_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

/// # Summary
/// 基于 Swiss Ephemeris 的星历实现，输出地心视黄经与黄纬。
///
/// # Invariants
/// - 构造完成后不可变，可被多个请求并发共享。
/// - 多个实例可指向不同数据目录，每次计算前按需切换库的星历路径。
#[derive(Debug, Clone)]
pub struct SwissEphemeris {
    data_dir: PathBuf,
}

impl SwissEphemeris {
    /// # Summary
    /// 按配置构建星历适配器，并把数据目录交给 Swiss Ephemeris。
    ///
    /// # Logic
    /// 1. 记录数据目录；目录不存在时只告警，计算照常进行。
    /// 2. 立即设置一次星历路径，使 `swe_deltat.txt` 等文件在首个请求前生效。
    pub fn new(config: &EphemerisConfig) -> Self {
        let data_dir = PathBuf::from(&config.data_dir);
        if !data_dir.is_dir() {
            warn!(
                "Ephemeris data directory {} not found, falling back to Moshier",
                data_dir.display()
            );
        }

        let ephemeris = Self { data_dir };
        ephemeris.with_library(|| ());
        info!("Swiss Ephemeris ready: data_dir={}", ephemeris.data_dir.display());
        ephemeris
    }

    /// 在全局锁内执行库调用，必要时先切换星历路径
    fn with_library<T>(&self, f: impl FnOnce() -> T) -> T {
        let mut active = ACTIVE_PATH.lock().unwrap_or_else(PoisonError::into_inner);
        if active.as_deref() != Some(self.data_dir.as_path()) {
            swe::set_ephe_path(&self.data_dir.to_string_lossy());
            debug!("Swiss Ephemeris path set to {}", self.data_dir.display());
            *active = Some(self.data_dir.clone());
        }
        f()
    }
}

impl EphemerisPort for SwissEphemeris {
    fn position(
        &self,
        body: Body,
        instant: &NormalizedInstant,
        _geo: &GeoPosition,
    ) -> Result<EclipticPosition, EphemerisError> {
        let jd_ut = instant.julian_day_ut();
        let result = self
            .with_library(|| swe::calc_ut(jd_ut, body_id(body), FLG_SWIEPH))
            .map_err(|e| EphemerisError::CalculationFailed {
                body,
                message: format!("Swiss Ephemeris error at JD {jd_ut}: {e}"),
            })?;

        let (lon, lat) = (result.out[0], result.out[1]);
        if !lon.is_finite() || !lat.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                message: format!("non-finite result at JD {jd_ut}"),
            });
        }

        Ok(EclipticPosition {
            lon: normalize_degrees(lon),
            lat,
        })
    }

    fn data_status(&self) -> Result<(), EphemerisError> {
        std::fs::read_dir(&self.data_dir)
            .map(|_| ())
            .map_err(|e| EphemerisError::DataUnavailable {
                path: self.data_dir.display().to_string(),
                message: e.to_string(),
            })
    }
}

/// Swiss Ephemeris 天体编号 (SE_SUN = 0 … SE_PLUTO = 9)
fn body_id(body: Body) -> u32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
    }
}
