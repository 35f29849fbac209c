use crate::chart::entity::{EclipticPosition, GeoPosition};
use crate::common::Body;
use crate::common::time::NormalizedInstant;
use crate::ephemeris::error::EphemerisError;

/// # Summary
/// 星历计算端口，星盘服务唯一依赖的外部计算能力。
///
/// # Invariants
/// - 实现者在构造后不可变，可被多个请求并发共享。
/// - 相同输入必须产生相同输出。
pub trait EphemerisPort: Send + Sync {
    /// # Summary
    /// 计算单个天体的地心视黄经与黄纬。
    ///
    /// # Logic
    /// 1. 将 UTC 时刻换算到实现所需的时间尺度。
    /// 2. 求解天体位置并转换到当日春分点黄道坐标。
    ///
    /// # Arguments
    /// * `body`: 目标天体。
    /// * `instant`: 规整后的 UTC 时刻。
    /// * `geo`: 观测者位置。
    ///
    /// # Returns
    /// 成功返回黄经 (度，[0, 360)) 与黄纬 (度)。
    fn position(
        &self,
        body: Body,
        instant: &NormalizedInstant,
        geo: &GeoPosition,
    ) -> Result<EclipticPosition, EphemerisError>;

    /// # Summary
    /// 检查星历数据源是否可读，供健康检查使用。
    ///
    /// # Returns
    /// 可读返回 Ok，否则返回 `DataUnavailable`。
    fn data_status(&self) -> Result<(), EphemerisError>;
}
