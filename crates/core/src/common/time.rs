use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::chart::error::ChartError;

/// 1970-01-01T00:00:00Z 对应的儒略日
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// # Summary
/// 规整后的 UTC 时刻，交给星历计算前的唯一时间表示。
///
/// # Invariants
/// - 内部时间始终为 UTC，`offset()` 恒为 `+00:00`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInstant {
    utc: DateTime<Utc>,
}

impl NormalizedInstant {
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// 日期部分，格式 `YYYY/MM/DD`
    pub fn date(&self) -> String {
        self.utc.format("%Y/%m/%d").to_string()
    }

    /// 时间部分，格式 `HH:MM`
    pub fn time(&self) -> String {
        self.utc.format("%H:%M").to_string()
    }

    /// UTC 偏移，固定 `+00:00`
    pub fn offset(&self) -> &'static str {
        "+00:00"
    }

    /// 世界时 (UT) 儒略日
    #[allow(clippy::cast_precision_loss)]
    pub fn julian_day_ut(&self) -> f64 {
        let secs = self.utc.timestamp() as f64
            + f64::from(self.utc.timestamp_subsec_nanos()) * 1e-9;
        UNIX_EPOCH_JD + secs / 86_400.0
    }
}

impl std::fmt::Display for NormalizedInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.date(), self.time(), self.offset())
    }
}

/// # Summary
/// 按 IANA 名称解析时区。
///
/// # Returns
/// 未知时区返回 `ChartError::InvalidTimezone`。
pub fn resolve_timezone(name: &str) -> Result<Tz, ChartError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ChartError::InvalidTimezone(name.to_string()))
}

/// # Summary
/// 将本地民用日期、时间与时区转换为 UTC 时刻。
///
/// # Logic
/// 1. 解析时区，失败即 `InvalidTimezone`。
/// 2. 解析 `YYYY-MM-DD` 日期与 `HH:MM[:SS]` 时间，组成无时区的本地时间。
/// 3. 挂载时区：歧义时刻 (夏令时回拨) 取较早者；
///    不存在的时刻 (夏令时跳变空档) 按跳变前的偏移解释。
/// 4. 转换到 UTC。
///
/// # Arguments
/// * `date`: 本地日期。
/// * `time`: 本地 24 小时制时间。
/// * `timezone`: IANA 时区名，如 `America/Toronto`。
///
/// # Returns
/// 成功返回 `NormalizedInstant`，输入非法返回对应的客户端错误。
pub fn normalize_instant(
    date: &str,
    time: &str,
    timezone: &str,
) -> Result<NormalizedInstant, ChartError> {
    let tz = resolve_timezone(timezone)?;
    let naive = NaiveDateTime::new(parse_date(date)?, parse_time(time)?);

    let local = match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            // 空档内的本地时间：取跳变前一天的偏移
            tracing::debug!("local time {} falls in a DST gap of {}", naive, tz);
            let before = tz.offset_from_utc_datetime(&(naive - Duration::days(1)));
            let offset_secs = i64::from(before.fix().local_minus_utc());
            Utc.from_utc_datetime(&(naive - Duration::seconds(offset_secs)))
        }
    };

    Ok(NormalizedInstant::from_utc(local))
}

fn parse_date(date: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| ChartError::InvalidDate(format!("'{date}': {e}")))
}

fn parse_time(time: &str) -> Result<NaiveTime, ChartError> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|e| ChartError::InvalidTime(format!("'{time}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_passthrough() {
        let instant = normalize_instant("2000-01-01", "12:00", "UTC").unwrap();
        assert_eq!(instant.date(), "2000/01/01");
        assert_eq!(instant.time(), "12:00");
        assert_eq!(instant.offset(), "+00:00");
        assert!((instant.julian_day_ut() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_local_times_in_different_zones() {
        let toronto = normalize_instant("2024-06-01", "12:00", "America/Toronto").unwrap();
        let london = normalize_instant("2024-06-01", "17:00", "Europe/London").unwrap();
        assert_eq!(toronto, london);
        assert_eq!(toronto.time(), "16:00");
    }

    #[test]
    fn test_date_rolls_back_across_utc() {
        let instant = normalize_instant("2024-01-01", "00:30", "Asia/Tokyo").unwrap();
        assert_eq!(instant.date(), "2023/12/31");
        assert_eq!(instant.time(), "15:30");
    }

    #[test]
    fn test_seconds_are_accepted() {
        let instant = normalize_instant("1990-05-17", "08:15:30", "UTC").unwrap();
        assert_eq!(instant.utc().format("%H:%M:%S").to_string(), "08:15:30");
    }

    #[test]
    fn test_dst_gap_uses_offset_before_transition() {
        // 02:30 在纽约 2024-03-10 不存在，按 EST (-05:00) 解释
        let instant = normalize_instant("2024-03-10", "02:30", "America/New_York").unwrap();
        assert_eq!(instant.time(), "07:30");
    }

    #[test]
    fn test_dst_overlap_takes_earlier_instant() {
        // 01:30 在纽约 2024-11-03 出现两次，取 EDT (-04:00)
        let instant = normalize_instant("2024-11-03", "01:30", "America/New_York").unwrap();
        assert_eq!(instant.time(), "05:30");
    }

    #[test]
    fn test_invalid_timezone() {
        let err = normalize_instant("2000-01-01", "12:00", "Not/AZone").unwrap_err();
        assert!(matches!(err, ChartError::InvalidTimezone(_)));
        assert!(err.to_string().starts_with("Invalid timezone"));
    }

    #[test]
    fn test_invalid_date_and_time() {
        assert!(matches!(
            normalize_instant("2024-13-01", "12:00", "UTC"),
            Err(ChartError::InvalidDate(_))
        ));
        assert!(matches!(
            normalize_instant("2024-02-30", "12:00", "UTC"),
            Err(ChartError::InvalidDate(_))
        ));
        assert!(matches!(
            normalize_instant("2024-01-01", "25:00", "UTC"),
            Err(ChartError::InvalidTime(_))
        ));
        assert!(matches!(
            normalize_instant("2024-01-01", "noon", "UTC"),
            Err(ChartError::InvalidTime(_))
        ));
    }
}
