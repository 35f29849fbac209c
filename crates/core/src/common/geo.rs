//! 十进制度数 ↔ 六十进制 "度 + 半球字母 + 分" 字符串 (如 `43n39`、`079w23`)。

use crate::chart::error::ChartError;

/// 坐标轴，决定半球字母与度数的补零宽度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('n', 's'),
            Axis::Longitude => ('e', 'w'),
        }
    }

    fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }
}

/// # Summary
/// 将十进制度数格式化为六十进制字符串。
///
/// # Logic
/// 1. 非负值取 `n`/`e`，负值取 `s`/`w`。
/// 2. 取绝对值的整数度，余数乘 60 后四舍六入五成双得到整分。
/// 3. 分数达到 60 时进位到度。
/// 4. 纬度度数补零到 2 位，经度补零到 3 位，分始终 2 位。
///
/// # Arguments
/// * `value`: 十进制度数 (北纬、东经为正)。
/// * `axis`: 纬度或经度。
///
/// # Returns
/// 格式化结果；非有限数返回 `InvalidCoordinate`。
pub fn to_sexagesimal(value: f64, axis: Axis) -> Result<String, ChartError> {
    if !value.is_finite() {
        return Err(ChartError::InvalidCoordinate(format!("{value} is not a finite number")));
    }
    let (pos, neg) = axis.hemispheres();
    let hemi = if value >= 0.0 { pos } else { neg };
    let v = value.abs();
    let mut degrees = v.trunc();
    let mut minutes = ((v - degrees) * 60.0).round_ties_even();
    if minutes >= 60.0 {
        degrees += 1.0;
        minutes = 0.0;
    }

    Ok(format!(
        "{:0width$.0}{}{:02.0}",
        degrees,
        hemi,
        minutes,
        width = axis.degree_width()
    ))
}

/// # Summary
/// 解析六十进制字符串为十进制度数。
///
/// # Logic
/// 1. 定位唯一的半球字母，左侧为度、右侧为分。
/// 2. 分必须在 [0, 60) 内。
/// 3. `s`/`w` 取负。
///
/// # Arguments
/// * `text`: 如 `43n39`、`079w23`。
/// * `axis`: 期望的坐标轴，用于校验半球字母。
///
/// # Returns
/// 十进制度数，格式非法返回 `InvalidCoordinate`。
pub fn from_sexagesimal(text: &str, axis: Axis) -> Result<f64, ChartError> {
    let invalid = || ChartError::InvalidCoordinate(format!("malformed coordinate '{text}'"));
    let (pos, neg) = axis.hemispheres();
    let lower = text.trim().to_ascii_lowercase();

    let (idx, hemi) = lower
        .char_indices()
        .find(|(_, c)| *c == pos || *c == neg)
        .ok_or_else(invalid)?;
    let (deg_part, min_part) = (&lower[..idx], &lower[idx + 1..]);

    // 度数不设上限，只接受纯数字
    if deg_part.is_empty() || !deg_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let degrees: f64 = deg_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = min_part.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    let value = degrees + f64::from(minutes) / 60.0;
    Ok(if hemi == neg { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(to_sexagesimal(43.6532, Axis::Latitude).unwrap(), "43n39");
        assert_eq!(to_sexagesimal(-79.3832, Axis::Longitude).unwrap(), "079w23");
    }

    #[test]
    fn test_minutes_carry_into_degrees() {
        assert_eq!(to_sexagesimal(10.9999, Axis::Latitude).unwrap(), "11n00");
        assert_eq!(to_sexagesimal(-179.9999, Axis::Longitude).unwrap(), "180w00");
    }

    #[test]
    fn test_zero_and_padding() {
        assert_eq!(to_sexagesimal(0.0, Axis::Latitude).unwrap(), "00n00");
        assert_eq!(to_sexagesimal(0.0, Axis::Longitude).unwrap(), "000e00");
        assert_eq!(to_sexagesimal(-0.5, Axis::Latitude).unwrap(), "00s30");
        assert_eq!(to_sexagesimal(5.05, Axis::Longitude).unwrap(), "005e03");
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        assert_eq!(to_sexagesimal(95.5, Axis::Latitude).unwrap(), "95n30");
        assert_eq!(to_sexagesimal(-200.25, Axis::Longitude).unwrap(), "200w15");
    }

    #[test]
    fn test_huge_values_keep_every_degree() {
        assert_eq!(to_sexagesimal(4_294_967_295.5, Axis::Latitude).unwrap(), "4294967295n30");
        assert_eq!(to_sexagesimal(5e9, Axis::Latitude).unwrap(), "5000000000n00");
        assert_eq!(
            to_sexagesimal(-1e20, Axis::Longitude).unwrap(),
            "100000000000000000000w00"
        );
        assert_eq!(from_sexagesimal("5000000000n00", Axis::Latitude).unwrap(), 5e9);
        assert_eq!(
            from_sexagesimal("100000000000000000000w00", Axis::Longitude).unwrap(),
            -1e20
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(to_sexagesimal(f64::NAN, Axis::Latitude).is_err());
        assert!(to_sexagesimal(f64::INFINITY, Axis::Longitude).is_err());
    }

    #[test]
    fn test_parse() {
        assert!((from_sexagesimal("43n39", Axis::Latitude).unwrap() - 43.65).abs() < 1e-12);
        let west = from_sexagesimal("079W23", Axis::Longitude).unwrap();
        assert!((west + 79.383_333_333).abs() < 1e-6);
        assert_eq!(from_sexagesimal("00s30", Axis::Latitude).unwrap(), -0.5);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(from_sexagesimal("43e39", Axis::Latitude).is_err());
        assert!(from_sexagesimal("43n60", Axis::Latitude).is_err());
        assert!(from_sexagesimal("n39", Axis::Latitude).is_err());
        assert!(from_sexagesimal("-43.5", Axis::Latitude).is_err());
        assert!(from_sexagesimal("4.5n30", Axis::Latitude).is_err());
    }
}
