pub mod geo;
pub mod time;


/// # Summary
/// 参与星盘计算的天体，顺序即输出顺序。
///
/// # Invariants
/// - `Body::ALL` 固定为十个天体，从太阳到冥王星。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// 全部天体，按星盘输出顺序排列
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// 响应中使用的展示名
    pub fn display_name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// # Summary
/// 黄道十二星座，每个占黄经 30°，从白羊座 (0°) 开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// # Summary
    /// 由黄经判定星座。
    ///
    /// # Logic
    /// 1. 对 360 取非负模，使负值与超过一圈的黄经落回 [0, 360)。
    /// 2. 整除 30 得到星座序号。
    ///
    /// # Arguments
    /// * `lon`: 黄经 (度)，可以是任意有限值。
    ///
    /// # Returns
    /// 对应的星座。
    pub fn from_longitude(lon: f64) -> Self {
        // floor 结果在 [0, 12] 内，12 只会出现在 rem_euclid 舍入到 360.0 时
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (normalize_degrees(lon) / 30.0).floor() as usize;
        Self::ALL[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 将角度规整到 [0, 360)
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_boundaries() {
        for (i, sign) in ZodiacSign::ALL.iter().enumerate() {
            let boundary = i as f64 * 30.0;
            assert_eq!(ZodiacSign::from_longitude(boundary), *sign);
            assert_eq!(ZodiacSign::from_longitude(boundary + 29.999), *sign);
        }
    }

    #[test]
    fn test_sign_is_periodic() {
        let samples = [0.0, 12.5, 29.99, 45.0, 181.3, 359.999];
        for lon in samples {
            let base = ZodiacSign::from_longitude(lon);
            for k in [-3.0, -1.0, 1.0, 2.0, 10.0] {
                assert_eq!(ZodiacSign::from_longitude(lon + 360.0 * k), base, "lon={lon} k={k}");
            }
        }
    }

    #[test]
    fn test_negative_longitudes() {
        assert_eq!(ZodiacSign::from_longitude(-1.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-30.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-30.5), ZodiacSign::Aquarius);
        // rem_euclid 可能舍入到 360.0
        assert_eq!(ZodiacSign::from_longitude(-1e-18), ZodiacSign::Aries);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-18), 0.0);
    }

    #[test]
    fn test_body_order_and_names() {
        let names: Vec<&str> = Body::ALL.iter().map(|b| b.display_name()).collect();
        assert_eq!(
            names,
            [
                "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus",
                "Neptune", "Pluto"
            ]
        );
    }
}
