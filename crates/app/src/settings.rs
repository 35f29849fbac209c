//! 配置加载：内置默认值 → `config/default.toml` → `HOROSCOPE_CONFIG` 指定文件 → 环境变量。

use config::{Config, ConfigError, Environment, File};
use horoscope_core::config::AppConfig;

/// 指定额外配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "HOROSCOPE_CONFIG";

/// # Summary
/// 按优先级叠加各配置来源。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 为底，保证缺省字段可回退。
/// 2. 叠加可选的 `config/default.toml`。
/// 3. 叠加 `explicit_path` (必须存在)。
/// 4. 叠加 `HOROSCOPE__` 前缀的环境变量，`__` 分隔层级，如 `HOROSCOPE__SERVER__PORT=9000`。
///
/// # Arguments
/// * `explicit_path`: 额外配置文件路径，通常来自 `HOROSCOPE_CONFIG`。
pub fn load(explicit_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name("config/default").required(false));

    if let Some(path) = explicit_path {
        builder = builder.add_source(File::with_name(path).required(true));
    }

    builder
        .add_source(
            Environment::with_prefix("HOROSCOPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("horoscope.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9100

[ephemeris]
data_dir = "/srv/ephe"

[chart]
strict_coordinates = true
"#,
        )
        .unwrap();

        let cfg = load(path.to_str()).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.ephemeris.data_dir, "/srv/ephe");
        assert!(cfg.chart.strict_coordinates);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load(path.to_str()).is_err());
    }
}
