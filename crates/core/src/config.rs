use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ephemeris: EphemerisConfig,
    pub chart: ChartConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 星历数据源配置
///
/// # Invariants
/// - `data_dir` 在进程启动时确定，此后只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisConfig {
    /// Swiss Ephemeris 数据目录 (`.se1` 星历文件与 `swe_deltat.txt`)
    pub data_dir: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    /// 为 true 时拒绝 |lat| > 90 或 |lng| > 180 的请求
    #[serde(default)]
    pub strict_coordinates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 默认日志级别过滤器，`RUST_LOG` 优先
    pub level: String,
    /// 滚动日志文件目录，为空则只输出到 stdout
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            data_dir: "ephe".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ephemeris: EphemerisConfig::default(),
            chart: ChartConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// 监听地址，如 `"0.0.0.0:8080"`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ephemeris.data_dir, "ephe");
        assert!(!config.chart.strict_coordinates);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let json = r#"{ "server": { "host": "127.0.0.1", "port": 9000 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.ephemeris.data_dir, "ephe");
        assert!(config.log.dir.is_none());
    }
}
