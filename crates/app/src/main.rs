mod settings;

use std::sync::Arc;

use horoscope_api::server::{AppState, start_server};
use horoscope_chart::ChartService;
use horoscope_core::config::LogConfig;
use horoscope_core::ephemeris::port::EphemerisPort;
use horoscope_ephem::SwissEphemeris;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化具体实现组件并通过 `Arc<dyn Trait>` 注入到 `ChartService`。
///
/// # Logic
/// 1. 加载配置。
/// 2. 初始化全局日志。
/// 3. 实例化星历适配器 (基础设施层)。
/// 4. 构造应用服务层 (`ChartService`)。
/// 5. 启动 HTTP 服务，收到 Ctrl-C 后优雅退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载配置
    let explicit = std::env::var(settings::CONFIG_PATH_ENV).ok();
    let config = settings::load(explicit.as_deref())?;

    // 2. 初始化日志，guard 必须存活到进程结束
    let _guard = init_tracing(&config.log);
    info!("Horoscope service starting...");

    // 3. 实例化星历适配器
    let ephemeris: Arc<dyn EphemerisPort> = Arc::new(SwissEphemeris::new(&config.ephemeris));
    if let Err(e) = ephemeris.data_status() {
        tracing::warn!("Ephemeris data directory not readable: {}", e);
    }

    // 4. 构造应用服务层
    let chart_service = Arc::new(ChartService::new(ephemeris, config.chart.clone()));
    let state = AppState { chart_service };

    // 5. 启动服务并等待退出信号
    start_server(state, &config.bind_addr(), shutdown_signal()).await?;
    info!("Horoscope service stopped.");

    Ok(())
}

/// 控制台日志 + 可选的按日滚动文件日志，`RUST_LOG` 优先于配置中的级别
fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let (file_layer, guard) = match &log.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "horoscope.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // 无法监听信号时保持运行，由进程管理器终止
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Exiting...");
}
