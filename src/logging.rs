use std::fs;
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 控制台输出受 `RUST_LOG` 控制（默认 info）。开启文件日志时，
/// 额外写入按天轮转的 `info.*.log` 与 `error.*.log`。
///
/// 返回一个WorkerGuard向量，必须在程序运行期间保持活跃以确保日志正确刷新
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<Vec<WorkerGuard>, Box<dyn std::error::Error>> {
    let (subscriber, guards) = build_subscriber(config)?;
    subscriber.try_init()?;
    Ok(guards)
}

/// 构建订阅者但不安装为全局默认
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, Vec<WorkerGuard>), Box<dyn std::error::Error>>
{
    let mut guards = Vec::new();

    let (general_writer, error_writer) = if config.file_logging {
        fs::create_dir_all(&config.log_dir)?;

        let general = daily_appender(config, "info", config.general_log_retention_days)?;
        let (general_non_blocking, general_guard) = tracing_appender::non_blocking(general);
        guards.push(general_guard);

        let error = daily_appender(config, "error", config.error_log_retention_days)?;
        let (error_non_blocking, error_guard) = tracing_appender::non_blocking(error);
        guards.push(error_guard);

        (Some(general_non_blocking), Some(error_non_blocking))
    } else {
        (None, None)
    };

    let general_layer = general_writer.map(|writer: NonBlocking| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false) // 在文件日志中禁用ANSI颜色
            .with_filter(filter::filter_fn(|meta| {
                // 只保留 INFO 与 WARN
                *meta.level() != Level::ERROR && *meta.level() <= Level::INFO
            }))
    });

    let error_layer = error_writer.map(|writer: NonBlocking| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter::filter_fn(|meta| *meta.level() == Level::ERROR))
    });

    let (console_non_blocking, console_guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(console_guard);

    let console_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let console_layer = fmt::layer()
        .with_writer(console_non_blocking)
        .with_filter(console_filter);

    let subscriber = tracing_subscriber::registry()
        .with(general_layer)
        .with(error_layer)
        .with(console_layer);

    Ok((subscriber, guards))
}

fn daily_appender(
    config: &LoggingConfig,
    prefix: &str,
    retention_days: usize,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .max_log_files(retention_days)
        .build(&config.log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tracing::{error, info};

    fn read_log(dir: &Path, prefix: &str) -> String {
        let entry = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .find(|e| e.file_name().to_string_lossy().starts_with(prefix))
            .unwrap_or_else(|| panic!("no {} log file in {:?}", prefix, dir));
        fs::read_to_string(entry.path()).unwrap()
    }

    #[test]
    fn console_only_creates_no_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let config = LoggingConfig {
            log_dir: log_dir.to_string_lossy().into_owned(),
            file_logging: false,
            ..LoggingConfig::default()
        };

        let (_subscriber, guards) = build_subscriber(&config).unwrap();
        assert_eq!(guards.len(), 1);
        assert!(!log_dir.exists());
    }

    #[test]
    fn file_logging_splits_info_and_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            log_dir: dir.path().to_string_lossy().into_owned(),
            file_logging: true,
            ..LoggingConfig::default()
        };

        let (subscriber, guards) = build_subscriber(&config).unwrap();
        assert_eq!(guards.len(), 3);

        tracing::subscriber::with_default(subscriber, || {
            info!("runner warmed up");
            error!("runner exploded");
        });
        // Dropping the guards flushes the non-blocking writers
        drop(guards);

        let info_log = read_log(dir.path(), "info.");
        assert!(info_log.contains("runner warmed up"));
        assert!(!info_log.contains("runner exploded"));

        let error_log = read_log(dir.path(), "error.");
        assert!(error_log.contains("runner exploded"));
        assert!(!error_log.contains("runner warmed up"));
    }
}
