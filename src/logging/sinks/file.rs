use tracing_appender::{non_blocking, rolling::never};
use tracing_subscriber::{fmt, registry::LookupSpan, Layer};

use crate::logging::config::LoggingConfig;

/// Файловый слой: неблокирующая запись в `log_dir/file_name`.
///
/// Guard обязан жить до конца программы, иначе хвост буфера теряется.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> (
    Box<dyn Layer<S> + Send + Sync>,
    tracing_appender::non_blocking::WorkerGuard,
)
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    // Один файл без ротации: инструмент пакетный, прогон короткоживущий.
    let file_appender = never(&config.log_dir, &config.file_name);
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    // Log formatting.
    let layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer)
        .boxed();

    (layer, guard)
}
