pub mod config;
mod filters;
pub mod handle;
pub mod sinks;

pub use config::LoggingConfig;
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация логирования пакетного прогона.
///
/// Составляет подписчика из консольного слоя (stderr) и, по флагу,
/// файлового слоя с неблокирующей записью. Фильтр берётся из
/// `RUST_LOG`, иначе из уровня конфигурации. Возвращённый handle
/// обязан жить до конца прогона: с ним умирает фоновый поток записи.
pub fn init_logging(
    config: LoggingConfig
) -> Result<LoggingHandle, Box<dyn std::error::Error>> {
    config.validate()?;
    config.ensure_log_dir()?;

    let env_filter = filters::build_filter_from_config(&config);
    let mut layers = Vec::new();

    // Консольный слой: stderr, чтобы не мешать отчётным строкам
    if config.console_enabled {
        layers.push(sinks::console::layer_with_config(&config));
    }

    // Файловый слой вместе с guard-ом фонового писателя
    let file_guard = if config.file_enabled {
        let (file_layer, guard) = sinks::file::layer_with_config(&config);
        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        console_enabled = config.console_enabled,
        file_enabled = config.file_enabled,
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
