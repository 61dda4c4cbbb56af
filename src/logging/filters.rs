use tracing_subscriber::EnvFilter;

use crate::logging::config::LoggingConfig;

pub fn build_filter_from_config(config: &LoggingConfig) -> EnvFilter {
    // Директива уровня из конфигурации (например "dublon=info")
    let directive = config.build_filter_directive();

    // RUST_LOG, если задан, главнее конфигурации.
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => match EnvFilter::try_new(&directive) {
            Ok(filter) => filter,
            Err(e) => {
                // Некорректная директива уровня — не повод падать:
                // сообщаем и работаем на "info".
                eprintln!("Invalid log filter directive from config ('{directive}'): {e}; falling back to 'info'");
                EnvFilter::new("info")
            }
        },
    }
}
