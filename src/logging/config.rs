use std::{fs, io, path::PathBuf};

/// Конфигурация логирования.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Базовый уровень, когда `RUST_LOG` не задан.
    pub level: String,
    /// Консольный слой (stderr).
    pub console_enabled: bool,
    /// ANSI-раскраска консольного слоя.
    pub console_ansi: bool,
    /// Файловый слой (неблокирующая запись через tracing-appender).
    pub file_enabled: bool,
    /// Каталог файловых логов.
    pub log_dir: PathBuf,
    /// Имя файла лога.
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_enabled: true,
            console_ansi: true,
            file_enabled: false,
            log_dir: PathBuf::from("logs"),
            file_name: "dublon.log".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Переопределения из окружения: `DUBLON_LOG_LEVEL`, `DUBLON_LOG_DIR`.
    /// Применяется до слияния флагов CLI: явный флаг главнее окружения.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("DUBLON_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(dir) = std::env::var("DUBLON_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("log level must not be empty".to_string());
        }
        Ok(())
    }

    /// Директива фильтра из конфигурации (например, "dublon=info").
    pub fn build_filter_directive(&self) -> String {
        format!("dublon={}", self.level)
    }

    /// Создаёт каталог логов, если включён файловый слой.
    pub fn ensure_log_dir(&self) -> io::Result<()> {
        if self.file_enabled {
            fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }
}
