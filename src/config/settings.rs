use serde::{Deserialize, Serialize};

use config::{Config, ConfigError, Environment};

/// Размер домена по умолчанию: значения лежат в `[0, 10_000_000)`.
pub const DEFAULT_DOMAIN_BOUND: i64 = 10_000_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub bound: i64,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub input_path: String,
    pub output_path: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("bound", DEFAULT_DOMAIN_BOUND)?
            .set_default("input_path", "input.txt")?
            .set_default("output_path", "result.txt")?
            // Добавляем переменные окружения с префиксом DUBLON_
            .add_source(Environment::with_prefix("DUBLON").try_parsing(true))
            .build()?;

        // Десериализуем конфигурацию в нашу структуру
        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Число генерируемых значений; по умолчанию равно размеру домена.
    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or(self.bound as usize)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bound < 1 {
            return Err(ConfigError::Message(format!(
                "bound must be at least 1, got {}",
                self.bound
            )));
        }
        Ok(())
    }
}
