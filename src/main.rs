//! CLI Dublon
//!
//! Пакетный инструмент работы с дубликатами: генерирует (или читает)
//! вход, считает дубликаты, разводит их по ближайшим свободным слотам
//! домена и сохраняет результат в текстовый дамп.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use dublon::{
    init_logging, load_from_txt, save_to_txt, DuplicateCounter, DuplicateResolver, IntBuffer,
    LoggingConfig, Settings, ValueGenerator,
};

/// Основная структура CLI аргументов
///
/// Содержит параметры домена и входа, пути файлов, а также флаги
/// логирования. Значения по умолчанию берутся из конфигурации
/// (переменные окружения DUBLON_*).
#[derive(Parser)]
#[command(name = "dublon")]
#[command(author = "Dublon Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dublon - разведение дубликатов в ограниченном целочисленном домене", long_about = None)]
struct Cli {
    /// Размер домена: допустимы значения из [0, bound)
    #[arg(
        short = 'b',
        long,
        env = "DUBLON_BOUND",
        help = "Размер домена значений (по умолчанию 10000000)"
    )]
    bound: Option<i64>,
    /// Сколько значений генерировать
    #[arg(
        short = 'n',
        long,
        env = "DUBLON_COUNT",
        help = "Число генерируемых значений (по умолчанию равно размеру домена)"
    )]
    count: Option<usize>,
    /// Зерно генератора
    #[arg(
        long,
        env = "DUBLON_SEED",
        help = "Зерно генератора для воспроизводимого прогона (по умолчанию энтропия ОС)"
    )]
    seed: Option<u64>,
    /// Куда писать сгенерированный вход
    #[arg(
        short = 'i',
        long,
        env = "DUBLON_INPUT_PATH",
        help = "Файл сгенерированного входа (по умолчанию input.txt)"
    )]
    input: Option<String>,
    /// Куда писать результат
    #[arg(
        short = 'o',
        long,
        env = "DUBLON_OUTPUT_PATH",
        help = "Файл результата (по умолчанию result.txt)"
    )]
    output: Option<String>,
    /// Читать готовый дамп вместо генерации
    #[arg(
        short = 'l',
        long,
        value_name = "PATH",
        help = "Разрешить дубликаты в готовом дампе вместо генерации входа"
    )]
    load: Option<String>,
    /// Включить подробный вывод (debug)
    #[arg(short, long, help = "Включить подробный вывод для отладки")]
    verbose: bool,
    /// Подавить большинство логов (только warn/error)
    #[arg(short = 'q', long, help = "Подавить логирование (только warn/error)")]
    quiet: bool,
    /// Дублировать логи в файл
    #[arg(long, help = "Писать логи также в файл (каталог logs/)")]
    log_file: bool,
}

/// Конфигурация прогона после слияния CLI и настроек
#[derive(Debug, Clone)]
struct RunConfig {
    bound: i64,
    count: usize,
    seed: Option<u64>,
    input_path: String,
    output_path: String,
    load_path: Option<String>,
}

impl TryFrom<&Cli> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        let settings = Settings::load().context("Не удалось загрузить конфигурацию")?;

        let bound = cli.bound.unwrap_or(settings.bound);
        if bound < 1 {
            anyhow::bail!("Размер домена должен быть положительным, получен {bound}");
        }
        let count = cli.count.or(settings.count).unwrap_or(bound as usize);

        Ok(Self {
            bound,
            count,
            seed: cli.seed.or(settings.seed),
            input_path: cli.input.clone().unwrap_or(settings.input_path),
            output_path: cli.output.clone().unwrap_or(settings.output_path),
            load_path: cli.load.clone(),
        })
    }
}

/// Конфигурация логирования: окружение поверх значений по умолчанию,
/// явные флаги CLI поверх окружения.
fn logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    config.apply_env_overrides();

    // quiet имеет приоритет над verbose
    if cli.quiet {
        config.level = "warn".to_string();
    } else if cli.verbose {
        config.level = "debug".to_string();
    }
    if cli.log_file {
        config.file_enabled = true;
    }

    config
}

/// Точка входа
///
/// Разбирает аргументы, инициализирует логирование и запускает
/// конвейер; любая ошибка печатается на stderr с кодом выхода 1.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logging = init_logging(logging_config(&cli))
        .map_err(|e| anyhow::anyhow!("Ошибка инициализации логирования: {e}"))?;

    let config = RunConfig::try_from(&cli)?;
    debug!("Конфигурация прогона: {config:?}");

    match run(&config) {
        Ok(()) => {
            debug!("Прогон завершён успешно");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Конвейер: вход -> подсчёт -> разрешение -> подсчёт -> сохранение
fn run(config: &RunConfig) -> Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT"),
        build_time = env!("BUILD_TIME"),
        bound = config.bound,
        count = config.count,
        "Запуск dublon"
    );

    let mut buffer = acquire_input(config)?;

    let counter = DuplicateCounter::new(config.bound);
    let before = counter
        .count(&buffer)
        .context("Подсчёт дубликатов до разрешения")?;
    println!("Number of duplicates = {}", before.duplicates);

    let resolver = DuplicateResolver::new(config.bound);
    let started = Instant::now();
    let outcome = resolver
        .resolve(&mut buffer)
        .context("Разрешение дубликатов")?;
    let elapsed = started.elapsed();
    println!(
        "Time taken by duplicate handling procedure = {} microseconds.",
        elapsed.as_micros()
    );

    info!(
        relocated = outcome.relocated,
        unresolved = outcome.unresolved,
        elapsed_us = elapsed.as_micros() as u64,
        "Разрешение завершено"
    );
    if outcome.unresolved > 0 {
        warn!(
            unresolved = outcome.unresolved,
            "Домен исчерпан: часть дубликатов осталась в буфере"
        );
    }

    let after = counter
        .count(&buffer)
        .context("Подсчёт дубликатов после разрешения")?;
    println!("Number of duplicates = {}", after.duplicates);

    save_to_txt(&config.output_path, &buffer)
        .with_context(|| format!("Запись результата в {}", config.output_path))?;
    info!(path = %config.output_path, len = buffer.len(), "Результат сохранён");

    Ok(())
}

/// Источник буфера: готовый дамп или свежая генерация
fn acquire_input(config: &RunConfig) -> Result<IntBuffer> {
    if let Some(path) = &config.load_path {
        let buffer = load_from_txt(path, config.bound)
            .with_context(|| format!("Чтение дампа {path}"))?;
        info!(path = %path, len = buffer.len(), "Дамп загружен");
        return Ok(buffer);
    }

    let mut buffer = IntBuffer::new();
    let generator = ValueGenerator::new(config.bound, config.count, config.seed);
    generator
        .fill(&mut buffer, &config.input_path)
        .with_context(|| format!("Генерация входа в {}", config.input_path))?;
    info!(
        path = %config.input_path,
        len = buffer.len(),
        seed = ?config.seed,
        "Вход сгенерирован"
    );
    Ok(buffer)
}
