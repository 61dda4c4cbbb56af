use tracing_appender::non_blocking::WorkerGuard;

/// Handle для управления lifecycle логирования.
///
/// Держит guard неблокирующего файлового writer-а: пока handle жив,
/// фоновый поток дописывает буфер; drop сбрасывает хвост на диск.
pub struct LoggingHandle {
    /// File guard (присутствует, если file logging включён)
    _file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    /// Создаёт новый LoggingHandle.
    pub fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }

    /// Активен ли файловый слой.
    pub fn file_logging_enabled(&self) -> bool {
        self._file_guard.is_some()
    }
}
