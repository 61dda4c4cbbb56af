//! Текстовые дампы буфера.
//!
//! Формат дампа — целые числа, разделённые пробелами (после каждого
//! значения ставится разделитель). Чтение принимает любые пробельные
//! разделители и восстанавливает последовательность в исходном
//! порядке; каждое значение проверяется на принадлежность домену.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    error::{EngineError, EngineResult},
    store::IntBuffer,
};

/// Сохраняет содержимое буфера в текстовый дамп по пути `path`.
pub fn save_to_txt<P: AsRef<Path>>(path: P, buffer: &IntBuffer) -> EngineResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for value in buffer.iter() {
        write!(writer, "{value} ")?;
    }
    writer.flush()?;

    Ok(())
}

/// Загружает дамп в новый буфер, проверяя домен `[0, bound)`.
///
/// Нечисловой токен — ошибка [`EngineError::Parse`] с позицией токена;
/// значение вне домена — [`EngineError::ValueOutOfDomain`].
pub fn load_from_txt<P: AsRef<Path>>(path: P, bound: i64) -> EngineResult<IntBuffer> {
    let file = File::open(path)?;
    let mut contents = String::new();
    BufReader::new(file).read_to_string(&mut contents)?;

    parse_dump(&contents, bound)
}

/// Разбирает содержимое дампа из памяти.
pub fn parse_dump(contents: &str, bound: i64) -> EngineResult<IntBuffer> {
    let mut buffer = IntBuffer::new();
    for (position, token) in contents.split_whitespace().enumerate() {
        let value: i64 = token.parse().map_err(|_| EngineError::Parse {
            token: token.to_string(),
            position,
        })?;
        if value < 0 || value >= bound {
            return Err(EngineError::ValueOutOfDomain { value, bound });
        }
        buffer.append(value)?;
    }

    Ok(buffer)
}
