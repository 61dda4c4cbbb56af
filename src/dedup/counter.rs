//! Подсчёт дубликатов в буфере.
//!
//! Сканирует буфер слева направо с картой «уже встречалось»
//! и считает повторные вхождения: итог равен `всего - различных`.
//! Карта отметок строится заново при каждом запуске и возвращается
//! вызывающему вместе с числом дубликатов.

use crate::{
    error::{BufferError, BufferResult},
    store::{DomainBitmap, IntBuffer},
};

/// Результат подсчёта дубликатов.
#[derive(Debug, Clone)]
pub struct CountReport {
    /// Число повторных вхождений (каждое вхождение сверх первого).
    pub duplicates: u64,
    /// Отметки «значение встречалось» после полного сканирования.
    pub seen: DomainBitmap,
}

/// Счётчик дубликатов над доменом `[0, bound)`.
///
/// Предусловие на значения буфера — принадлежность домену —
/// проверяется явно: нарушение даёт [`BufferError::ValueOutOfDomain`].
#[derive(Debug, Clone, Copy)]
pub struct DuplicateCounter {
    bound: i64,
}

impl DuplicateCounter {
    /// Создаёт счётчик для домена `[0, bound)`.
    pub fn new(bound: i64) -> Self {
        Self { bound }
    }

    /// Считает повторные вхождения значений буфера.
    pub fn count(
        &self,
        buffer: &IntBuffer,
    ) -> BufferResult<CountReport> {
        let mut seen = DomainBitmap::with_bound(self.bound);
        let mut duplicates = 0u64;

        for value in buffer.iter() {
            if value < 0 || value >= self.bound {
                return Err(BufferError::ValueOutOfDomain {
                    value,
                    bound: self.bound,
                });
            }
            if !seen.insert(value) {
                duplicates += 1;
            }
        }

        Ok(CountReport { duplicates, seen })
    }
}
