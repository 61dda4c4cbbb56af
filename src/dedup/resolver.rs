//! Устранение дубликатов перемещением в ближайший свободный слот.
//!
//! Резолвер сканирует буфер слева направо. Первое вхождение значения
//! остаётся на месте; каждое повторное получает ближайший свободный
//! слот домена, найденный расходящимся поиском от значения: радиус
//! растёт на единицу за шаг, при равном радиусе левая сторона всегда
//! предпочитается правой. Когда одна сторона выходит за домен, поиск
//! продолжается только по другой. Если свободных слотов не осталось,
//! дубликат остаётся без изменений и попадает в счётчик `unresolved`.

use crate::{
    error::{BufferError, BufferResult},
    store::{DomainBitmap, IntBuffer},
};

/// Итог разрешения дубликатов.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Сколько дубликатов получили новые значения.
    pub relocated: u64,
    /// Сколько дубликатов осталось: домен исчерпан.
    pub unresolved: u64,
}

/// Резолвер дубликатов над доменом `[0, bound)`.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateResolver {
    bound: i64,
}

impl DuplicateResolver {
    /// Создаёт резолвер для домена `[0, bound)`.
    pub fn new(bound: i64) -> Self {
        Self { bound }
    }

    /// Разрешает дубликаты на месте за один проход.
    ///
    /// Карта свободных слотов строится один раз по исходному
    /// содержимому буфера (только присутствие, без кратности) и
    /// убывает по мере перемещений: занятый перемещением слот
    /// недоступен последующим дубликатам.
    pub fn resolve(
        &self,
        buffer: &mut IntBuffer,
    ) -> BufferResult<ResolveOutcome> {
        let mut free = self.free_slots(buffer)?;
        let mut seen = DomainBitmap::with_bound(self.bound);
        let mut outcome = ResolveOutcome::default();

        for index in 0..buffer.len() {
            let value = buffer.get(index)?;
            if seen.insert(value) {
                // Первое вхождение — слот остаётся как есть.
                continue;
            }
            match Self::claim_nearest_free(&mut free, value, self.bound - 1) {
                Some(slot) => {
                    buffer.set(index, slot)?;
                    outcome.relocated += 1;
                }
                None => outcome.unresolved += 1,
            }
        }

        Ok(outcome)
    }

    /// Карта свободных слотов: дополнение присутствия значений буфера
    /// в домене. Значение, встречающееся один или много раз, выбывает
    /// из свободных ровно один раз.
    fn free_slots(
        &self,
        buffer: &IntBuffer,
    ) -> BufferResult<DomainBitmap> {
        let mut present = DomainBitmap::with_bound(self.bound);
        for value in buffer.iter() {
            if value < 0 || value >= self.bound {
                return Err(BufferError::ValueOutOfDomain {
                    value,
                    bound: self.bound,
                });
            }
            present.insert(value);
        }
        Ok(!&present)
    }

    /// Расходящийся поиск свободного слота от `value` с захватом.
    ///
    /// Пока обе границы в домене, на каждом радиусе левая сторона
    /// проверяется первой; затем — хвостовой односторонний проход.
    /// Возвращённый слот уже удалён из `free`.
    fn claim_nearest_free(
        free: &mut DomainBitmap,
        value: i64,
        upper: i64,
    ) -> Option<i64> {
        let mut left = value - 1;
        let mut right = value + 1;

        while left >= 0 && right <= upper {
            if free.remove(left) {
                return Some(left);
            }
            if free.remove(right) {
                return Some(right);
            }
            left -= 1;
            right += 1;
        }
        while left >= 0 {
            if free.remove(left) {
                return Some(left);
            }
            left -= 1;
        }
        while right <= upper {
            if free.remove(right) {
                return Some(right);
            }
            right += 1;
        }

        None
    }
}
