//! Модуль битовой карты домена (DomainBitmap).
//!
//! Отмечает присутствие значений из ограниченного домена `[0, D)`
//! одним битом на значение. Используется алгоритмами дедупликации
//! в двух ролях: «уже встречалось при сканировании» и «свободный
//! слот домена». Запросы вне домена отвечают `false`, мутации вне
//! домена отклоняются.

use std::ops::Not;

/// Число бит в одном слове хранилища.
const WORD_BITS: usize = 64;

/// Битовая карта фиксированного домена `[0, bound)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainBitmap {
    words: Vec<u64>,
    bound: i64,
}

impl DomainBitmap {
    /// Создаёт карту для домена `[0, bound)`, все биты сброшены.
    ///
    /// # Panics
    /// Паникует при отрицательной границе домена.
    pub fn with_bound(bound: i64) -> Self {
        assert!(bound >= 0, "domain bound must be non-negative");
        let word_len = (bound as usize + WORD_BITS - 1) / WORD_BITS;
        Self {
            words: vec![0u64; word_len],
            bound,
        }
    }

    /// Граница домена (исключающая).
    #[inline(always)]
    pub fn bound(&self) -> i64 {
        self.bound
    }

    /// Проверяет, отмечено ли значение. Вне домена — всегда `false`.
    pub fn contains(
        &self,
        value: i64,
    ) -> bool {
        if value < 0 || value >= self.bound {
            return false;
        }
        let (word, mask) = Self::locate(value);
        self.words[word] & mask != 0
    }

    /// Отмечает значение. Возвращает `true`, если бит был сброшен
    /// (значение действительно добавлено). Вне домена — `false`.
    pub fn insert(
        &mut self,
        value: i64,
    ) -> bool {
        if value < 0 || value >= self.bound {
            return false;
        }
        let (word, mask) = Self::locate(value);
        let added = self.words[word] & mask == 0;
        self.words[word] |= mask;
        added
    }

    /// Снимает отметку. Возвращает `true`, если бит был установлен.
    /// Вне домена — `false`.
    pub fn remove(
        &mut self,
        value: i64,
    ) -> bool {
        if value < 0 || value >= self.bound {
            return false;
        }
        let (word, mask) = Self::locate(value);
        let removed = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        removed
    }

    /// Количество отмеченных значений.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Проверяет, что ни одно значение не отмечено.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    fn locate(value: i64) -> (usize, u64) {
        let bit = value as usize;
        (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
    }

    /// Маска значимых бит последнего слова (хвост за границей домена
    /// всегда нулевой).
    fn tail_mask(&self) -> u64 {
        let tail_bits = (self.bound as usize) % WORD_BITS;
        if tail_bits == 0 {
            u64::MAX
        } else {
            (1u64 << tail_bits) - 1
        }
    }
}

// Дополнение внутри домена: свободные слоты = !присутствие.

impl Not for &DomainBitmap {
    type Output = DomainBitmap;

    fn not(self) -> Self::Output {
        let mut words: Vec<u64> = self.words.iter().map(|w| !w).collect();
        if let Some(last) = words.last_mut() {
            *last &= self.tail_mask();
        }
        DomainBitmap {
            words,
            bound: self.bound,
        }
    }
}
