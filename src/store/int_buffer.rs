//! Модуль динамического буфера целых чисел (IntBuffer).
//!
//! Реализует владеющий непрерывный буфер знаковых 64-битных целых
//! с явной политикой роста ёмкости: при заполнении ёмкость удваивается
//! (минимум [`MIN_CAPACITY`]), как в классических динамических массивах.
//! Доступ по индексу проверяется и возвращает ошибку вместо паники.

use std::fmt::{self, Display};

use crate::error::{BufferError, BufferResult};

/// Минимальная ёмкость, выделяемая при первом росте.
pub const MIN_CAPACITY: usize = 8;

/// Владеющий растущий буфер целых чисел.
///
/// Инвариант: `len() <= capacity()`. Ёмкость отслеживается отдельно
/// от хранилища, чтобы политика удвоения оставалась наблюдаемой:
/// рост происходит ровно в момент, когда `append` находит буфер
/// заполненным.
#[derive(Debug, Clone, Default)]
pub struct IntBuffer {
    data: Vec<i64>,
    capacity: usize,
}

impl IntBuffer {
    /// Создаёт пустой буфер без выделенной памяти.
    pub fn new() -> Self {
        IntBuffer {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Создаёт пустой буфер с заранее выделенной ёмкостью.
    pub fn with_capacity(capacity: usize) -> Self {
        IntBuffer {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Строит буфер из готового вектора значений (ёмкость = длина).
    pub fn from_vec(values: Vec<i64>) -> Self {
        let capacity = values.len();
        IntBuffer {
            data: values,
            capacity,
        }
    }

    /// Текущее количество элементов.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Проверяет, пуст ли буфер.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Текущая ёмкость (элементов до следующего роста).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Добавляет значение в конец буфера.
    ///
    /// При `len == capacity` ёмкость удваивается (минимум
    /// [`MIN_CAPACITY`]); переполнение арифметики удвоения — ошибка
    /// [`BufferError::CapacityOverflow`].
    pub fn append(
        &mut self,
        value: i64,
    ) -> BufferResult<()> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Читает значение по индексу.
    pub fn get(
        &self,
        index: usize,
    ) -> BufferResult<i64> {
        self.data
            .get(index)
            .copied()
            .ok_or(BufferError::OutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Перезаписывает значение по индексу. Роста не происходит.
    pub fn set(
        &mut self,
        index: usize,
        value: i64,
    ) -> BufferResult<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BufferError::OutOfBounds { index, len }),
        }
    }

    /// Итератор по значениям слева направо.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.data.iter().copied()
    }

    /// Содержимое буфера как срез.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Максимальное значение в буфере, если он не пуст.
    pub fn max(&self) -> Option<i64> {
        self.data.iter().copied().max()
    }

    /// Забирает значения, разрушая буфер.
    pub fn into_vec(self) -> Vec<i64> {
        self.data
    }

    /// Проверяет внутренние инварианты буфера (для тестов и отладки).
    pub fn debug_assert_invariants(&self) {
        debug_assert!(self.data.len() <= self.capacity);
        debug_assert!(self.data.capacity() >= self.capacity);
    }

    /// Удваивает ёмкость: `max(MIN_CAPACITY, capacity * 2)`.
    fn grow(&mut self) -> BufferResult<()> {
        let new_capacity = if self.capacity < MIN_CAPACITY {
            MIN_CAPACITY
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(BufferError::CapacityOverflow {
                    capacity: self.capacity,
                })?
        };
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
        Ok(())
    }
}

impl Display for IntBuffer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[ ")?;
        let last = self.data.len().saturating_sub(1);
        for (i, v) in self.data.iter().enumerate() {
            if i < last {
                write!(f, "{v}, ")?;
            } else {
                write!(f, "{v} ")?;
            }
        }
        write!(f, "]")
    }
}

/// Равенство по содержимому, как у `Vec`: запас ёмкости — деталь
/// размещения, а не часть значения.
impl PartialEq for IntBuffer {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntBuffer {}

impl<'a> IntoIterator for &'a IntBuffer {
    type Item = i64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter().copied()
    }
}
