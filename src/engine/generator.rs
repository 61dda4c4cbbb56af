//! Генерация псевдослучайного входа.
//!
//! Заполняет буфер равномерными значениями из `[0, bound)` и тем же
//! проходом пишет их в текстовый входной файл, чтобы прогон можно
//! было повторить на идентичных данных.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{error::EngineResult, store::IntBuffer};

/// Генератор равномерных значений домена.
///
/// С `seed = None` используется энтропия ОС, с `Some` —
/// воспроизводимая последовательность.
#[derive(Debug)]
pub struct ValueGenerator {
    bound: i64,
    count: usize,
    rng: StdRng,
}

impl ValueGenerator {
    /// Создаёт генератор `count` значений из домена `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Паникует при `bound <= 0`: пустой домен нечем заполнять.
    pub fn new(
        bound: i64,
        count: usize,
        seed: Option<u64>,
    ) -> Self {
        assert!(bound > 0, "домен генератора пуст");
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { bound, count, rng }
    }

    /// Заполняет буфер, параллельно записывая вход в файл `path`.
    pub fn fill<P: AsRef<Path>>(
        mut self,
        buffer: &mut IntBuffer,
        path: P,
    ) -> EngineResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for _ in 0..self.count {
            let value = self.rng.gen_range(0..self.bound);
            buffer.append(value)?;
            write!(writer, "{value} ")?;
        }
        writer.flush()?;

        Ok(())
    }
}
