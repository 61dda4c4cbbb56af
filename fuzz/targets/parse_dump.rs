#![no_main]
use libfuzzer_sys::fuzz_target;

use dublon::parse_dump;

// Разбор произвольных байтов как текстового дампа: любые данные
// должны давать Ok или ошибку, но никогда панику.
fuzz_target!(|data: &[u8]| {
    if let Ok(contents) = std::str::from_utf8(data) {
        for bound in [1i64, 16, 10_000_000] {
            let _ = parse_dump(contents, bound);
        }
    }
});
