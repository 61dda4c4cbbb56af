#![no_main]
use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

use dublon::{DuplicateCounter, DuplicateResolver, IntBuffer};

/// Произвольный буфер в пределах небольшого домена.
fn arb_buffer(u: &mut Unstructured<'_>) -> arbitrary::Result<(i64, IntBuffer)> {
    let bound = u.int_in_range::<i64>(1..=1024)?;
    let len = u.int_in_range::<u16>(0..=2048)? as usize;

    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(u.int_in_range::<i64>(0..=bound - 1)?);
    }
    Ok((bound, IntBuffer::from_vec(values)))
}

// Постусловия разрешения на произвольных входах: длина не меняется,
// значения остаются в домене, учёт дубликатов сходится.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    if let Ok((bound, mut buffer)) = arb_buffer(&mut u) {
        let before = DuplicateCounter::new(bound)
            .count(&buffer)
            .expect("подсчёт на валидном домене не может отказать");
        let len_before = buffer.len();

        let outcome = DuplicateResolver::new(bound)
            .resolve(&mut buffer)
            .expect("разрешение на валидном домене не может отказать");

        assert_eq!(buffer.len(), len_before);
        assert!(buffer.iter().all(|v| (0..bound).contains(&v)));
        assert_eq!(outcome.relocated + outcome.unresolved, before.duplicates);

        let after = DuplicateCounter::new(bound)
            .count(&buffer)
            .expect("подсчёт на валидном домене не может отказать");
        assert_eq!(after.duplicates, outcome.unresolved);
    }
});
