//! Benchmarks for diacritic removal and Paleo-Hebrew mapping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ketav::diacritic::is_niqqud_char;
use ketav::paleo::to_paleo;
use ketav::profile::TransformProfile;
use ketav::remove::{remove_diacritics, remove_diacritics_with};

const VERSE: &str = "בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים אֵ֥ת הַשָּׁמַ֖יִם וְאֵ֥ת הָאָֽרֶץ׃ ";

fn chapter() -> String {
    VERSE.repeat(31)
}

fn bench_remove(c: &mut Criterion) {
    let text = chapter();
    c.bench_function("remove_all_chapter", |bench| {
        bench.iter(|| black_box(remove_diacritics(black_box(&text))))
    });
    c.bench_function("remove_niqqud_chapter", |bench| {
        bench.iter(|| black_box(remove_diacritics_with(black_box(&text), is_niqqud_char)))
    });
}

fn bench_paleo(c: &mut Criterion) {
    let text = remove_diacritics(&chapter());
    c.bench_function("to_paleo_chapter", |bench| {
        bench.iter(|| black_box(to_paleo(black_box(&text))))
    });
}

fn bench_profile(c: &mut Criterion) {
    let text = chapter();
    let profile = TransformProfile::builtin("paleo").unwrap();
    c.bench_function("paleo_profile_chapter", |bench| {
        bench.iter(|| black_box(profile.apply(black_box(&text))))
    });
}

criterion_group!(benches, bench_remove, bench_paleo, bench_profile);
criterion_main!(benches);
