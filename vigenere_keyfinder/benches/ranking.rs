use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigenere_keyfinder::{encrypt, Dictionary, FrequencyModel, KeyFinder, SearchConfig};

/// Deterministic pseudo-words, spread over lengths 4-12
fn synthetic_dictionary(size: u64) -> Dictionary {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    Dictionary::from_frequencies((0..size).map(|_| {
        let len = 4 + (next() % 9) as usize;
        let word: String = (0..len).map(|_| (b'a' + (next() % 26) as u8) as char).collect();
        (word, next() % 10_000)
    }))
}

fn bench_key_search(c: &mut Criterion) {
    let dictionary = synthetic_dictionary(50_000);
    let model = FrequencyModel::portuguese();
    let finder = KeyFinder::new(&dictionary, &model, SearchConfig::key_search()).unwrap();

    c.bench_function("key_search_8_letters", |b| {
        b.iter(|| finder.search_keys(black_box("kmrvrfwg")).unwrap())
    });
}

fn bench_phrase_search(c: &mut Criterion) {
    let dictionary = synthetic_dictionary(20_000);
    let model = FrequencyModel::portuguese();
    let finder = KeyFinder::new(&dictionary, &model, SearchConfig::phrase_search()).unwrap();
    let cipher = encrypt("ataque ao amanhecer pela porta norte", "limao").unwrap();

    c.bench_function("phrase_search", |b| {
        b.iter(|| finder.search_phrases(black_box(&cipher)).unwrap())
    });
}

criterion_group!(benches, bench_key_search, bench_phrase_search);
criterion_main!(benches);
