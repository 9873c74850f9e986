use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use chieru_core::prelude::*;

fn sample_text() -> String {
    "The quick brown fox, 敏捷的棕色狐狸，jumps over the lazy dog! ".repeat(64)
}

fn bench_text(c: &mut Criterion) {
    let codec = ChieruCodec::new();
    let text = sample_text();
    let encoded = codec.encode_text(&text);

    let mut group = c.benchmark_group("document");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("encode_text", |b| b.iter(|| codec.encode_text(black_box(&text))));
    group.bench_function("decode_text", |b| b.iter(|| codec.decode_text(black_box(&encoded))));
    group.finish();
}

fn bench_word(c: &mut Criterion) {
    let codec = ChieruCodec::new();
    let bytes: Vec<u8> = (0..=255u8).collect();
    let glyphs = codec.encode_word(&bytes);

    c.bench_function("encode_word_256", |b| b.iter(|| codec.encode_word(black_box(&bytes))));
    c.bench_function("decode_word_256", |b| b.iter(|| codec.decode_word(black_box(&glyphs))));
}

fn bench_batch(c: &mut Criterion) {
    let config = CodecConfig { workers: Some(4), telemetry: false, ..CodecConfig::default() };
    let codec = ChieruCodec::new().with_config(config).unwrap();
    let docs: Vec<String> = (0..256).map(|i| format!("{i}: {}", sample_text())).collect();

    c.bench_function("encode_batch_256_docs", |b| b.iter(|| encode_batch(&codec, black_box(&docs))));
}

criterion_group!(benches, bench_text, bench_word, bench_batch);
criterion_main!(benches);
