use std::{hint::black_box, sync::LazyLock};

use criterion::{criterion_group, criterion_main, Criterion};
use eolcheck::{convert, LineEnding};
use regex::bytes::Regex;

static DOS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n").unwrap());

fn bench_to_unix(c: &mut Criterion) {
    let input = "
      Это пример параграфа с пробелами и юникодом.\r\n
    Он содержит строки на русском языке, немного английского, и даже: こんにちは世界！\r\n

    Here's a sentence with normal ASCII characters, leading spaces, and symbols: @$%&.\r\n

            مرحبا بك في عالم الترميز الموحد.
    "
    .to_string();
    let large_input = input.repeat(4096);

    let converted = convert(input.as_bytes(), LineEnding::Dos, LineEnding::Unix);
    assert_eq!(&*converted, &*DOS_REGEX.replace_all(input.as_bytes(), &b"\n"[..]));
    assert_eq!(&*converted, newline_converter::dos2unix(&input).as_bytes());

    c.bench_function("regex", |b| {
        b.iter(|| DOS_REGEX.replace_all(black_box(input.as_bytes()), &b"\n"[..]))
    });

    c.bench_function("regex with large text", |b| {
        b.iter(|| DOS_REGEX.replace_all(black_box(large_input.as_bytes()), &b"\n"[..]))
    });

    c.bench_function("3rd party crate \"newline-converter\": dos2unix()", |b| {
        b.iter(|| newline_converter::dos2unix(black_box(&input)))
    });

    c.bench_function(
        "3rd party crate \"newline-converter\": dos2unix() with large text",
        |b| b.iter(|| newline_converter::dos2unix(black_box(&large_input))),
    );

    c.bench_function("this crate: convert()", |b| {
        b.iter(|| convert(black_box(input.as_bytes()), LineEnding::Dos, LineEnding::Unix))
    });

    c.bench_function("this crate: convert() with large text", |b| {
        b.iter(|| {
            convert(
                black_box(large_input.as_bytes()),
                LineEnding::Dos,
                LineEnding::Unix,
            )
        })
    });
}

criterion_group!(benches, bench_to_unix);
criterion_main!(benches);
