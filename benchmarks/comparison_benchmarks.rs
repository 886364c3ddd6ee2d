#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: urlsplit vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Rust url crate
use url::Url as UrlCrate;

/// A mix of shapes: bare hosts, ports, deep paths, long queries
const SAMPLE_URLS: &[&str] = &[
    "http://example.com/",
    "https://www.wikipedia.org/wiki/Uniform_Resource_Locator",
    "https://api.example.com:8443/v1/users/42/orders?status=open&limit=50&offset=100",
    "http://192.168.1.1:3000/api",
    "https://search.example.com/q?text=hello%20world&lang=en&safe=on#results",
    "ftp://files.example.com/pub/archive.tar.gz",
    "https://cdn.example.com/assets/img/logo.png?v=20240101",
];

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "http://example.com/";

    group.bench_function("urlsplit", |b| {
        b.iter(|| urlsplit::parse_url(black_box(input)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");
    let input = "https://secure.example.com:8080/path/to/resource?query=value&key=data#section";

    group.bench_function("urlsplit", |b| {
        b.iter(|| urlsplit::parse_url(black_box(input)));
    });

    group.bench_function("urlsplit_components", |b| {
        b.iter(|| urlsplit::split_components(black_box(input)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_samples");

    group.bench_function("urlsplit", |b| {
        b.iter(|| {
            for url in SAMPLE_URLS {
                black_box(urlsplit::parse_url(black_box(url)));
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for url in SAMPLE_URLS {
                black_box(UrlCrate::parse(black_box(url)).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_query_decode_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_decode");
    let input = "status=open&limit=50&offset=100&q=hello%20world&lang=en&tag=a&tag=b&tag=c";

    group.bench_function("urlsplit", |b| {
        b.iter(|| urlsplit::decode_query(black_box(input)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(input).as_bytes())
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_query_encode_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_encode");
    let pairs = urlsplit::decode_query("status=open&limit=50&q=hello%20world&path=%2Fa%2Fb");

    group.bench_function("urlsplit", |b| {
        b.iter(|| urlsplit::encode_query(black_box(&pairs)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("parsed_url", |b| {
        b.iter(|| {
            for url in SAMPLE_URLS {
                black_box(urlsplit::ParsedUrl::parse(black_box(url)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_parse_samples,
    bench_query_decode_all,
    bench_query_encode_all,
    bench_normalize,
);
criterion_main!(benches);
