//! Performance benchmarks for block-extract.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small listing page for microbenchmarks
//! - Synthetic listing pages of growing size for throughput
//! - The validity heuristic on its own

use block_extract::validity::is_valid;
use block_extract::{extract, extract_with_options, Options};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Best laptops under 50,000</title>
</head>
<body>
    <div class="nav"><a href="/">Home</a> <a href="/laptops">Laptops</a></div>
    <div class="product">HP 15s: Ryzen 5, 8 GB RAM, 512 GB SSD - great value.</div>
    <div class="product">Lenovo IdeaPad Slim 3: Core i5, 16 GB, full-HD display.</div>
    <div class="product">ASUS VivoBook 15: Core i3, 8 GB, thin-and-light body.</div>
    <div class="price">Rs. 45,990</div>
    <div class="price">Rs. 48,490</div>
    <div class="price">Rs. 42,999</div>
    <div class="footer">Copyright 2024</div>
</body>
</html>
"#;

/// Listing page with `rows` product cards spread over a few classes.
fn listing_page(rows: usize) -> String {
    let mut html = String::from("<html><head><title>Listing</title></head><body>");
    for i in 0..rows {
        html.push_str(&format!(
            r#"<div class="card col-{}"><div class="title">Item {i}: well-built, fairly priced.</div><div class="meta">{i} reviews</div></div>"#,
            i % 4
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options::with_window(2, 10);

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Benchmark with listing pages of growing size
fn bench_listing_sizes(c: &mut Criterion) {
    let options = Options::with_window(10, 100);
    let mut group = c.benchmark_group("listing");

    for rows in [50, 500, 5_000] {
        let html = listing_page(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", rows), &html, |b, html| {
            b.iter(|| extract_with_options(black_box(html), &options));
        });
    }

    group.finish();
}

fn bench_validity(c: &mut Criterion) {
    let prose = "Lenovo IdeaPad Slim 3: Core i5, 16 GB, full-HD display and a backlit keyboard.";
    let labels = "Laptop Windows Intel Silver Thin Light Student Office";

    c.bench_function("is_valid_prose", |b| b.iter(|| is_valid(black_box(prose))));
    c.bench_function("is_valid_labels", |b| b.iter(|| is_valid(black_box(labels))));
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_listing_sizes,
    bench_validity
);
criterion_main!(benches);
