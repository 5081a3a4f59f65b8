//! Performance benchmarks for webcache-location.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use webcache_location::{
    build_wrapped_url, extract_path, select_navigator, AmbientLocation, MemoryHistory, Navigator,
};

const WRAPPED_URLS: [(&str, &str); 3] = [
    (
        "short",
        "http://webcache.googleusercontent.local:3000/search?q=cache:https://www.angularclass.com/courses",
    ),
    (
        "encoded",
        "http://webcache.googleusercontent.local:3000/search?q=cache:https%3A%2F%2Fwww.angularclass.com%2Fcourses%2Fangular%3Fpage%3D2&hl=en&gl=us",
    ),
    (
        "long_path",
        "http://webcache.googleusercontent.local:3000/search?q=cache:www.blog.angularclass.com/a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p?x=1&cd=1&strip=1",
    ),
];

fn bench_extract_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_path");
    for (name, url) in &WRAPPED_URLS {
        group.bench_with_input(BenchmarkId::from_parameter(name), url, |b, url| {
            b.iter(|| extract_path(black_box(url)));
        });
    }
    group.finish();
}

fn bench_build_wrapped_url(c: &mut Criterion) {
    let current = WRAPPED_URLS[0].1;
    c.bench_function("build_wrapped_url", |b| {
        b.iter(|| build_wrapped_url(black_box("/courses/angular?page=2"), black_box(current)));
    });
}

fn bench_navigate(c: &mut Criterion) {
    let location = AmbientLocation::new(
        "webcache.googleusercontent.local:3000",
        "/search",
        "?q=cache:https://www.angularclass.com/",
    );
    let mut nav = select_navigator(
        "webcache.googleusercontent.local:3000",
        MemoryHistory::new(),
        location,
    );

    c.bench_function("navigate_cache_aware", |b| {
        b.iter(|| nav.replace(black_box("courses"), black_box("")));
    });
}

criterion_group!(
    benches,
    bench_extract_path,
    bench_build_wrapped_url,
    bench_navigate
);
criterion_main!(benches);
