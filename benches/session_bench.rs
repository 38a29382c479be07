// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fetcher::{CacheKey, Cookie, CookieJar, Request, Response, ResponseCache};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

fn cookie_merge_benchmark(c: &mut Criterion) {
    let initial: Vec<Cookie> = (0..20)
        .map(|i| Cookie::new(format!("c{}", i), "v"))
        .collect();
    let update = vec![
        Cookie::new("c5", "updated"),
        Cookie::new("c19", "updated"),
        Cookie::new("fresh", "new"),
    ];

    c.bench_function("cookie_merge", |b| {
        b.iter(|| {
            let mut jar: CookieJar = initial.iter().cloned().collect();
            jar.merge(update.iter().cloned());
            black_box(jar.len())
        })
    });

    c.bench_function("cookie_attach", |b| {
        let jar: CookieJar = initial.iter().cloned().collect();
        b.iter(|| {
            let mut req = Request::get("http://example.com/").unwrap();
            jar.attach(&mut req);
            black_box(req)
        })
    });
}

fn cache_lookup_benchmark(c: &mut Criterion) {
    let mut cache = ResponseCache::new(60);
    let response = Response::new(
        StatusCode::OK,
        HeaderMap::new(),
        Bytes::from_static(b"cached body"),
        url::Url::parse("http://example.com/").unwrap(),
    );
    for i in 0..100 {
        cache.store_at(
            CacheKey::get(&format!("http://example.com/{}", i)),
            response.clone(),
            0,
        );
    }
    let key = CacheKey::get("http://example.com/42");

    c.bench_function("cache_lookup_hit", |b| {
        b.iter(|| black_box(cache.lookup_at(&key, 30).is_some()))
    });
}

criterion_group!(benches, cookie_merge_benchmark, cache_lookup_benchmark);
criterion_main!(benches);
