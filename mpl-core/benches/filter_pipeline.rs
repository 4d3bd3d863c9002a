use std::hint::black_box;
use std::path::PathBuf;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use mpl_core::config::BrowserConfig;
use mpl_core::fs::Entry;
use mpl_core::model::{FilterConfig, FilterPipeline};
use mpl_core::util::matches;

const EXTENSIONS: [&str; 6] = ["mkv", "mp4", "srt", "flac", "txt", "jpg"];

fn sample_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let name = if i % 10 == 0 {
                format!("Season {:02}", i / 10)
            } else if i % 7 == 0 {
                format!(".cache-{i}")
            } else {
                format!("Some Show S01E{i:03} 1080p.{}", EXTENSIONS[i % EXTENSIONS.len()])
            };
            Entry::new(PathBuf::from("/media/shows").join(name), i % 10 == 0)
        })
        .collect()
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let browser = BrowserConfig::default();
    let pipeline = FilterPipeline::new(&browser);

    let mut group = c.benchmark_group("filter_pipeline");
    for count in [100usize, 1_000, 10_000] {
        let entries = sample_entries(count);
        group.throughput(Throughput::Elements(count as u64));

        let plain = FilterConfig::from_browser(&browser);
        group.bench_with_input(BenchmarkId::new("defaults", count), &entries, |b, entries| {
            b.iter(|| pipeline.apply(black_box(entries), black_box(&plain)));
        });

        let searching = FilterConfig {
            search_text: "s01e 1080".to_string(),
            show_hidden: true,
            ..FilterConfig::from_browser(&browser)
        };
        group.bench_with_input(BenchmarkId::new("search", count), &entries, |b, entries| {
            b.iter(|| pipeline.apply(black_box(entries), black_box(&searching)));
        });
    }
    group.finish();
}

fn bench_text_match(c: &mut Criterion) {
    c.bench_function("text_match/three_words", |b| {
        b.iter(|| {
            matches(
                black_box("show 1080p s01e"),
                black_box("Some Show S01E042 1080p.mkv"),
            )
        });
    });
}

criterion_group!(benches, bench_filter_pipeline, bench_text_match);
criterion_main!(benches);
