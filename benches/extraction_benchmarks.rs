use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tubescrape::{seconds_to_human_string, seconds_to_machine_string, Channel, Playlist, Video};

const CHANNEL_PAGE: &str = include_str!("../tests/fixtures/channel_about.html");
const PLAYLIST_PAGE: &str = include_str!("../tests/fixtures/playlist.html");
const WATCH_PAGE: &str = include_str!("../tests/fixtures/watch.html");

fn benchmark_record_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("Record Builders");

    group.bench_function("channel", |b| {
        b.iter(|| Channel::build(black_box("@IronMouseParty"), black_box(CHANNEL_PAGE)))
    });
    group.bench_function("playlist", |b| {
        b.iter(|| Playlist::build(black_box("UUhgPVLjqugDQpRLWvC7zzig"), black_box(PLAYLIST_PAGE)))
    });
    group.bench_function("video", |b| {
        b.iter(|| Video::build(black_box("Wd0P-dailbY"), black_box(WATCH_PAGE)))
    });

    group.finish();
}

fn benchmark_page_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Playlist Page Size");

    // Real playlist pages carry ~100 renderers; pad the fixture to match
    for copies in [1usize, 10, 100] {
        let page = PLAYLIST_PAGE.repeat(copies);
        group.bench_with_input(BenchmarkId::new("playlist", copies), &page, |b, page| {
            b.iter(|| Playlist::build(black_box("UUhgPVLjqugDQpRLWvC7zzig"), black_box(page)))
        });
    }

    group.finish();
}

fn benchmark_duration_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Duration Formatting");

    for seconds in [59u64, 3599, 90061] {
        group.bench_with_input(BenchmarkId::new("human", seconds), &seconds, |b, &s| {
            b.iter(|| seconds_to_human_string(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("machine", seconds), &seconds, |b, &s| {
            b.iter(|| seconds_to_machine_string(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_record_builders,
    benchmark_page_size,
    benchmark_duration_formatting
);
criterion_main!(benches);
